//! Flight availability index.

use chrono::NaiveDateTime;

use crate::domain::{IataCode, ScheduledFlight};
use crate::store::{FlightStore, StoreError};

/// Error from flight availability search.
#[derive(Debug, thiserror::Error)]
pub enum FlightSearchError {
    /// A start time is mandatory; "no lower bound" is not a valid search
    #[error("start time is required to search scheduled flights")]
    MissingStartTime,

    /// Storage failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Parameters for a flight availability search.
#[derive(Debug, Clone)]
pub struct FlightQuery<'a> {
    pub origin: &'a IataCode,
    pub destination: &'a IataCode,
    pub airline: &'a str,

    /// Earliest acceptable departure. Mandatory.
    pub start_time: Option<NaiveDateTime>,

    /// Latest acceptable arrival, if the request has a delivery deadline.
    pub delivery_deadline: Option<NaiveDateTime>,
}

/// Find the earliest scheduled flight matching the query.
///
/// Matches exact origin/destination/airline with departure at or after
/// `start_time`; when `delivery_deadline` is set, the arrival must also be
/// at or before it. Returns `Ok(None)` when no flight matches; callers
/// must treat that as "this route cannot be priced", not as a failure.
pub fn find_first_available_flight<S: FlightStore>(
    store: &S,
    query: &FlightQuery<'_>,
) -> Result<Option<ScheduledFlight>, FlightSearchError> {
    let start = query.start_time.ok_or(FlightSearchError::MissingStartTime)?;

    let candidate = store
        .flights_between(query.origin, query.destination)?
        .into_iter()
        .filter(|f| f.airline == query.airline)
        .filter(|f| f.departure_at >= start)
        .filter(|f| match query.delivery_deadline {
            Some(deadline) => f.arrival_at <= deadline,
            None => true,
        })
        .min_by_key(|f| f.departure_at);

    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FlightId;
    use crate::store::MemoryStore;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn iata(s: &str) -> IataCode {
        IataCode::parse(s).unwrap()
    }

    fn flight(id: u64, airline: &str, dep: &str, arr: &str) -> ScheduledFlight {
        ScheduledFlight {
            id: FlightId(id),
            airline: airline.into(),
            flight_number: format!("{airline}{id}"),
            origin: iata("FRA"),
            destination: iata("MEX"),
            departure_at: dt(dep),
            arrival_at: dt(arr),
            pattern_id: None,
        }
    }

    fn store_with(flights: Vec<ScheduledFlight>) -> MemoryStore {
        let store = MemoryStore::new();
        store.add_flights(flights).unwrap();
        store
    }

    fn query<'a>(
        origin: &'a IataCode,
        destination: &'a IataCode,
        start: &str,
    ) -> FlightQuery<'a> {
        FlightQuery {
            origin,
            destination,
            airline: "LH",
            start_time: Some(dt(start)),
            delivery_deadline: None,
        }
    }

    #[test]
    fn earliest_departure_wins() {
        let store = store_with(vec![
            flight(1, "LH", "2025-06-01 18:00", "2025-06-02 06:00"),
            flight(2, "LH", "2025-06-01 10:00", "2025-06-01 22:00"),
            flight(3, "LH", "2025-06-01 14:00", "2025-06-02 02:00"),
        ]);

        let origin = iata("FRA");
        let destination = iata("MEX");
        let found = find_first_available_flight(&store, &query(&origin, &destination, "2025-06-01 08:00"))
            .unwrap()
            .unwrap();
        assert_eq!(found.id, FlightId(2));
    }

    #[test]
    fn departure_before_start_is_excluded() {
        let store = store_with(vec![
            flight(1, "LH", "2025-06-01 10:00", "2025-06-01 22:00"),
            flight(2, "LH", "2025-06-01 18:00", "2025-06-02 06:00"),
        ]);

        let origin = iata("FRA");
        let destination = iata("MEX");
        let found = find_first_available_flight(&store, &query(&origin, &destination, "2025-06-01 12:00"))
            .unwrap()
            .unwrap();
        assert_eq!(found.id, FlightId(2));
    }

    #[test]
    fn departure_exactly_at_start_is_included() {
        let store = store_with(vec![flight(1, "LH", "2025-06-01 10:00", "2025-06-01 22:00")]);

        let origin = iata("FRA");
        let destination = iata("MEX");
        let found = find_first_available_flight(&store, &query(&origin, &destination, "2025-06-01 10:00"))
            .unwrap();
        assert!(found.is_some());
    }

    #[test]
    fn deadline_excludes_late_arrivals() {
        let store = store_with(vec![
            flight(1, "LH", "2025-06-01 10:00", "2025-06-02 08:00"),
            flight(2, "LH", "2025-06-01 14:00", "2025-06-01 23:00"),
        ]);

        let origin = iata("FRA");
        let destination = iata("MEX");
        let mut q = query(&origin, &destination, "2025-06-01 08:00");
        q.delivery_deadline = Some(dt("2025-06-02 00:00"));

        let found = find_first_available_flight(&store, &q).unwrap().unwrap();
        assert_eq!(found.id, FlightId(2));
    }

    #[test]
    fn other_airline_is_excluded() {
        let store = store_with(vec![flight(1, "AM", "2025-06-01 10:00", "2025-06-01 22:00")]);

        let origin = iata("FRA");
        let destination = iata("MEX");
        let found = find_first_available_flight(&store, &query(&origin, &destination, "2025-06-01 08:00"))
            .unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn no_match_is_none_not_error() {
        let store = store_with(vec![]);

        let origin = iata("FRA");
        let destination = iata("MEX");
        let found = find_first_available_flight(&store, &query(&origin, &destination, "2025-06-01 08:00"))
            .unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn missing_start_time_is_an_error() {
        let store = store_with(vec![flight(1, "LH", "2025-06-01 10:00", "2025-06-01 22:00")]);

        let origin = iata("FRA");
        let destination = iata("MEX");
        let mut q = query(&origin, &destination, "2025-06-01 08:00");
        q.start_time = None;

        let result = find_first_available_flight(&store, &q);
        assert!(matches!(result, Err(FlightSearchError::MissingStartTime)));
    }
}
