//! Route assembly.
//!
//! Materializes each flight candidate into a persisted three-segment
//! route option owned by the request.

use crate::domain::{Request, RouteDraft, RouteOption, SegmentDraft};
use crate::store::{AirportStore, FlightStore, RouteStore};

use super::builder::find_flight_options;
use super::error::RoutingError;

/// Build and persist one unpriced route option per flight candidate.
///
/// Each route has exactly three segments: trucking from the request origin
/// to the origin airport, the air leg, and trucking from the destination
/// airport to the request destination. A route and its segments are
/// persisted atomically.
///
/// Rebuilding is delete-then-recreate: callers that want a fresh candidate
/// set must clear the request's existing routes first (the web layer does).
pub fn build_available_routes<S>(store: &S, request: &Request) -> Result<Vec<RouteOption>, RoutingError>
where
    S: AirportStore + FlightStore + RouteStore,
{
    let (Some(origin_geo), Some(destination_geo)) = (&request.origin, &request.destination) else {
        return Err(RoutingError::MissingGeocoding);
    };

    let candidates = find_flight_options(store, request)?;
    let mut routes = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let pickup_leg = SegmentDraft::trucking(
            request.origin_address.clone(),
            origin_geo.coordinates,
            Some(origin_geo.country_code.clone()),
            candidate.origin.name.clone(),
            candidate.origin.coordinates,
            Some(candidate.origin.country_code.clone()),
        );

        let air_leg = SegmentDraft::air(&candidate.origin, &candidate.destination, &candidate.airline);

        let delivery_leg = SegmentDraft::trucking(
            candidate.destination.name.clone(),
            candidate.destination.coordinates,
            Some(candidate.destination.country_code.clone()),
            request.destination_address.clone(),
            destination_geo.coordinates,
            Some(destination_geo.country_code.clone()),
        );

        let draft = RouteDraft::new(request.id, vec![pickup_leg, air_leg, delivery_leg])?;
        routes.push(store.insert_route(draft)?);
    }

    tracing::debug!(request = %request.id, routes = routes.len(), "assembled route options");

    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Airport, Coordinates, FlightId, Geocoded, IataCode, RequestId, RequestStatus, RouteStatus,
        ScheduledFlight, SegmentType,
    };
    use crate::store::MemoryStore;
    use chrono::NaiveDateTime;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn iata(s: &str) -> IataCode {
        IataCode::parse(s).unwrap()
    }

    fn airport(code: &str, lat: f64, lon: f64, cc: &str) -> Airport {
        Airport {
            code: iata(code),
            name: format!("{code} Airport"),
            country_code: cc.into(),
            coordinates: Coordinates::new(lat, lon),
            place_id: None,
            region: None,
        }
    }

    fn flight(id: u64, airline: &str, from: &str, to: &str, dep: &str) -> ScheduledFlight {
        ScheduledFlight {
            id: FlightId(id),
            airline: airline.into(),
            flight_number: format!("{airline}{id}"),
            origin: iata(from),
            destination: iata(to),
            departure_at: dt(dep),
            arrival_at: dt(dep) + chrono::Duration::hours(11),
            pattern_id: None,
        }
    }

    fn request() -> Request {
        Request {
            id: RequestId(1),
            company: "ACME".into(),
            pickup_date: Some(dt("2025-06-01 08:00")),
            delivery_date: None,
            height_cm: None,
            width_cm: None,
            length_cm: None,
            weight_kg: Some(100.0),
            origin_address: "Mainz, Germany".into(),
            destination_address: "Puebla, Mexico".into(),
            origin: Some(Geocoded {
                coordinates: Coordinates::new(50.0, 8.27),
                formatted_address: "Mainz, Germany".into(),
                place_id: None,
                country_code: "DE".into(),
            }),
            destination: Some(Geocoded {
                coordinates: Coordinates::new(19.04, -98.2),
                formatted_address: "Puebla, Mexico".into(),
                place_id: None,
                country_code: "MX".into(),
            }),
            status: RequestStatus::Pending,
            priority: None,
            cheapest_route_id: None,
            fastest_route_id: None,
        }
    }

    fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        store
            .add_airports(vec![
                airport("FRA", 50.033, 8.570, "DE"),
                airport("MEX", 19.436, -99.072, "MX"),
            ])
            .unwrap();
        store
            .add_flights(vec![flight(1, "LH", "FRA", "MEX", "2025-06-02 10:00")])
            .unwrap();
        store
    }

    #[test]
    fn builds_three_segment_routes() {
        let store = seeded_store();
        let routes = build_available_routes(&store, &request()).unwrap();

        assert_eq!(routes.len(), 1);
        let route = &routes[0];
        assert_eq!(route.status, RouteStatus::Initialized);
        assert!(route.total_price_eur.is_none());
        assert_eq!(route.segments.len(), 3);

        let types: Vec<SegmentType> = route.segments.iter().map(|s| s.segment_type).collect();
        assert_eq!(
            types,
            vec![SegmentType::Trucking, SegmentType::Air, SegmentType::Trucking]
        );
        let sequences: Vec<u32> = route.segments.iter().map(|s| s.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3]);
    }

    #[test]
    fn segments_carry_endpoint_details() {
        let store = seeded_store();
        let routes = build_available_routes(&store, &request()).unwrap();
        let segments = &routes[0].segments;

        // Pickup leg: request origin to origin airport.
        assert_eq!(segments[0].origin_name, "Mainz, Germany");
        assert_eq!(segments[0].destination_name, "FRA Airport");
        assert_eq!(segments[0].origin_country_code.as_deref(), Some("DE"));
        assert_eq!(segments[0].destination_country_code.as_deref(), Some("DE"));
        assert!(segments[0].origin_coordinates.is_some());

        // Air leg: airports, airline, country codes.
        assert_eq!(segments[1].origin_airport, Some(iata("FRA")));
        assert_eq!(segments[1].destination_airport, Some(iata("MEX")));
        assert_eq!(segments[1].airline.as_deref(), Some("LH"));
        assert_eq!(segments[1].origin_country_code.as_deref(), Some("DE"));
        assert_eq!(segments[1].destination_country_code.as_deref(), Some("MX"));

        // Delivery leg: destination airport to request destination.
        assert_eq!(segments[2].origin_name, "MEX Airport");
        assert_eq!(segments[2].destination_name, "Puebla, Mexico");
        assert_eq!(segments[2].destination_country_code.as_deref(), Some("MX"));
    }

    #[test]
    fn routes_are_persisted() {
        let store = seeded_store();
        let req = request();
        let routes = build_available_routes(&store, &req).unwrap();

        let stored = store.routes_for_request(req.id).unwrap();
        assert_eq!(stored, routes);
    }

    #[test]
    fn missing_geocoding_is_an_error() {
        let store = seeded_store();
        let mut req = request();
        req.origin = None;

        let result = build_available_routes(&store, &req);
        assert!(matches!(result, Err(RoutingError::MissingGeocoding)));
    }

    #[test]
    fn clear_and_rebuild_recreates_the_same_candidate_set() {
        let store = seeded_store();
        let req = request();

        let first = build_available_routes(&store, &req).unwrap();
        store.delete_routes_for_request(req.id).unwrap();
        let second = build_available_routes(&store, &req).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            // Fresh ids, identical airport/airline tuples.
            assert_ne!(a.id, b.id);
            assert_eq!(
                a.segments[1].origin_airport,
                b.segments[1].origin_airport
            );
            assert_eq!(
                a.segments[1].destination_airport,
                b.segments[1].destination_airport
            );
            assert_eq!(a.segments[1].airline, b.segments[1].airline);
        }
    }
}
