//! Route candidate enumeration.
//!
//! Combines proximity search with the flight schedule to enumerate every
//! (origin airport, destination airport, airline) triple worth pricing.

use chrono::Utc;

use crate::domain::{Airport, Request};
use crate::store::{AirportStore, FlightStore};

use super::airports::find_closest_airports;
use super::error::RoutingError;

/// How many nearby airports to consider on each side of a request.
pub const AIRPORTS_PER_ENDPOINT: usize = 5;

/// One viable (origin airport, destination airport, airline) candidate.
///
/// A single airport pair served by two airlines yields two candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightOption {
    pub origin: Airport,
    pub destination: Airport,
    pub airline: String,
}

/// Enumerate all flight candidates for a geocoded request.
///
/// Takes the 5 closest airports to each endpoint, forms the full
/// cross-product of airport pairs (no pruning by distance or cost; the
/// sets are small and pricing decides later), and emits one candidate per
/// distinct airline with at least one scheduled departure at or after the
/// request's pickup date (or now, if unset). Airlines are emitted in order
/// of their earliest matching departure, so rebuilds on unchanged data are
/// deterministic.
///
/// Discovery only; nothing is persisted.
pub fn find_flight_options<S: AirportStore + FlightStore>(
    store: &S,
    request: &Request,
) -> Result<Vec<FlightOption>, RoutingError> {
    let (Some(origin_geo), Some(destination_geo)) = (&request.origin, &request.destination) else {
        return Err(RoutingError::MissingGeocoding);
    };

    let origin_airports = find_closest_airports(
        store,
        origin_geo.coordinates,
        AIRPORTS_PER_ENDPOINT,
    )?;
    let destination_airports = find_closest_airports(
        store,
        destination_geo.coordinates,
        AIRPORTS_PER_ENDPOINT,
    )?;

    let earliest_departure = request
        .pickup_date
        .unwrap_or_else(|| Utc::now().naive_utc());

    let mut options = Vec::new();
    for origin_airport in &origin_airports {
        for destination_airport in &destination_airports {
            let mut flights =
                store.flights_between(&origin_airport.code, &destination_airport.code)?;
            flights.retain(|f| f.departure_at >= earliest_departure);
            flights.sort_by_key(|f| f.departure_at);

            let mut airlines: Vec<String> = Vec::new();
            for flight in &flights {
                if !airlines.contains(&flight.airline) {
                    airlines.push(flight.airline.clone());
                }
            }

            for airline in airlines {
                options.push(FlightOption {
                    origin: origin_airport.clone(),
                    destination: destination_airport.clone(),
                    airline,
                });
            }
        }
    }

    tracing::debug!(
        request = %request.id,
        origin_airports = origin_airports.len(),
        destination_airports = destination_airports.len(),
        candidates = options.len(),
        "enumerated flight candidates"
    );

    Ok(options)
}
