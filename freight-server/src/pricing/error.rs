//! Pricing errors.
//!
//! The taxonomy matters to the orchestrator: precondition and lookup-miss
//! errors mean "this candidate route cannot be priced" and must not abort
//! sibling routes, while storage failures propagate.

use chrono::NaiveDateTime;

use crate::distance::DistanceError;
use crate::domain::{IataCode, ServiceType};
use crate::routing::FlightSearchError;
use crate::store::StoreError;

/// Error from segment or route pricing.
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    /// The segment or request lacks a field pricing needs
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// The trucking segment has no origin country code
    #[error("route segment is missing required country codes")]
    MissingCountryCode,

    /// Flight search was invoked without a start time
    #[error("start time is required to search scheduled flights")]
    MissingStartTime,

    /// No trucking rate row matches the origin country
    #[error("no trucking rate found for route in {0}")]
    TruckingRateNotFound(String),

    /// No airport fee row for (station, airline, service type)
    #[error("no {service_type} airport rate for {station} / {airline}")]
    AirportRateNotFound {
        station: IataCode,
        airline: String,
        service_type: ServiceType,
    },

    /// No airline rate row for the (station, origin, destination) triple
    #[error("no airline rate for {station} ({origin_country} -> {destination_country})")]
    AirlineRateNotFound {
        station: IataCode,
        origin_country: String,
        destination_country: String,
    },

    /// No scheduled flight inside the departure window
    #[error(
        "no flights found from {origin} to {destination}, by {airline} between {start} and {deadline:?}"
    )]
    NoFlightFound {
        origin: IataCode,
        destination: IataCode,
        airline: String,
        start: NaiveDateTime,
        deadline: Option<NaiveDateTime>,
    },

    /// Road-distance provider failure
    #[error("distance lookup failed: {0}")]
    Distance(#[from] DistanceError),

    /// Storage failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<FlightSearchError> for PricingError {
    fn from(err: FlightSearchError) -> Self {
        match err {
            FlightSearchError::MissingStartTime => PricingError::MissingStartTime,
            FlightSearchError::Store(e) => PricingError::Store(e),
        }
    }
}
