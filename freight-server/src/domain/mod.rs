//! Domain types for the freight routing and pricing core.
//!
//! This module contains the core domain model types that represent
//! validated shipment and rate data. Types enforce their invariants at
//! construction time, so code that receives them can trust their validity.

mod airport;
mod countries;
mod error;
mod flight;
mod geo;
mod money;
mod rates;
mod request;
mod route;
mod station;

pub use airport::Airport;
pub use countries::country_name;
pub use error::DomainError;
pub use flight::{FlightId, ScheduledFlight};
pub use geo::Coordinates;
pub use money::{Currency, InvalidCurrency, convert_currency, convert_to_eur};
pub use rates::{AirlineRate, AirportRate, ServiceType, TruckingRate};
pub use request::{Geocoded, Request, RequestId, RequestStatus};
pub use route::{
    RouteDraft, RouteId, RouteOption, RouteSegment, RouteStatus, SegmentDraft, SegmentId,
    SegmentType,
};
pub use station::{IataCode, InvalidIataCode};
