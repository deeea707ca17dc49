//! Storage access traits.
//!
//! Every core operation takes an explicit storage handle bounded by the
//! traits it actually needs, so there is no hidden global connection state
//! and tests can inject doubles. Reference tables (airports, flights,
//! rates) are read-only to the core; only requests and routes are mutated.

mod memory;

pub use memory::MemoryStore;

use chrono::NaiveDateTime;

use crate::domain::{
    Airport, AirlineRate, AirportRate, IataCode, Request, RequestId, RouteDraft, RouteId,
    RouteOption, RouteSegment, ScheduledFlight, ServiceType, TruckingRate,
};

/// Storage-layer failure.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("request {0} not found")]
    RequestNotFound(RequestId),

    #[error("route option {0} not found")]
    RouteNotFound(RouteId),

    /// Backend failure (lock poisoning, connection loss, ...).
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Read access to the airport reference table.
pub trait AirportStore {
    fn airports(&self) -> Result<Vec<Airport>, StoreError>;
}

/// Read access to the scheduled-flight table.
pub trait FlightStore {
    /// All scheduled flights for an exact airport pair, in no particular
    /// order.
    fn flights_between(
        &self,
        origin: &IataCode,
        destination: &IataCode,
    ) -> Result<Vec<ScheduledFlight>, StoreError>;
}

/// Read access to the carrier rate tables.
pub trait RateStore {
    /// All trucking rates whose origin column matches the given country
    /// name exactly.
    fn trucking_rates_for_origin(
        &self,
        origin_country: &str,
    ) -> Result<Vec<TruckingRate>, StoreError>;

    /// The airport fee row for (station, airline, service type), if any.
    fn airport_rate(
        &self,
        station: &IataCode,
        airline: &str,
        service_type: ServiceType,
    ) -> Result<Option<AirportRate>, StoreError>;

    /// The first airline rate matching the exact (station, origin country,
    /// destination country) triple, if any.
    fn airline_rate(
        &self,
        station: &IataCode,
        origin_country_code: &str,
        destination_country_code: &str,
    ) -> Result<Option<AirlineRate>, StoreError>;
}

/// Access to quote requests.
pub trait RequestStore {
    fn request(&self, id: RequestId) -> Result<Request, StoreError>;

    /// Write the cheapest/fastest route references chosen by the pricing
    /// orchestrator. Returns the updated request.
    fn set_route_choices(
        &self,
        id: RequestId,
        cheapest: Option<RouteId>,
        fastest: Option<RouteId>,
    ) -> Result<Request, StoreError>;
}

/// Aggregate pricing result applied to a route in one atomic write.
#[derive(Debug, Clone)]
pub struct RoutePricing {
    pub route_id: RouteId,
    /// Fully priced segments, replacing the stored ones.
    pub segments: Vec<RouteSegment>,
    pub total_price_eur: f64,
    /// Sum of per-segment durations.
    pub estimated_duration_hours: f64,
    /// Wall-clock pickup-to-delivery span.
    pub duration_hours: f64,
    pub pickup_at: NaiveDateTime,
    pub delivery_at: NaiveDateTime,
}

/// Access to route options and their segments.
pub trait RouteStore {
    /// Persist a route draft with all of its segments atomically; either
    /// the whole route exists afterwards or none of it does.
    fn insert_route(&self, draft: RouteDraft) -> Result<RouteOption, StoreError>;

    fn route(&self, id: RouteId) -> Result<RouteOption, StoreError>;

    /// All route options owned by a request, in insertion order.
    fn routes_for_request(&self, request_id: RequestId) -> Result<Vec<RouteOption>, StoreError>;

    /// Delete every route option (and cascading segments) owned by a
    /// request. Returns the number of routes removed.
    fn delete_routes_for_request(&self, request_id: RequestId) -> Result<usize, StoreError>;

    /// Apply a pricing result: replace the route's segments, set the
    /// aggregates, and mark it AVAILABLE, all in one write.
    fn apply_route_pricing(&self, pricing: RoutePricing) -> Result<RouteOption, StoreError>;
}
