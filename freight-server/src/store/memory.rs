//! In-memory storage.
//!
//! Backs the server binary and every test. All tables live behind a single
//! `RwLock`, which is what makes the multi-row route writes atomic: a route
//! and its segments are inserted (or replaced) under one write guard.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{
    Airport, AirlineRate, AirportRate, Currency, IataCode, Request, RequestId, RouteDraft, RouteId,
    RouteOption, RouteStatus, ScheduledFlight, SegmentId, ServiceType, TruckingRate,
};

use super::{
    AirportStore, FlightStore, RateStore, RequestStore, RoutePricing, RouteStore, StoreError,
};

#[derive(Debug, Default)]
struct Inner {
    airports: Vec<Airport>,
    flights: Vec<ScheduledFlight>,
    trucking_rates: Vec<TruckingRate>,
    airport_rates: Vec<AirportRate>,
    airline_rates: Vec<AirlineRate>,

    requests: BTreeMap<RequestId, Request>,
    routes: BTreeMap<RouteId, RouteOption>,

    next_request_id: u64,
    next_route_id: u64,
    next_segment_id: u64,
}

/// In-memory store implementing all storage traits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))
    }

    /// Append airports to the reference table.
    pub fn add_airports(
        &self,
        airports: impl IntoIterator<Item = Airport>,
    ) -> Result<(), StoreError> {
        self.write()?.airports.extend(airports);
        Ok(())
    }

    /// Append scheduled flights to the reference table.
    pub fn add_flights(
        &self,
        flights: impl IntoIterator<Item = ScheduledFlight>,
    ) -> Result<(), StoreError> {
        self.write()?.flights.extend(flights);
        Ok(())
    }

    pub fn add_trucking_rates(
        &self,
        rates: impl IntoIterator<Item = TruckingRate>,
    ) -> Result<(), StoreError> {
        self.write()?.trucking_rates.extend(rates);
        Ok(())
    }

    pub fn add_airport_rates(
        &self,
        rates: impl IntoIterator<Item = AirportRate>,
    ) -> Result<(), StoreError> {
        self.write()?.airport_rates.extend(rates);
        Ok(())
    }

    pub fn add_airline_rates(
        &self,
        rates: impl IntoIterator<Item = AirlineRate>,
    ) -> Result<(), StoreError> {
        self.write()?.airline_rates.extend(rates);
        Ok(())
    }

    /// Store a request under a freshly assigned identifier.
    ///
    /// Returns the stored request with its new id.
    pub fn insert_request(&self, mut request: Request) -> Result<Request, StoreError> {
        let mut inner = self.write()?;
        inner.next_request_id += 1;
        request.id = RequestId(inner.next_request_id);
        inner.requests.insert(request.id, request.clone());
        Ok(request)
    }

    /// Table sizes (airports, flights, trucking, airport, airline rates),
    /// for startup logging.
    pub fn table_counts(&self) -> Result<(usize, usize, usize, usize, usize), StoreError> {
        let inner = self.read()?;
        Ok((
            inner.airports.len(),
            inner.flights.len(),
            inner.trucking_rates.len(),
            inner.airport_rates.len(),
            inner.airline_rates.len(),
        ))
    }
}

impl AirportStore for MemoryStore {
    fn airports(&self) -> Result<Vec<Airport>, StoreError> {
        Ok(self.read()?.airports.clone())
    }
}

impl FlightStore for MemoryStore {
    fn flights_between(
        &self,
        origin: &IataCode,
        destination: &IataCode,
    ) -> Result<Vec<ScheduledFlight>, StoreError> {
        Ok(self
            .read()?
            .flights
            .iter()
            .filter(|f| &f.origin == origin && &f.destination == destination)
            .cloned()
            .collect())
    }
}

impl RateStore for MemoryStore {
    fn trucking_rates_for_origin(
        &self,
        origin_country: &str,
    ) -> Result<Vec<TruckingRate>, StoreError> {
        Ok(self
            .read()?
            .trucking_rates
            .iter()
            .filter(|r| r.origin == origin_country)
            .cloned()
            .collect())
    }

    fn airport_rate(
        &self,
        station: &IataCode,
        airline: &str,
        service_type: ServiceType,
    ) -> Result<Option<AirportRate>, StoreError> {
        Ok(self
            .read()?
            .airport_rates
            .iter()
            .find(|r| {
                &r.station == station && r.airline == airline && r.service_type == service_type
            })
            .cloned())
    }

    fn airline_rate(
        &self,
        station: &IataCode,
        origin_country_code: &str,
        destination_country_code: &str,
    ) -> Result<Option<AirlineRate>, StoreError> {
        Ok(self
            .read()?
            .airline_rates
            .iter()
            .find(|r| {
                &r.station == station
                    && r.origin_country_code == origin_country_code
                    && r.destination_country_code == destination_country_code
            })
            .cloned())
    }
}

impl RequestStore for MemoryStore {
    fn request(&self, id: RequestId) -> Result<Request, StoreError> {
        self.read()?
            .requests
            .get(&id)
            .cloned()
            .ok_or(StoreError::RequestNotFound(id))
    }

    fn set_route_choices(
        &self,
        id: RequestId,
        cheapest: Option<RouteId>,
        fastest: Option<RouteId>,
    ) -> Result<Request, StoreError> {
        let mut inner = self.write()?;
        let request = inner
            .requests
            .get_mut(&id)
            .ok_or(StoreError::RequestNotFound(id))?;
        request.cheapest_route_id = cheapest;
        request.fastest_route_id = fastest;
        Ok(request.clone())
    }
}

impl RouteStore for MemoryStore {
    fn insert_route(&self, draft: RouteDraft) -> Result<RouteOption, StoreError> {
        let mut inner = self.write()?;
        inner.next_route_id += 1;
        let route_id = RouteId(inner.next_route_id);

        let mut next_segment_id = inner.next_segment_id;
        let route = draft.into_route(route_id, || {
            next_segment_id += 1;
            SegmentId(next_segment_id)
        });
        inner.next_segment_id = next_segment_id;

        inner.routes.insert(route_id, route.clone());
        Ok(route)
    }

    fn route(&self, id: RouteId) -> Result<RouteOption, StoreError> {
        self.read()?
            .routes
            .get(&id)
            .cloned()
            .ok_or(StoreError::RouteNotFound(id))
    }

    fn routes_for_request(&self, request_id: RequestId) -> Result<Vec<RouteOption>, StoreError> {
        Ok(self
            .read()?
            .routes
            .values()
            .filter(|r| r.request_id == request_id)
            .cloned()
            .collect())
    }

    fn delete_routes_for_request(&self, request_id: RequestId) -> Result<usize, StoreError> {
        let mut inner = self.write()?;
        let before = inner.routes.len();
        inner.routes.retain(|_, r| r.request_id != request_id);
        let removed = before - inner.routes.len();

        // A deleted route must not leave dangling choice pointers behind.
        if let Some(request) = inner.requests.get_mut(&request_id) {
            request.cheapest_route_id = None;
            request.fastest_route_id = None;
        }

        Ok(removed)
    }

    fn apply_route_pricing(&self, pricing: RoutePricing) -> Result<RouteOption, StoreError> {
        let mut inner = self.write()?;
        let route = inner
            .routes
            .get_mut(&pricing.route_id)
            .ok_or(StoreError::RouteNotFound(pricing.route_id))?;

        route.segments = pricing.segments;
        route.total_price_eur = Some(pricing.total_price_eur);
        route.currency = Some(Currency::Eur);
        route.estimated_duration_hours = Some(pricing.estimated_duration_hours);
        route.duration_hours = Some(pricing.duration_hours);
        route.pickup_at = Some(pricing.pickup_at);
        route.delivery_at = Some(pricing.delivery_at);
        route.status = RouteStatus::Available;

        Ok(route.clone())
    }
}
