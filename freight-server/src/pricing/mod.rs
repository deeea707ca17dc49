//! Segment and route pricing.
//!
//! Trucking and air legs are priced independently; the route orchestrator
//! threads a time cursor through the legs in sequence order, sums the
//! totals and persists the result in one write. The all-routes entry point
//! prices every candidate for a request, tolerating per-route failures, and
//! records the cheapest and fastest survivors on the request.

mod air;
mod error;
mod trucking;

pub use air::price_air_segment;
pub use error::PricingError;
pub use trucking::price_trucking_segment;

use chrono::{Duration, NaiveDateTime, Utc};

use crate::distance::DistanceProvider;
use crate::domain::{Request, RouteId, RouteOption, RouteSegment, SegmentType};
use crate::store::{FlightStore, RateStore, RequestStore, RoutePricing, RouteStore};

/// A priced segment plus the figures the orchestrator aggregates.
#[derive(Debug, Clone)]
pub struct SegmentQuote {
    pub segment: RouteSegment,
    pub price_eur: f64,
    pub duration_hours: f64,
    /// When this leg ends; the next leg starts no earlier than this.
    pub arrival: NaiveDateTime,
}

/// `start` plus a fractional number of hours, to second precision.
pub(crate) fn hours_after(start: NaiveDateTime, hours: f64) -> NaiveDateTime {
    start + Duration::seconds((hours * 3600.0).round() as i64)
}

fn hours_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_seconds() as f64 / 3600.0
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Price one route option end to end and persist the result.
///
/// The first leg departs at the request's pickup date (or now, when none
/// was given); each later leg departs when the previous one arrives. Any
/// segment failure leaves the stored route untouched.
pub async fn calculate_route_price<S, D>(
    store: &S,
    distance: &D,
    route: &RouteOption,
) -> Result<RouteOption, PricingError>
where
    S: RequestStore + RateStore + FlightStore + RouteStore,
    D: DistanceProvider,
{
    let request = store.request(route.request_id)?;

    let start = request
        .pickup_date
        .unwrap_or_else(|| Utc::now().naive_utc());

    let mut cursor = start;
    let mut segments = Vec::with_capacity(route.segments.len());
    let mut total_price_eur = 0.0;
    let mut estimated_duration_hours = 0.0;

    for segment in &route.segments {
        let quote = match segment.segment_type {
            SegmentType::Trucking => {
                price_trucking_segment(store, distance, segment, cursor).await?
            }
            SegmentType::Air => price_air_segment(store, segment, &request, cursor)?,
        };
        total_price_eur += quote.price_eur;
        estimated_duration_hours += quote.duration_hours;
        cursor = quote.arrival;
        segments.push(quote.segment);
    }

    let priced = store.apply_route_pricing(RoutePricing {
        route_id: route.id,
        segments,
        total_price_eur: round_cents(total_price_eur),
        estimated_duration_hours,
        duration_hours: hours_between(start, cursor),
        pickup_at: start,
        delivery_at: cursor,
    })?;

    Ok(priced)
}

/// Outcome of pricing every candidate route for a request.
#[derive(Debug)]
pub struct PricingReport {
    /// The request, with its cheapest/fastest references updated when at
    /// least one route priced.
    pub request: Request,
    pub priced: Vec<RouteOption>,
    pub failures: Vec<(RouteId, PricingError)>,
}

/// Price every route option of a request.
///
/// Per-route failures (missing rates, no flight in the window, unusable
/// segments) are collected, not fatal; storage failures abort. When at
/// least one route prices, the cheapest (lowest total) and fastest (lowest
/// wall-clock duration) are recorded on the request. When none do, the
/// request's existing references are left alone.
pub async fn calculate_all_request_routes<S, D>(
    store: &S,
    distance: &D,
    request_id: crate::domain::RequestId,
) -> Result<PricingReport, PricingError>
where
    S: RequestStore + RateStore + FlightStore + RouteStore,
    D: DistanceProvider,
{
    let mut request = store.request(request_id)?;
    let routes = store.routes_for_request(request_id)?;

    let mut priced: Vec<RouteOption> = Vec::with_capacity(routes.len());
    let mut failures = Vec::new();

    for route in &routes {
        match calculate_route_price(store, distance, route).await {
            Ok(option) => priced.push(option),
            Err(PricingError::Store(err)) => return Err(err.into()),
            Err(err) => {
                tracing::warn!(route_id = %route.id, error = %err, "route could not be priced");
                failures.push((route.id, err));
            }
        }
    }

    if !priced.is_empty() {
        let cheapest = priced
            .iter()
            .min_by(|a, b| {
                a.total_price_eur
                    .unwrap_or(f64::INFINITY)
                    .total_cmp(&b.total_price_eur.unwrap_or(f64::INFINITY))
            })
            .map(|r| r.id);
        let fastest = priced
            .iter()
            .min_by(|a, b| {
                a.duration_hours
                    .unwrap_or(f64::INFINITY)
                    .total_cmp(&b.duration_hours.unwrap_or(f64::INFINITY))
            })
            .map(|r| r.id);

        request = store.set_route_choices(request_id, cheapest, fastest)?;
    }

    Ok(PricingReport {
        request,
        priced,
        failures,
    })
}
