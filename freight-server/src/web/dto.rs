//! Data transfer objects for web responses.

use serde::Serialize;

use crate::domain::{Request, RouteOption, RouteSegment};
use crate::pricing::PricingReport;

/// A quote request as returned by the API.
#[derive(Debug, Serialize)]
pub struct RequestDto {
    pub id: u64,
    pub company: String,
    pub status: String,

    pub origin_address: String,
    pub destination_address: String,

    /// ISO timestamps, when the email parser extracted them
    pub pickup_date: Option<String>,
    pub delivery_date: Option<String>,

    pub weight_kg: Option<f64>,

    pub cheapest_route_id: Option<u64>,
    pub fastest_route_id: Option<u64>,
}

impl From<&Request> for RequestDto {
    fn from(request: &Request) -> Self {
        Self {
            id: request.id.0,
            company: request.company.clone(),
            status: format!("{:?}", request.status).to_uppercase(),
            origin_address: request.origin_address.clone(),
            destination_address: request.destination_address.clone(),
            pickup_date: request.pickup_date.map(|t| t.to_string()),
            delivery_date: request.delivery_date.map(|t| t.to_string()),
            weight_kg: request.weight_kg,
            cheapest_route_id: request.cheapest_route_id.map(|r| r.0),
            fastest_route_id: request.fastest_route_id.map(|r| r.0),
        }
    }
}

/// One leg of a route option.
#[derive(Debug, Serialize)]
pub struct SegmentDto {
    pub id: u64,
    pub segment_type: String,
    pub sequence: u32,

    pub origin: String,
    pub destination: String,

    /// Air legs only
    pub origin_airport: Option<String>,
    pub destination_airport: Option<String>,
    pub airline: Option<String>,
    pub flight_number: Option<String>,

    /// Populated once priced
    pub price_eur: Option<f64>,
    pub distance_km: Option<f64>,
    pub duration_hours: Option<f64>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
}

impl From<&RouteSegment> for SegmentDto {
    fn from(segment: &RouteSegment) -> Self {
        Self {
            id: segment.id.0,
            segment_type: format!("{:?}", segment.segment_type).to_uppercase(),
            sequence: segment.sequence,
            origin: segment.origin_name.clone(),
            destination: segment.destination_name.clone(),
            origin_airport: segment.origin_airport.map(|c| c.as_str().to_string()),
            destination_airport: segment.destination_airport.map(|c| c.as_str().to_string()),
            airline: segment.airline.clone(),
            flight_number: segment.flight_number.clone(),
            price_eur: segment.price_eur,
            distance_km: segment.distance_km,
            duration_hours: segment.duration_hours,
            departure_time: segment.departure_time.map(|t| t.to_string()),
            arrival_time: segment.arrival_time.map(|t| t.to_string()),
        }
    }
}

/// A candidate route with its segments.
#[derive(Debug, Serialize)]
pub struct RouteOptionDto {
    pub id: u64,
    pub request_id: u64,
    pub status: String,

    pub total_price_eur: Option<f64>,
    pub estimated_duration_hours: Option<f64>,
    pub duration_hours: Option<f64>,
    pub pickup_at: Option<String>,
    pub delivery_at: Option<String>,

    pub segments: Vec<SegmentDto>,
}

impl From<&RouteOption> for RouteOptionDto {
    fn from(route: &RouteOption) -> Self {
        Self {
            id: route.id.0,
            request_id: route.request_id.0,
            status: format!("{:?}", route.status).to_uppercase(),
            total_price_eur: route.total_price_eur,
            estimated_duration_hours: route.estimated_duration_hours,
            duration_hours: route.duration_hours,
            pickup_at: route.pickup_at.map(|t| t.to_string()),
            delivery_at: route.delivery_at.map(|t| t.to_string()),
            segments: route.segments.iter().map(SegmentDto::from).collect(),
        }
    }
}

/// A route that could not be priced.
#[derive(Debug, Serialize)]
pub struct RouteFailureDto {
    pub route_id: u64,
    pub reason: String,
}

/// Response for the all-routes pricing endpoint.
#[derive(Debug, Serialize)]
pub struct PricingReportDto {
    pub request: RequestDto,
    pub priced: Vec<RouteOptionDto>,
    pub failures: Vec<RouteFailureDto>,
}

impl From<&PricingReport> for PricingReportDto {
    fn from(report: &PricingReport) -> Self {
        Self {
            request: RequestDto::from(&report.request),
            priced: report.priced.iter().map(RouteOptionDto::from).collect(),
            failures: report
                .failures
                .iter()
                .map(|(id, err)| RouteFailureDto {
                    route_id: id.0,
                    reason: err.to_string(),
                })
                .collect(),
        }
    }
}

/// Error payload for all failing responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
