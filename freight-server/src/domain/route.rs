//! Route options and their segments.
//!
//! A `RouteOption` is one candidate itinerary for a request: a trucking leg
//! to an origin airport, a single air leg, and a trucking leg onward to the
//! delivery address. Segment shape is validated when a draft is built, so a
//! persisted route always has contiguous 1-based sequences with trucking
//! legs at the ends and air in between.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Coordinates, Currency, DomainError, FlightId, IataCode, RequestId};

/// Identifier for a route option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RouteId(pub u64);

impl std::fmt::Display for RouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a route segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SegmentId(pub u64);

/// Lifecycle status of a route option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteStatus {
    /// Created by the assembler, not yet priced.
    Initialized,
    /// Priced; totals and timestamps are populated.
    Available,
    /// Chosen by the customer.
    Selected,
}

/// Kind of leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SegmentType {
    Trucking,
    Air,
}

/// One leg of a route option.
///
/// Pricing fields (`price_eur`, `duration_hours`, timestamps, and for
/// trucking `distance_km`) are `None` until the pricing engine has run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    pub id: SegmentId,
    pub segment_type: SegmentType,

    /// 1-based order within the route.
    pub sequence: u32,

    pub origin_name: String,
    pub destination_name: String,

    pub origin_coordinates: Option<Coordinates>,
    pub destination_coordinates: Option<Coordinates>,

    pub origin_country_code: Option<String>,
    pub destination_country_code: Option<String>,

    /// Air legs only.
    pub origin_airport: Option<IataCode>,
    pub destination_airport: Option<IataCode>,
    pub airline: Option<String>,
    pub flight_number: Option<String>,
    pub scheduled_flight_id: Option<FlightId>,

    pub price_eur: Option<f64>,
    pub currency: Option<Currency>,
    pub distance_km: Option<f64>,
    pub duration_hours: Option<f64>,
    pub departure_time: Option<NaiveDateTime>,
    pub arrival_time: Option<NaiveDateTime>,
}

/// One candidate itinerary for a request.
///
/// Owns its segments; deleting the route deletes them with it. Aggregate
/// fields are `None` until priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOption {
    pub id: RouteId,
    pub request_id: RequestId,
    pub status: RouteStatus,

    pub total_price_eur: Option<f64>,
    pub currency: Option<Currency>,

    /// Sum of per-segment durations, in hours.
    pub estimated_duration_hours: Option<f64>,

    /// Wall-clock pickup-to-delivery span, in hours. Can differ from
    /// `estimated_duration_hours` when legs are not contiguous.
    pub duration_hours: Option<f64>,

    pub pickup_at: Option<NaiveDateTime>,
    pub delivery_at: Option<NaiveDateTime>,

    /// Segments in ascending sequence order.
    pub segments: Vec<RouteSegment>,
}

/// An unpersisted segment, produced by the route assembler.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentDraft {
    pub segment_type: SegmentType,
    pub origin_name: String,
    pub destination_name: String,
    pub origin_coordinates: Option<Coordinates>,
    pub destination_coordinates: Option<Coordinates>,
    pub origin_country_code: Option<String>,
    pub destination_country_code: Option<String>,
    pub origin_airport: Option<IataCode>,
    pub destination_airport: Option<IataCode>,
    pub airline: Option<String>,
}

impl SegmentDraft {
    /// A trucking leg between two named, geocoded points.
    pub fn trucking(
        origin_name: impl Into<String>,
        origin_coordinates: Coordinates,
        origin_country_code: Option<String>,
        destination_name: impl Into<String>,
        destination_coordinates: Coordinates,
        destination_country_code: Option<String>,
    ) -> Self {
        Self {
            segment_type: SegmentType::Trucking,
            origin_name: origin_name.into(),
            destination_name: destination_name.into(),
            origin_coordinates: Some(origin_coordinates),
            destination_coordinates: Some(destination_coordinates),
            origin_country_code,
            destination_country_code,
            origin_airport: None,
            destination_airport: None,
            airline: None,
        }
    }

    /// An air leg between two airports on a given airline.
    pub fn air(
        origin: &super::Airport,
        destination: &super::Airport,
        airline: impl Into<String>,
    ) -> Self {
        Self {
            segment_type: SegmentType::Air,
            origin_name: origin.name.clone(),
            destination_name: destination.name.clone(),
            origin_coordinates: Some(origin.coordinates),
            destination_coordinates: Some(destination.coordinates),
            origin_country_code: Some(origin.country_code.clone()),
            destination_country_code: Some(destination.country_code.clone()),
            origin_airport: Some(origin.code),
            destination_airport: Some(destination.code),
            airline: Some(airline.into()),
        }
    }
}

/// An unpersisted route option with validated segment shape.
///
/// # Invariants
///
/// - At least three segments
/// - First and last segments are trucking legs
/// - Every interior segment is an air leg carrying both airport codes and
///   an airline
#[derive(Debug, Clone)]
pub struct RouteDraft {
    request_id: RequestId,
    segments: Vec<SegmentDraft>,
}

impl RouteDraft {
    /// Build a route draft, validating the segment shape.
    pub fn new(request_id: RequestId, segments: Vec<SegmentDraft>) -> Result<Self, DomainError> {
        if segments.len() < 3 {
            return Err(DomainError::InvalidRouteShape(
                "route needs at least trucking, air, trucking legs",
            ));
        }

        let last = segments.len() - 1;
        for (idx, segment) in segments.iter().enumerate() {
            let is_edge = idx == 0 || idx == last;
            match (is_edge, segment.segment_type) {
                (true, SegmentType::Trucking) => {}
                (true, SegmentType::Air) => {
                    return Err(DomainError::InvalidRouteShape(
                        "first and last legs must be trucking",
                    ));
                }
                (false, SegmentType::Air) => {
                    if segment.origin_airport.is_none()
                        || segment.destination_airport.is_none()
                        || segment.airline.is_none()
                    {
                        return Err(DomainError::InvalidRouteShape(
                            "air legs must carry airport codes and an airline",
                        ));
                    }
                }
                (false, SegmentType::Trucking) => {
                    return Err(DomainError::InvalidRouteShape(
                        "interior legs must be air",
                    ));
                }
            }
        }

        Ok(Self {
            request_id,
            segments,
        })
    }

    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    pub fn segments(&self) -> &[SegmentDraft] {
        &self.segments
    }

    /// Materialize with store-assigned identifiers. Sequences are assigned
    /// 1..N in draft order.
    pub fn into_route(self, id: RouteId, mut next_segment_id: impl FnMut() -> SegmentId) -> RouteOption {
        let segments = self
            .segments
            .into_iter()
            .enumerate()
            .map(|(idx, draft)| RouteSegment {
                id: next_segment_id(),
                segment_type: draft.segment_type,
                sequence: idx as u32 + 1,
                origin_name: draft.origin_name,
                destination_name: draft.destination_name,
                origin_coordinates: draft.origin_coordinates,
                destination_coordinates: draft.destination_coordinates,
                origin_country_code: draft.origin_country_code,
                destination_country_code: draft.destination_country_code,
                origin_airport: draft.origin_airport,
                destination_airport: draft.destination_airport,
                airline: draft.airline,
                flight_number: None,
                scheduled_flight_id: None,
                price_eur: None,
                currency: None,
                distance_km: None,
                duration_hours: None,
                departure_time: None,
                arrival_time: None,
            })
            .collect();

        RouteOption {
            id,
            request_id: self.request_id,
            status: RouteStatus::Initialized,
            total_price_eur: None,
            currency: None,
            estimated_duration_hours: None,
            duration_hours: None,
            pickup_at: None,
            delivery_at: None,
            segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Airport;

    fn airport(code: &str, lat: f64, lon: f64, cc: &str) -> Airport {
        Airport {
            code: IataCode::parse(code).unwrap(),
            name: format!("{code} Airport"),
            country_code: cc.into(),
            coordinates: Coordinates::new(lat, lon),
            place_id: None,
            region: None,
        }
    }

    fn trucking_draft() -> SegmentDraft {
        SegmentDraft::trucking(
            "Mainz, Germany",
            Coordinates::new(50.0, 8.27),
            Some("DE".into()),
            "FRA Airport",
            Coordinates::new(50.03, 8.57),
            Some("DE".into()),
        )
    }

    fn air_draft() -> SegmentDraft {
        SegmentDraft::air(
            &airport("FRA", 50.03, 8.57, "DE"),
            &airport("MEX", 19.43, -99.07, "MX"),
            "LH",
        )
    }

    #[test]
    fn valid_three_leg_draft() {
        let draft = RouteDraft::new(
            RequestId(1),
            vec![trucking_draft(), air_draft(), trucking_draft()],
        )
        .unwrap();
        assert_eq!(draft.segments().len(), 3);
    }

    #[test]
    fn rejects_too_few_segments() {
        let result = RouteDraft::new(RequestId(1), vec![trucking_draft(), air_draft()]);
        assert!(matches!(result, Err(DomainError::InvalidRouteShape(_))));
    }

    #[test]
    fn rejects_air_on_the_edges() {
        let result = RouteDraft::new(
            RequestId(1),
            vec![air_draft(), air_draft(), trucking_draft()],
        );
        assert!(matches!(result, Err(DomainError::InvalidRouteShape(_))));
    }

    #[test]
    fn rejects_trucking_in_the_middle() {
        let result = RouteDraft::new(
            RequestId(1),
            vec![trucking_draft(), trucking_draft(), trucking_draft()],
        );
        assert!(matches!(result, Err(DomainError::InvalidRouteShape(_))));
    }

    #[test]
    fn rejects_air_leg_without_airline() {
        let mut air = air_draft();
        air.airline = None;
        let result = RouteDraft::new(RequestId(1), vec![trucking_draft(), air, trucking_draft()]);
        assert!(matches!(result, Err(DomainError::InvalidRouteShape(_))));
    }

    #[test]
    fn into_route_assigns_contiguous_sequences() {
        let draft = RouteDraft::new(
            RequestId(7),
            vec![trucking_draft(), air_draft(), trucking_draft()],
        )
        .unwrap();

        let mut next = 100u64;
        let route = draft.into_route(RouteId(42), || {
            next += 1;
            SegmentId(next)
        });

        assert_eq!(route.id, RouteId(42));
        assert_eq!(route.request_id, RequestId(7));
        assert_eq!(route.status, RouteStatus::Initialized);
        assert!(route.total_price_eur.is_none());

        let sequences: Vec<u32> = route.segments.iter().map(|s| s.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3]);
        assert_eq!(route.segments[0].segment_type, SegmentType::Trucking);
        assert_eq!(route.segments[1].segment_type, SegmentType::Air);
        assert_eq!(route.segments[2].segment_type, SegmentType::Trucking);
        assert_eq!(route.segments[1].airline.as_deref(), Some("LH"));
    }
}
