//! Shipment quote requests.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Coordinates, RouteId};

/// Identifier for a quote request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a quote request.
///
/// The core only moves a request through pricing; parse/geocode failures are
/// marked FAILED by the calling layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Pending,
    Processing,
    Quoted,
    Accepted,
    Rejected,
    Completed,
    Failed,
}

/// A resolved geocoding result for one end of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geocoded {
    pub coordinates: Coordinates,
    pub formatted_address: String,
    #[serde(default)]
    pub place_id: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: String,
}

/// A shipment quote request.
///
/// Produced by the excluded email-parsing and geocoding collaborators; the
/// core requires `origin`/`destination` to already be resolved before route
/// building, and only ever writes the cheapest/fastest route references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub id: RequestId,

    pub company: String,

    pub pickup_date: Option<NaiveDateTime>,
    pub delivery_date: Option<NaiveDateTime>,

    /// Package dimensions in centimetres.
    pub height_cm: Option<f64>,
    pub width_cm: Option<f64>,
    pub length_cm: Option<f64>,

    /// Cargo weight in kilograms.
    pub weight_kg: Option<f64>,

    /// Free-text addresses as parsed from the request email.
    pub origin_address: String,
    pub destination_address: String,

    /// Resolved geocoding, if the geocoding step has run.
    pub origin: Option<Geocoded>,
    pub destination: Option<Geocoded>,

    pub status: RequestStatus,
    pub priority: Option<String>,

    /// References into this request's own route options, set by the
    /// all-routes pricing step.
    pub cheapest_route_id: Option<RouteId>,
    pub fastest_route_id: Option<RouteId>,
}

impl Request {
    /// True once both endpoints carry resolved coordinates.
    pub fn is_geocoded(&self) -> bool {
        self.origin.is_some() && self.destination.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geocoded(lat: f64, lon: f64, cc: &str) -> Geocoded {
        Geocoded {
            coordinates: Coordinates::new(lat, lon),
            formatted_address: "somewhere".into(),
            place_id: None,
            country_code: cc.into(),
        }
    }

    fn request() -> Request {
        Request {
            id: RequestId(1),
            company: "ACME GmbH".into(),
            pickup_date: None,
            delivery_date: None,
            height_cm: None,
            width_cm: None,
            length_cm: None,
            weight_kg: Some(120.0),
            origin_address: "Mainz, Germany".into(),
            destination_address: "Puebla, Mexico".into(),
            origin: None,
            destination: None,
            status: RequestStatus::Pending,
            priority: None,
            cheapest_route_id: None,
            fastest_route_id: None,
        }
    }

    #[test]
    fn geocoded_requires_both_endpoints() {
        let mut req = request();
        assert!(!req.is_geocoded());

        req.origin = Some(geocoded(50.0, 8.27, "DE"));
        assert!(!req.is_geocoded());

        req.destination = Some(geocoded(19.04, -98.2, "MX"));
        assert!(req.is_geocoded());
    }

    #[test]
    fn status_serialization_matches_storage_format() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::Quoted).unwrap(),
            "\"QUOTED\""
        );
        let s: RequestStatus = serde_json::from_str("\"FAILED\"").unwrap();
        assert_eq!(s, RequestStatus::Failed);
    }
}
