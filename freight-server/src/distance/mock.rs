//! Great-circle fallback distance provider.
//!
//! Used when the routing service is unavailable or in mock mode. Applies a
//! flat circuity factor to approximate road distance from the great-circle
//! distance.

use crate::domain::Coordinates;

use super::{DistanceError, DistanceProvider};

/// Typical ratio of European road distance to great-circle distance.
const DEFAULT_ROAD_FACTOR: f64 = 1.3;

/// Offline distance provider: haversine distance times a circuity factor.
#[derive(Debug, Clone)]
pub struct GreatCircleDistance {
    road_factor: f64,
}

impl GreatCircleDistance {
    pub fn new(road_factor: f64) -> Self {
        Self { road_factor }
    }
}

impl Default for GreatCircleDistance {
    fn default() -> Self {
        Self::new(DEFAULT_ROAD_FACTOR)
    }
}

impl DistanceProvider for GreatCircleDistance {
    async fn distance_km(&self, from: Coordinates, to: Coordinates) -> Result<f64, DistanceError> {
        Ok(from.haversine_km(&to) * self.road_factor)
    }
}
