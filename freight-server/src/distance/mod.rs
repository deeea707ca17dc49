//! Road-distance provider for trucking legs.
//!
//! The pricing engine needs road-network distance, not great-circle
//! distance, so the real provider is an HTTP routing service. A
//! great-circle fallback exists for offline/mock operation behind the same
//! seam.

mod client;
mod error;
mod mock;

pub use client::{MatrixClient, MatrixConfig};
pub use error::DistanceError;
pub use mock::GreatCircleDistance;

use crate::domain::Coordinates;

/// Source of road distances between coordinate pairs.
///
/// This abstraction allows the pricing engine to be tested with fixed
/// distances and run offline with the great-circle fallback.
pub trait DistanceProvider: Send + Sync {
    /// Road distance in kilometres between two points.
    fn distance_km(
        &self,
        from: Coordinates,
        to: Coordinates,
    ) -> impl Future<Output = Result<f64, DistanceError>> + Send;
}

/// Runtime-selected distance provider for the server binary.
pub enum DistanceService {
    Matrix(MatrixClient),
    GreatCircle(GreatCircleDistance),
}

impl DistanceProvider for DistanceService {
    async fn distance_km(&self, from: Coordinates, to: Coordinates) -> Result<f64, DistanceError> {
        match self {
            DistanceService::Matrix(client) => client.distance_km(from, to).await,
            DistanceService::GreatCircle(mock) => mock.distance_km(from, to).await,
        }
    }
}
