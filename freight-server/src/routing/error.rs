//! Route discovery errors.

use crate::domain::DomainError;
use crate::store::StoreError;

/// Error from route discovery and assembly.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    /// The request lacks resolved origin/destination coordinates
    #[error("request is missing geocoding information")]
    MissingGeocoding,

    /// Assembled segments violated the route shape invariant
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Storage failure
    #[error(transparent)]
    Store(#[from] StoreError),
}
