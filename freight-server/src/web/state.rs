//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedDistance;
use crate::distance::DistanceService;
use crate::store::MemoryStore;

/// Shared application state.
///
/// Contains the storage handle and the road-distance provider used by the
/// pricing engine.
#[derive(Clone)]
pub struct AppState {
    /// Reference data, requests and route options
    pub store: Arc<MemoryStore>,

    /// Cached road-distance provider
    pub distance: Arc<CachedDistance<DistanceService>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: MemoryStore, distance: CachedDistance<DistanceService>) -> Self {
        Self {
            store: Arc::new(store),
            distance: Arc::new(distance),
        }
    }
}
