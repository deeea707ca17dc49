//! Caching layer for road-distance lookups.
//!
//! Distance queries repeat heavily: every candidate route that shares an
//! airport re-prices the same trucking leg. Coordinates are bucketed to
//! roughly 110 m (3 decimal places) to bound cache cardinality while
//! keeping hits deterministic for identical segments.

use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::distance::{DistanceError, DistanceProvider};
use crate::domain::Coordinates;

/// Cache key: bucketed (from, to) coordinate pair.
type DistanceKey = (i64, i64, i64, i64);

/// Configuration for the distance cache.
#[derive(Debug, Clone)]
pub struct DistanceCacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for DistanceCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Distance provider wrapper that caches successful lookups.
pub struct CachedDistance<P> {
    inner: P,
    cache: MokaCache<DistanceKey, f64>,
}

impl<P: DistanceProvider> CachedDistance<P> {
    /// Wrap a provider with a cache using the given configuration.
    pub fn new(inner: P, config: &DistanceCacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, cache }
    }

    /// Number of cached entries (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}

fn bucket(c: Coordinates) -> (i64, i64) {
    (
        (c.latitude * 1000.0).round() as i64,
        (c.longitude * 1000.0).round() as i64,
    )
}

impl<P: DistanceProvider> DistanceProvider for CachedDistance<P> {
    async fn distance_km(&self, from: Coordinates, to: Coordinates) -> Result<f64, DistanceError> {
        let (flat, flon) = bucket(from);
        let (tlat, tlon) = bucket(to);
        let key = (flat, flon, tlat, tlon);

        if let Some(km) = self.cache.get(&key).await {
            return Ok(km);
        }

        // Failures are not cached; a flaky provider gets retried on the
        // next lookup.
        let km = self.inner.distance_km(from, to).await?;
        self.cache.insert(key, km).await;
        Ok(km)
    }
}
