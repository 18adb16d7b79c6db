//! In-memory caching using moka
//!
//! Quotes are pure functions of their inputs and the catalog, which never
//! changes while the process runs, so a computed breakdown can be reused for
//! identical requests. Concurrent identical requests (a double-clicked
//! "calculate" button) share a single computation.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::models::{ParticipantCount, TripDuration};
use crate::pricing::calculators::CostBreakdown;

/// Cache key for a quote: everything the calculator reads from the request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuoteKey {
    duration: TripDuration,
    participants: u32,
    activities: Vec<String>,
}

impl QuoteKey {
    pub fn new(duration: TripDuration, participants: ParticipantCount, activities: &[String]) -> Self {
        Self {
            duration,
            participants: participants.get(),
            activities: activities.to_vec(),
        }
    }
}

/// Application cache holding computed quotes
#[derive(Clone)]
pub struct AppCache {
    /// Quotes (request -> breakdown)
    pub quotes: Cache<QuoteKey, Arc<CostBreakdown>>,
}

impl AppCache {
    /// Create a new cache instance
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        Self {
            quotes: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Return the cached breakdown for `key`, computing it on a miss.
    ///
    /// Callers racing on the same key wait for one computation.
    pub async fn quote_or_compute<F>(&self, key: QuoteKey, compute: F) -> Arc<CostBreakdown>
    where
        F: FnOnce() -> CostBreakdown,
    {
        let entry = self
            .quotes
            .entry(key)
            .or_insert_with(async { Arc::new(compute()) })
            .await;

        if entry.is_fresh() {
            debug!("Cache MISS for quote: {:?}", entry.key());
        } else {
            debug!("Cache HIT for quote: {:?}", entry.key());
        }

        entry.into_value()
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            quotes_size: self.quotes.entry_count(),
        }
    }

}

impl Default for AppCache {
    fn default() -> Self {
        Self::new(1_000, Duration::from_secs(10 * 60))
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub quotes_size: u64,
}
