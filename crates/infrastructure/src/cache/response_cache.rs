//! Moka cache for upstream JSON bodies
//!
//! Keyed by the full upstream URL. Each entry carries its own TTL so the
//! forecast, air quality and geocoding bodies can expire on different
//! schedules from one cache.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{Duration, Instant},
};

use bytes::Bytes;
use moka::{Expiry, future::Cache};
use tracing::{debug, instrument};

use crate::config::CacheConfig;

#[derive(Debug, Clone)]
struct CachedBody {
    body: Bytes,
    ttl: Duration,
}

/// Expires each entry after the TTL it was inserted with
struct PerEntryTtl;

impl Expiry<String, CachedBody> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CachedBody,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Snapshot of cache counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that had to go upstream
    pub misses: u64,
    /// Entries currently held (approximate)
    pub entries: u64,
}

/// Upstream body cache; disabled instances never store anything
pub struct ResponseCache {
    cache: Option<Cache<String, CachedBody>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl std::fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCache")
            .field("enabled", &self.is_enabled())
            .field("entries", &self.entry_count())
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish()
    }
}

impl ResponseCache {
    /// Create a cache from configuration
    #[must_use]
    pub fn new(config: &CacheConfig) -> Self {
        let cache = config.enabled.then(|| {
            Cache::builder()
                .max_capacity(config.max_entries)
                .expire_after(PerEntryTtl)
                .build()
        });

        Self {
            cache,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// A cache that stores nothing
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(&CacheConfig {
            enabled: false,
            ..CacheConfig::default()
        })
    }

    /// Whether entries are stored at all
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Look up a body by upstream URL
    #[instrument(skip(self), level = "debug")]
    pub async fn get(&self, url: &str) -> Option<Bytes> {
        let cache = self.cache.as_ref()?;

        if let Some(entry) = cache.get(url).await {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("Cache hit");
            Some(entry.body)
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!("Cache miss");
            None
        }
    }

    /// Store a body for `ttl`; a zero TTL is not stored
    #[instrument(skip(self, body), level = "debug", fields(bytes = body.len()))]
    pub async fn insert(&self, url: &str, body: Bytes, ttl: Duration) {
        let Some(cache) = &self.cache else {
            return;
        };
        if ttl.is_zero() {
            return;
        }

        cache.insert(url.to_string(), CachedBody { body, ttl }).await;
        debug!("Cache set");
    }

    /// Approximate number of live entries
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.as_ref().map_or(0, Cache::entry_count)
    }

    /// Current counters
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entry_count(),
        }
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}
