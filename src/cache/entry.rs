//! Cache Entry Module
//!
//! Defines a single cached value with its insertion and refresh timestamps.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A live key/value pair owned by the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<K, V> {
    /// Key this entry is stored under
    pub key: K,
    /// The stored value, never inspected by the cache
    pub value: V,
    /// When the key was first inserted
    pub inserted_at: Instant,
    /// Last insert, update or access that touched the key
    pub refreshed_at: Instant,
}

impl<K, V> CacheEntry<K, V> {
    // == Constructor ==
    /// Creates an entry stamped at `now`.
    pub fn new(key: K, value: V, now: Instant) -> Self {
        Self {
            key,
            value,
            inserted_at: now,
            refreshed_at: now,
        }
    }

    // == Refresh ==
    /// Restarts the TTL clock for this entry.
    pub fn refresh(&mut self, now: Instant) {
        self.refreshed_at = now;
    }

    // == Age ==
    /// Time elapsed since the entry was last refreshed.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.refreshed_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl`.
    ///
    /// The boundary is inclusive: an entry whose age equals `ttl` exactly is
    /// already expired.
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        self.age(now) >= ttl
    }

    // == Time To Live ==
    /// Remaining lifetime under `ttl`, zero once expired.
    pub fn ttl_remaining(&self, now: Instant, ttl: Duration) -> Duration {
        ttl.saturating_sub(self.age(now))
    }
}
