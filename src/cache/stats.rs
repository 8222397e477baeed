//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, evictions and
//! total accesses.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of the cache's counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Accesses that found a live key
    pub hits: u64,
    /// Accesses that found no live key (absent or just expired)
    pub misses: u64,
    /// Entries removed by capacity pressure or TTL expiry
    pub evictions: u64,
    /// Every `get` and `put`
    pub total_accesses: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Miss Rate ==
    /// Calculates the cache miss rate.
    ///
    /// Returns misses / total_accesses, or 0.0 if nothing has been accessed.
    pub fn miss_rate(&self) -> f64 {
        if self.total_accesses == 0 {
            0.0
        } else {
            self.misses as f64 / self.total_accesses as f64
        }
    }

    // == Hit Rate ==
    /// Returns hits / total_accesses, or 0.0 if nothing has been accessed.
    pub fn hit_rate(&self) -> f64 {
        if self.total_accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.total_accesses as f64
        }
    }

    // == Recorders ==
    pub fn record_access(&mut self) {
        self.total_accesses += 1;
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Reset ==
    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
