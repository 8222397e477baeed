//! Cache Module
//!
//! Provides a fixed-capacity in-memory cache with TTL expiration, LRU
//! eviction and hit/miss statistics.

mod clock;
mod config;
mod entry;
mod lru;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{Clock, MockClock, SystemClock};
pub use config::{CacheConfig, CachePolicy};
pub use entry::CacheEntry;
pub use lru::RecencyList;
pub use stats::CacheStats;
pub use store::{PutOutcome, TtlLruCache};

// == Public Types ==
/// Key type used by the dashboard surface.
pub type CacheKey = i64;

/// Cache type served by the dashboard API.
pub type DashboardCache = TtlLruCache<CacheKey, String>;
