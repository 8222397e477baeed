//! Response DTOs for the dashboard API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::time::Duration;

use serde::Serialize;

use crate::cache::{CacheKey, CacheStats, PutOutcome};

/// Response body for reinitializing the cache (POST /cache)
#[derive(Debug, Clone, Serialize)]
pub struct ConfigureResponse {
    /// Success message
    pub message: String,
    /// New capacity
    pub capacity: usize,
    /// New TTL in seconds
    pub ttl: f64,
}

impl ConfigureResponse {
    /// Creates a new ConfigureResponse
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            message: format!(
                "Cache initialized with size {} and TTL {} seconds",
                capacity,
                ttl.as_secs_f64()
            ),
            capacity,
            ttl: ttl.as_secs_f64(),
        }
    }
}

/// Response body for storing an entry (PUT /entries)
#[derive(Debug, Clone, Serialize)]
pub struct PutResponse {
    /// The key that was stored
    pub key: CacheKey,
    /// Whether the key was inserted or updated
    pub outcome: PutOutcome,
}

impl PutResponse {
    pub fn new(key: CacheKey, outcome: PutOutcome) -> Self {
        Self { key, outcome }
    }
}

/// Response body for a lookup (GET /entries/:key)
///
/// Sent with 200 on a hit and 404 on a miss; a miss is a normal outcome.
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: CacheKey,
    /// The stored value, null on a miss
    pub value: Option<String>,
    /// Whether a live entry was found
    pub hit: bool,
}

impl GetResponse {
    /// Creates a response for a cache hit
    pub fn hit(key: CacheKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: Some(value.into()),
            hit: true,
        }
    }

    /// Creates a response for a cache miss
    pub fn miss(key: CacheKey) -> Self {
        Self {
            key,
            value: None,
            hit: false,
        }
    }
}

/// One row of the live-entry table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView {
    pub key: CacheKey,
    pub value: String,
}

/// Response body for listing live entries (GET /entries)
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotResponse {
    /// Live entries, least recently used first
    pub entries: Vec<EntryView>,
}

impl SnapshotResponse {
    pub fn new(entries: Vec<(CacheKey, String)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| EntryView { key, value })
                .collect(),
        }
    }
}

/// Response body for clearing the cache (DELETE /entries)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
}

impl ClearResponse {
    pub fn cleared() -> Self {
        Self {
            message: "Cache cleared successfully".to_string(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Capacity and TTL evictions
    pub evictions: u64,
    /// Every get and put
    pub total_accesses: u64,
    /// misses / total_accesses
    pub miss_rate: f64,
    /// Live (unexpired) entries
    pub entries: usize,
    /// Configured capacity
    pub capacity: usize,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: CacheStats, entries: usize, capacity: usize) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_accesses: stats.total_accesses,
            miss_rate: stats.miss_rate(),
            entries,
            capacity,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
