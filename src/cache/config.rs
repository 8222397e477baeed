//! Cache Configuration Module
//!
//! Construction parameters and accounting policy for the cache engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CacheError, Result};

// == Cache Policy ==
/// Accounting switches for matching older cache variants.
///
/// The defaults are the canonical behavior; flip a flag only when exact
/// parity with a legacy variant is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CachePolicy {
    /// `put` on an existing key counts as a hit
    pub count_update_as_hit: bool,
    /// `clear` also zeroes the statistics
    pub clear_resets_stats: bool,
    /// A `get` hit restarts the entry's TTL
    pub refresh_on_get: bool,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            count_update_as_hit: true,
            clear_resets_stats: true,
            refresh_on_get: true,
        }
    }
}

// == Cache Config ==
/// Capacity, TTL and policy for a cache instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of live entries
    pub capacity: usize,
    /// Lifetime of an entry since its last refresh
    pub ttl: Duration,
    /// Statistics and refresh policy
    pub policy: CachePolicy,
}

impl CacheConfig {
    // == Constructor ==
    /// Creates a configuration with the canonical policy.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            capacity,
            ttl,
            policy: CachePolicy::default(),
        }
    }

    /// Replaces the accounting policy.
    pub fn with_policy(mut self, policy: CachePolicy) -> Self {
        self.policy = policy;
        self
    }

    // == Validate ==
    /// Rejects a zero capacity or a zero TTL.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CacheError::InvalidConfiguration(
                "capacity must be a positive integer".to_string(),
            ));
        }
        if self.ttl.is_zero() {
            return Err(CacheError::InvalidConfiguration(
                "ttl must be a positive duration".to_string(),
            ));
        }
        Ok(())
    }
}
