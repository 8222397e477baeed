//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::{CacheConfig, CachePolicy};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Initial cache capacity
    pub capacity: usize,
    /// Initial entry TTL in seconds
    pub ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background sweep interval in seconds
    pub sweep_interval: u64,
    /// Statistics and refresh policy
    pub policy: CachePolicy,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Initial cache capacity (default: 5)
    /// - `CACHE_TTL` - Entry TTL in seconds (default: 30)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SWEEP_INTERVAL` - Expiry sweep frequency in seconds (default: 1)
    /// - `COUNT_UPDATE_AS_HIT`, `CLEAR_RESETS_STATS`, `REFRESH_ON_GET` -
    ///   policy flags (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity: env_or("CACHE_CAPACITY", defaults.capacity),
            ttl: env_or("CACHE_TTL", defaults.ttl),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            sweep_interval: env_or("SWEEP_INTERVAL", defaults.sweep_interval),
            policy: CachePolicy {
                count_update_as_hit: env_or(
                    "COUNT_UPDATE_AS_HIT",
                    defaults.policy.count_update_as_hit,
                ),
                clear_resets_stats: env_or(
                    "CLEAR_RESETS_STATS",
                    defaults.policy.clear_resets_stats,
                ),
                refresh_on_get: env_or("REFRESH_ON_GET", defaults.policy.refresh_on_get),
            },
        }
    }

    /// Cache construction parameters for the initial cache.
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig::new(self.capacity, Duration::from_secs(self.ttl)).with_policy(self.policy)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 5,
            ttl: 30,
            server_port: 3000,
            sweep_interval: 1,
            policy: CachePolicy::default(),
        }
    }
}

/// Reads and parses `name`, falling back to `default` when unset or malformed.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
