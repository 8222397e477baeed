//! Request DTOs for the dashboard API
//!
//! Defines the structure of incoming HTTP request bodies and turns raw JSON
//! into validated cache inputs. Fields are taken as raw JSON so that a key or
//! value of the wrong type is reported as `InvalidKey` / `InvalidValue`
//! rather than as a generic body rejection.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::cache::{CacheConfig, CacheKey, CachePolicy};
use crate::error::{CacheError, Result};

// == Public Constants ==
/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB

/// Request body for reinitializing the cache (POST /cache)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigureRequest {
    /// Maximum number of entries, a positive integer
    #[serde(default)]
    pub capacity: Value,
    /// Entry lifetime in seconds, a positive number
    #[serde(default)]
    pub ttl: Value,
    /// Optional accounting policy; the current one is kept when omitted
    #[serde(default)]
    pub policy: Option<CachePolicy>,
}

impl ConfigureRequest {
    /// Validates the request into a cache configuration.
    pub fn into_config(self, current_policy: CachePolicy) -> Result<CacheConfig> {
        let capacity = self
            .capacity
            .as_u64()
            .filter(|capacity| *capacity > 0)
            .and_then(|capacity| usize::try_from(capacity).ok())
            .ok_or_else(|| {
                CacheError::InvalidConfiguration(format!(
                    "capacity must be a positive integer, got {}",
                    self.capacity
                ))
            })?;

        let ttl = self
            .ttl
            .as_f64()
            .filter(|secs| secs.is_finite() && *secs > 0.0)
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
            .ok_or_else(|| {
                CacheError::InvalidConfiguration(format!(
                    "ttl must be a positive number of seconds, got {}",
                    self.ttl
                ))
            })?;

        let config = CacheConfig::new(capacity, ttl)
            .with_policy(self.policy.unwrap_or(current_policy));
        config.validate()?;
        Ok(config)
    }
}

/// Request body for storing an entry (PUT /entries)
#[derive(Debug, Clone, Deserialize)]
pub struct PutRequest {
    /// Integer key
    #[serde(default)]
    pub key: Value,
    /// String value
    #[serde(default)]
    pub value: Value,
}

impl PutRequest {
    /// Validates the request into a key and value.
    pub fn into_parts(self) -> Result<(CacheKey, String)> {
        let key = self.key.as_i64().ok_or_else(|| {
            CacheError::InvalidKey(format!("key must be an integer, got {}", self.key))
        })?;

        let value = match self.value {
            Value::String(value) => value,
            other => {
                return Err(CacheError::InvalidValue(format!(
                    "value must be a string, got {}",
                    other
                )))
            }
        };

        if value.len() > MAX_VALUE_SIZE {
            return Err(CacheError::InvalidValue(format!(
                "value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            )));
        }

        Ok((key, value))
    }
}

/// Parses a key taken from a URL path segment.
pub fn parse_key(raw: &str) -> Result<CacheKey> {
    raw.trim()
        .parse()
        .map_err(|_| CacheError::InvalidKey(format!("key must be an integer, got '{}'", raw)))
}
