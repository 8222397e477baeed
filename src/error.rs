//! Error types for the cache engine and its dashboard API
//!
//! Provides unified error handling using thiserror. Cache misses, capacity
//! evictions and TTL expiry are normal outcomes and never appear here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache engine and API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity or TTL is non-positive or of the wrong type
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Key is outside the recognized key domain
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Value is outside the recognized value domain
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string()
        }));

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
