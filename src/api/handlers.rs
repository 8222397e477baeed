//! API Handlers
//!
//! HTTP request handlers for each dashboard endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::cache::DashboardCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    parse_key, ClearResponse, ConfigureRequest, ConfigureResponse, GetResponse, HealthResponse,
    PutRequest, PutResponse, SnapshotResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// Contains the cache wrapped in Arc<RwLock<>>; every operation that moves
/// recency or counters takes the write lock.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache
    pub cache: Arc<RwLock<DashboardCache>>,
}

impl AppState {
    /// Creates a new AppState with the given cache.
    pub fn new(cache: DashboardCache) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails if the configured capacity or TTL is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = DashboardCache::with_config(config.cache_config())?;
        Ok(Self::new(cache))
    }
}

/// Handler for POST /cache
///
/// Replaces the cache with a fresh one of the requested capacity and TTL.
/// On validation failure the current cache is left untouched.
pub async fn configure_handler(
    State(state): State<AppState>,
    Json(req): Json<ConfigureRequest>,
) -> Result<Json<ConfigureResponse>> {
    let current_policy = state.cache.read().await.policy();
    let config = req.into_config(current_policy)?;
    let fresh = DashboardCache::with_config(config)?;

    *state.cache.write().await = fresh;
    info!(
        capacity = config.capacity,
        ttl_secs = config.ttl.as_secs_f64(),
        "cache reinitialized"
    );

    Ok(Json(ConfigureResponse::new(config.capacity, config.ttl)))
}

/// Handler for PUT /entries
///
/// Stores a key-value pair, evicting the least recently used entry if full.
pub async fn put_handler(
    State(state): State<AppState>,
    Json(req): Json<PutRequest>,
) -> Result<Json<PutResponse>> {
    let (key, value) = req.into_parts()?;

    let outcome = state.cache.write().await.put(key, value);

    Ok(Json(PutResponse::new(key, outcome)))
}

/// Handler for GET /entries/:key
///
/// Returns 200 with the value on a hit and 404 on a miss.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(raw_key): Path<String>,
) -> Result<(StatusCode, Json<GetResponse>)> {
    let key = parse_key(&raw_key)?;

    // Acquire write lock (needed for LRU touch and stats update)
    let mut cache = state.cache.write().await;
    let response = match cache.get(&key) {
        Some(value) => (StatusCode::OK, Json(GetResponse::hit(key, value.as_str()))),
        None => (StatusCode::NOT_FOUND, Json(GetResponse::miss(key))),
    };

    Ok(response)
}

/// Handler for GET /entries
///
/// Lists live entries after sweeping expired ones.
pub async fn snapshot_handler(State(state): State<AppState>) -> Json<SnapshotResponse> {
    let entries = state.cache.write().await.snapshot();
    Json(SnapshotResponse::new(entries))
}

/// Handler for DELETE /entries
///
/// Removes every entry and resets statistics.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.cache.write().await.clear();
    info!("cache cleared");
    Json(ClearResponse::cleared())
}

/// Handler for GET /stats
///
/// Returns current cache statistics and miss rate.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Read lock only; expired entries are left for the next sweep
    let cache = state.cache.read().await;

    Json(StatsResponse::new(
        cache.statistics(),
        cache.live_len(),
        cache.capacity(),
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
