//! API Routes
//!
//! Configures the Axum router with all dashboard endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, configure_handler, get_handler, health_handler, put_handler, snapshot_handler,
    stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /cache` - Reinitialize the cache with a new capacity and TTL
/// - `PUT /entries` - Store a key-value pair
/// - `GET /entries` - List live entries
/// - `DELETE /entries` - Clear the cache and its statistics
/// - `GET /entries/:key` - Retrieve a value by key
/// - `GET /stats` - Get cache statistics and miss rate
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin so a browser dashboard can call the API
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/cache", post(configure_handler))
        .route(
            "/entries",
            put(put_handler).get(snapshot_handler).delete(clear_handler),
        )
        .route("/entries/:key", get(get_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
