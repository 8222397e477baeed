//! API Module
//!
//! HTTP handlers and routing for the dashboard-facing REST API.
//!
//! # Endpoints
//! - `POST /cache` - Reinitialize the cache
//! - `PUT /entries` - Store a key-value pair
//! - `GET /entries` - List live entries
//! - `DELETE /entries` - Clear the cache
//! - `GET /entries/:key` - Retrieve a value by key
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
