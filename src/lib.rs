//! TTL LRU Cache - a fixed-capacity cache with TTL expiry and statistics
//!
//! Provides an LRU cache engine whose entries also expire after a
//! time-to-live, plus the HTTP API a dashboard uses to drive it.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheStats, PutOutcome, TtlLruCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::spawn_sweep_task;
