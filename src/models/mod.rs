//! Request and Response models for the dashboard API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{parse_key, ConfigureRequest, PutRequest, MAX_VALUE_SIZE};
pub use responses::{
    ClearResponse, ConfigureResponse, EntryView, GetResponse, HealthResponse, PutResponse,
    SnapshotResponse, StatsResponse,
};
