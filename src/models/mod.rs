//! Request and Response models for the cache debug API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP query parameters and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CacheTarget, FlushParams, PriceQuery};
pub use responses::{
    CacheReport, ErrorResponse, FlushResponse, HealthResponse, MemoryUsage, PriceParseResponse,
    StatsResponse,
};
