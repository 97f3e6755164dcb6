//! API Module
//!
//! HTTP handlers and routing for the cache debug surface.
//!
//! # Endpoints
//! - `GET /stats` - Statistics for both cache instances plus process memory
//! - `DELETE /flush` - Clear cache instances selectively
//! - `GET /health` - Health check endpoint
//! - `GET /price/parse` - Parse a price text

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
