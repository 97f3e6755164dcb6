//! Warmcache - an in-process read cache for listing data
//!
//! Provides bounded TTL caching with least-recently-accessed trimming, a
//! price-text parser, and an HTTP debug surface over both cache instances.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod price;
pub mod tasks;

pub use api::AppState;
pub use cache::CacheStore;
pub use config::Config;
pub use price::{parse_price, price_within_range};
pub use tasks::spawn_cleanup_task;
