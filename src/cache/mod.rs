//! Cache Module
//!
//! Provides in-memory caching with TTL expiration, least-recently-accessed
//! trimming, and weak etag fingerprints.

mod entry;
mod fingerprint;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use fingerprint::fingerprint;
pub use stats::{CacheStats, StatsSnapshot};
pub use store::CacheStore;
