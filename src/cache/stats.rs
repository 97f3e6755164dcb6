//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, and evictions.

use serde::Serialize;

// == Cache Stats ==
/// Cumulative performance counters for one cache instance.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key absent or expired)
    pub misses: u64,
    /// Number of entries removed by cleanup passes (TTL sweep + capacity trim)
    pub evictions: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Total Requests ==
    /// Total number of read attempts recorded.
    pub fn total_requests(&self) -> u64 {
        self.hits + self.misses
    }

    // == Hit Ratio ==
    /// Numeric hit ratio in `[0.0, 1.0]`, or 0.0 when no requests have been
    /// recorded. Programmatic consumers use this; the snapshot carries the
    /// formatted percentage.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.total_requests();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Hit Rate Percent ==
    /// Hit ratio formatted as a percentage with two decimals, e.g. `"66.67%"`.
    /// Returns `"0.00%"` when no requests have been recorded.
    pub fn hit_rate_percent(&self) -> String {
        format!("{:.2}%", self.hit_ratio() * 100.0)
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Evictions ==
    /// Adds a cleanup pass's removal count to the eviction counter.
    pub fn record_evictions(&mut self, count: u64) {
        self.evictions += count;
    }

    // == Reset ==
    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// == Stats Snapshot ==
/// Point-in-time view of one cache instance, as reported by the debug
/// surface.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    /// Instance name ("project", "general", ...)
    pub name: String,
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals
    pub misses: u64,
    /// Number of entries removed by cleanup passes
    pub evictions: u64,
    /// hits + misses
    pub total_requests: u64,
    /// Formatted percentage, e.g. "66.67%"
    pub hit_rate: String,
    /// Current number of entries
    pub size: usize,
    /// Configured capacity bound
    pub max_size: usize,
    /// Configured time-to-live in seconds
    pub ttl_seconds: u64,
}
