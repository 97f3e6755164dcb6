//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// The project cache is tuned small and short-lived because listing data churns;
/// the general cache holds slower-moving content.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries in the project cache
    pub project_max_entries: usize,
    /// TTL in seconds for project cache entries
    pub project_ttl_secs: u64,
    /// Maximum number of entries in the general cache
    pub general_max_entries: usize,
    /// TTL in seconds for general cache entries
    pub general_ttl_secs: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval_secs: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PROJECT_CACHE_MAX_ENTRIES` - Project cache capacity (default: 200)
    /// - `PROJECT_CACHE_TTL_SECS` - Project cache TTL in seconds (default: 120)
    /// - `GENERAL_CACHE_MAX_ENTRIES` - General cache capacity (default: 1000)
    /// - `GENERAL_CACHE_TTL_SECS` - General cache TTL in seconds (default: 600)
    /// - `CLEANUP_INTERVAL_SECS` - Cleanup frequency in seconds (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 4000)
    pub fn from_env() -> Self {
        Self {
            project_max_entries: env::var("PROJECT_CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(200),
            project_ttl_secs: env::var("PROJECT_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(120),
            general_max_entries: env::var("GENERAL_CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            general_ttl_secs: env::var("GENERAL_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(600),
            cleanup_interval_secs: env::var("CLEANUP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(4000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_max_entries: 200,
            project_ttl_secs: 120,
            general_max_entries: 1000,
            general_ttl_secs: 600,
            cleanup_interval_secs: 60,
            server_port: 4000,
        }
    }
}
