//! Response DTOs for the cache debug API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::StatsSnapshot;

// == Stats ==
/// Per-instance snapshots, keyed by instance name.
#[derive(Debug, Clone, Serialize)]
pub struct CacheReport {
    /// The short-TTL project listing cache
    pub project: StatsSnapshot,
    /// The long-TTL general-purpose cache
    pub general: StatsSnapshot,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Snapshots of both cache instances
    pub caches: CacheReport,
    /// Process memory usage at sample time
    pub memory: MemoryUsage,
    /// Sample timestamp in ISO 8601 format
    pub timestamp: String,
}

impl StatsResponse {
    /// Builds a stats report from both instance snapshots, sampling process
    /// memory and the current time.
    pub fn new(project: StatsSnapshot, general: StatsSnapshot) -> Self {
        Self {
            caches: CacheReport { project, general },
            memory: MemoryUsage::sample(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

// == Memory Usage ==
/// Resident set size of the current process.
#[derive(Debug, Clone, Serialize)]
pub struct MemoryUsage {
    /// RSS in bytes; null when the platform exposes no procfs
    pub rss_bytes: Option<u64>,
}

impl MemoryUsage {
    /// Samples the current process's resident set size.
    pub fn sample() -> Self {
        Self {
            rss_bytes: read_rss_bytes(),
        }
    }
}

/// Scans /proc/self/status for the VmRSS line, reported by the kernel in kB.
#[cfg(target_os = "linux")]
fn read_rss_bytes() -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    for line in status.lines() {
        if line.starts_with("VmRSS:") {
            let kb: u64 = line.split_whitespace().nth(1)?.parse().ok()?;
            return Some(kb * 1024);
        }
    }
    None
}

#[cfg(not(target_os = "linux"))]
fn read_rss_bytes() -> Option<u64> {
    None
}

// == Flush ==
/// Response body for the flush operation (DELETE /flush)
#[derive(Debug, Clone, Serialize)]
pub struct FlushResponse {
    /// Success message
    pub message: String,
    /// Names of the instances that were cleared
    pub flushed: Vec<String>,
}

impl FlushResponse {
    /// Creates a new FlushResponse
    pub fn new(flushed: Vec<String>) -> Self {
        Self {
            message: format!("Flushed caches: {}", flushed.join(", ")),
            flushed,
        }
    }
}

// == Health ==
/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

// == Price Parse ==
/// Response body for the price parse probe (GET /price/parse)
#[derive(Debug, Clone, Serialize)]
pub struct PriceParseResponse {
    /// The text that was parsed
    pub input: String,
    /// Parsed rupee amount; null when the text carries no price
    pub amount: Option<u64>,
}

impl PriceParseResponse {
    /// Creates a new PriceParseResponse
    pub fn new(input: impl Into<String>, amount: Option<u64>) -> Self {
        Self {
            input: input.into(),
            amount,
        }
    }
}

// == Error ==
/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(name: &str) -> StatsSnapshot {
        StatsSnapshot {
            name: name.to_string(),
            hits: 8,
            misses: 2,
            evictions: 1,
            total_requests: 10,
            hit_rate: "80.00%".to_string(),
            size: 5,
            max_size: 200,
            ttl_seconds: 120,
        }
    }

    #[test]
    fn test_stats_response_serialize() {
        let resp = StatsResponse::new(snapshot("project"), snapshot("general"));
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"caches\""));
        assert!(json.contains("\"project\""));
        assert!(json.contains("\"general\""));
        assert!(json.contains("\"memory\""));
        assert!(json.contains("\"timestamp\""));
        assert!(json.contains("80.00%"));
    }

    #[test]
    fn test_memory_usage_sample_on_linux() {
        let memory = MemoryUsage::sample();
        // Any live Linux process has a nonzero RSS
        if cfg!(target_os = "linux") {
            assert!(memory.rss_bytes.unwrap() > 0);
        }
    }

    #[test]
    fn test_memory_usage_null_serializes() {
        let memory = MemoryUsage { rss_bytes: None };
        let json = serde_json::to_string(&memory).unwrap();
        assert_eq!(json, r#"{"rss_bytes":null}"#);
    }

    #[test]
    fn test_flush_response_serialize() {
        let resp = FlushResponse::new(vec!["project".to_string(), "general".to_string()]);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("Flushed caches: project, general"));
        assert!(json.contains("\"flushed\""));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_price_parse_response_serialize() {
        let resp = PriceParseResponse::new("2 Cr", Some(20_000_000));
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("20000000"));

        let absent = PriceParseResponse::new("Price on Request", None);
        let json = serde_json::to_string(&absent).unwrap();
        assert!(json.contains("\"amount\":null"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
