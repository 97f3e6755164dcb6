//! API Handlers
//!
//! HTTP request handlers for each debug endpoint.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    CacheTarget, FlushParams, FlushResponse, HealthResponse, PriceParseResponse, PriceQuery,
    StatsResponse,
};
use crate::price::parse_price;

/// One cache instance behind the shared-state lock.
///
/// Values are stored as JSON so a single instance can memoize any read the
/// site performs (project records, listing pages, CMS fragments).
pub type SharedCache = Arc<RwLock<CacheStore<Value>>>;

/// Application state shared across all handlers.
///
/// Owns both process-wide cache instances. The instances share no state;
/// each has its own counters and its own cleanup timer.
#[derive(Clone)]
pub struct AppState {
    /// Short-TTL cache for frequently-changing project listing data
    pub project: SharedCache,
    /// Longer-TTL cache for general-purpose data
    pub general: SharedCache,
}

impl AppState {
    /// Creates a new AppState owning the given cache instances.
    pub fn new(project: CacheStore<Value>, general: CacheStore<Value>) -> Self {
        Self {
            project: Arc::new(RwLock::new(project)),
            general: Arc::new(RwLock::new(general)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Initializes both cache instances with parameters from the Config.
    pub fn from_config(config: &Config) -> Self {
        let project = CacheStore::new(
            "project",
            config.project_max_entries,
            Duration::from_secs(config.project_ttl_secs),
        );
        let general = CacheStore::new(
            "general",
            config.general_max_entries,
            Duration::from_secs(config.general_ttl_secs),
        );
        Self::new(project, general)
    }
}

/// Handler for GET /stats
///
/// Returns statistics for both cache instances plus process memory usage.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Read locks only; snapshots never mutate
    let project = state.project.read().await.stats();
    let general = state.general.read().await.stats();

    Json(StatsResponse::new(project, general))
}

/// Handler for DELETE /flush
///
/// Clears one or both cache instances, selected by the `cache` query
/// parameter: `project`, `general`, or `all` (the default).
pub async fn flush_handler(
    State(state): State<AppState>,
    Query(params): Query<FlushParams>,
) -> Result<Json<FlushResponse>> {
    let target = params.target().ok_or_else(|| {
        ApiError::InvalidTarget(format!(
            "Unknown cache '{}', expected 'project', 'general', or 'all'",
            params.cache.as_deref().unwrap_or_default()
        ))
    })?;

    let mut flushed = Vec::new();

    if matches!(target, CacheTarget::Project | CacheTarget::All) {
        let mut cache = state.project.write().await;
        cache.clear();
        flushed.push(cache.name().to_string());
    }

    if matches!(target, CacheTarget::General | CacheTarget::All) {
        let mut cache = state.general.write().await;
        cache.clear();
        flushed.push(cache.name().to_string());
    }

    Ok(Json(FlushResponse::new(flushed)))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /price/parse
///
/// Parses a price text through the same grammar the listing filters use,
/// for spot-checking stored price strings.
pub async fn parse_price_handler(Query(query): Query<PriceQuery>) -> Json<PriceParseResponse> {
    let amount = parse_price(&query.text);

    Json(PriceParseResponse::new(query.text, amount))
}
