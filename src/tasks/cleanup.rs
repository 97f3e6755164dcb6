//! Periodic Cleanup Task
//!
//! Background task that sweeps one cache instance: removes expired entries
//! and trims the least-recently-accessed surplus over capacity.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically runs a cleanup pass on one
/// cache instance.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between passes. It acquires a write lock on the cache store only for the
/// duration of the pass itself.
///
/// # Arguments
/// * `cache` - Shared reference to the cache instance
/// * `interval` - Time between cleanup passes
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let handle = spawn_cleanup_task(state.project.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_cleanup_task<T>(
    cache: Arc<RwLock<CacheStore<T>>>,
    interval: Duration,
) -> JoinHandle<()>
where
    T: Send + Sync + 'static,
{
    tokio::spawn(async move {
        let name = cache.read().await.name().to_string();
        info!(
            "Starting cleanup task for '{}' cache with interval {:?}",
            name, interval
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and run one pass
            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup()
            };

            // Log cleanup statistics
            if removed > 0 {
                info!("Cleanup pass on '{}' cache removed {} entries", name, removed);
            } else {
                debug!("Cleanup pass on '{}' cache found nothing to remove", name);
            }
        }
    })
}
