//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries, so an
//! idle cache does not hold stale values until its next access.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::DashboardCache;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. It acquires the write lock for each sweep; every removed
/// entry counts as an eviction.
///
/// # Arguments
/// * `cache` - Arc<RwLock<DashboardCache>> shared reference to the cache
/// * `interval_secs` - Seconds between sweeps (at least one)
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(RwLock::new(DashboardCache::new(5, Duration::from_secs(30))?));
/// let sweep_handle = spawn_sweep_task(cache.clone(), 1);
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task(cache: Arc<RwLock<DashboardCache>>, interval_secs: u64) -> JoinHandle<()> {
    let interval_secs = interval_secs.max(1);
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!(interval_secs, "starting expiry sweep task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.write().await.purge_expired();

            if removed > 0 {
                info!(removed, "expiry sweep removed entries");
            } else {
                debug!("expiry sweep found nothing to remove");
            }
        }
    })
}
