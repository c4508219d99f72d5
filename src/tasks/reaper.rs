//! TTL Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a task on `runtime` that sweeps `store` every `interval`.
///
/// The first sweep runs one full interval after spawning. Each sweep takes
/// the store lock, removes every entry older than `interval` and releases
/// the lock. The loop never ends on its own; callers stop it by aborting the
/// returned handle.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new()));
/// let reaper = spawn_reaper_task(store.clone(), Duration::from_secs(5), &Handle::current());
/// // Later:
/// reaper.abort();
/// ```
pub fn spawn_reaper_task(
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    runtime: &Handle,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        info!("Starting TTL reaper with interval of {:?}", interval);

        let mut ticker = interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let (removed, remaining) = {
                let mut guard = store.lock();
                let removed = guard.reap_expired(Instant::now(), interval);
                (removed, guard.len())
            };

            if removed > 0 {
                info!(
                    "TTL sweep: removed {} expired entries, {} remaining",
                    removed, remaining
                );
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}
