//! TTL Cache Module
//!
//! The thread-safe cache handle: one coarse lock around a `CacheStore` and
//! one background reaper task per instance.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{CacheStats, CacheStore};
use crate::error::{CacheError, Result};
use crate::tasks::spawn_reaper_task;

// == Cache ==
/// Time-bounded byte cache.
///
/// Entries live for roughly `interval`: a background task sweeps the map
/// every `interval` and drops entries older than that. Reads never check
/// age, so an expired entry stays visible until the next sweep removes it.
///
/// `add` and `get` are plain synchronous calls and can be made from any
/// thread. Share the cache with `Arc<Cache>`. Dropping the last handle
/// stops the reaper.
pub struct Cache {
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    reaper: JoinHandle<()>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper on the current tokio
    /// runtime.
    ///
    /// # Errors
    /// - `CacheError::InvalidInterval` if `interval` is zero
    /// - `CacheError::NoRuntime` if called outside a tokio runtime
    pub fn new(interval: Duration) -> Result<Self> {
        let runtime =
            Handle::try_current().map_err(|err| CacheError::NoRuntime(err.to_string()))?;
        Self::new_in(interval, &runtime)
    }

    /// Creates an empty cache whose reaper runs on `runtime`.
    pub fn new_in(interval: Duration, runtime: &Handle) -> Result<Self> {
        if interval.is_zero() {
            return Err(CacheError::InvalidInterval);
        }

        let store = Arc::new(Mutex::new(CacheStore::new()));
        let reaper = spawn_reaper_task(store.clone(), interval, runtime);

        Ok(Self {
            store,
            interval,
            reaper,
        })
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// The empty key is accepted but can never be read back with `get`.
    pub fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        let value = value.into();
        debug!(key = %key, bytes = value.len(), "cache add");

        self.store.lock().insert(key, value);
    }

    // == Get ==
    /// Returns a copy of the bytes stored under `key`.
    ///
    /// The empty key is a "no key available" sentinel and always misses
    /// without taking the lock.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        if key.is_empty() {
            return None;
        }

        let value = self.store.lock().get(key);
        debug!(key = %key, hit = value.is_some(), "cache get");
        value
    }

    /// Number of stored entries, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    /// Entry lifetime and sweep cadence.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub fn stats(&self) -> CacheStats {
        self.store.lock().stats()
    }

    // == Stop ==
    /// Stops the reaper. Idempotent.
    ///
    /// The cache stays usable afterwards, but nothing expires anymore.
    pub fn stop(&self) {
        if !self.reaper.is_finished() {
            self.reaper.abort();
            info!("TTL reaper stopped");
        }
    }

    /// Returns true once the reaper task has exited.
    pub fn is_stopped(&self) -> bool {
        self.reaper.is_finished()
    }
}

impl fmt::Debug for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("interval", &self.interval)
            .field("entry_count", &self.len())
            .field("stopped", &self.is_stopped())
            .finish()
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        self.reaper.abort();
    }
}
