//! Per-key request coalescing.
//!
//! Concurrent fetches of one key should produce one backend request. Each
//! key gets a guard mutex; a fetch acquires the guard, re-checks the cache,
//! and only fetches on a confirmed miss. Waiters that queued behind the
//! winner find the cache populated when their turn comes.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::key::QueryKey;

pub struct QueryCoalescer {
    inflight: Mutex<HashMap<QueryKey, Arc<Mutex<()>>>>,
}

impl QueryCoalescer {
    pub fn new() -> Self {
        Self {
            inflight: Mutex::new(HashMap::new()),
        }
    }

    /// Take the guard for `key`, waiting behind any fetch already holding
    /// it.
    pub async fn acquire(&self, key: &QueryKey) -> OwnedMutexGuard<()> {
        let lock = {
            let mut inflight = self.inflight.lock().await;
            Arc::clone(
                inflight
                    .entry(key.clone())
                    .or_insert_with(|| Arc::new(Mutex::new(()))),
            )
        };
        lock.lock_owned().await
    }

    /// Drop the guard entry for `key` if nobody holds or waits on it.
    /// Called after a fetch settles so idle keys do not accumulate.
    pub async fn prune(&self, key: &QueryKey) {
        let mut inflight = self.inflight.lock().await;
        if let Some(lock) = inflight.get(key) {
            // The map's own Arc is the only one left once every guard and
            // waiter is gone.
            if Arc::strong_count(lock) == 1 {
                inflight.remove(key);
            }
        }
    }

    #[cfg(test)]
    async fn tracked_keys(&self) -> usize {
        self.inflight.lock().await.len()
    }
}

impl Default for QueryCoalescer {
    fn default() -> Self {
        Self::new()
    }
}
