//! Keyed value cache with staleness tracking and change events.
//!
//! Entries hold type-erased payloads (`Arc<dyn Any + Send + Sync>`) so one
//! cache serves every resource type; readers downcast back through their
//! key's known type. Invalidation only marks entries stale — the value is
//! retained so a failed refetch can still show the last known data.
//!
//! Every invalidation and direct write is announced on a
//! `tokio::sync::broadcast` channel. Publishing never blocks; a subscriber
//! that falls behind observes `RecvError::Lagged` and should re-read.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};

use crate::key::QueryKey;

/// Buffer capacity for the change-event channel.
const EVENT_CAPACITY: usize = 1024;

/// A cache change other than a plain fetch landing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryEvent {
    /// Entries under this key prefix were marked stale.
    Invalidated { key: QueryKey },
    /// This exact key received a direct write and is fresh again.
    Updated { key: QueryKey },
}

struct CacheEntry {
    value: Arc<dyn Any + Send + Sync>,
    fresh: bool,
}

/// The keyed cache. Shared by reference from the query client; all methods
/// take `&self`.
pub struct QueryCache {
    entries: RwLock<HashMap<QueryKey, CacheEntry>>,
    events: broadcast::Sender<QueryEvent>,
}

impl QueryCache {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            entries: RwLock::new(HashMap::new()),
            events,
        }
    }

    /// A fresh entry's value, or `None` on miss, staleness, or a type
    /// mismatch (a mismatch means two reads disagree about a key and is
    /// treated as a miss rather than a panic).
    pub async fn get<T: Send + Sync + 'static>(&self, key: &QueryKey) -> Option<Arc<T>> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        if !entry.fresh {
            return None;
        }
        Arc::clone(&entry.value).downcast::<T>().ok()
    }

    /// The entry's value regardless of freshness.
    pub async fn peek<T: Send + Sync + 'static>(&self, key: &QueryKey) -> Option<Arc<T>> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        Arc::clone(&entry.value).downcast::<T>().ok()
    }

    /// Store a fetched value as fresh. Returns the shared handle that was
    /// stored.
    pub async fn insert<T: Send + Sync + 'static>(&self, key: QueryKey, value: T) -> Arc<T> {
        let value = Arc::new(value);
        let mut entries = self.entries.write().await;
        entries.insert(
            key,
            CacheEntry {
                value: Arc::clone(&value) as Arc<dyn Any + Send + Sync>,
                fresh: true,
            },
        );
        value
    }

    /// Write a value directly (no fetch involved), mark it fresh, and
    /// announce `Updated`.
    pub async fn set_data<T: Send + Sync + 'static>(&self, key: QueryKey, value: T) -> Arc<T> {
        let value = {
            let value = Arc::new(value);
            let mut entries = self.entries.write().await;
            entries.insert(
                key.clone(),
                CacheEntry {
                    value: Arc::clone(&value) as Arc<dyn Any + Send + Sync>,
                    fresh: true,
                },
            );
            value
        };
        tracing::debug!(key = %key, "Query cache direct write");
        self.publish(QueryEvent::Updated { key });
        value
    }

    /// Mark every entry whose key starts with `prefix` as stale and
    /// announce `Invalidated`.
    ///
    /// The event is published even when nothing matched: the announcement
    /// is about the data having changed server-side, not about cache
    /// occupancy.
    pub async fn invalidate(&self, prefix: &QueryKey) {
        let mut marked = 0usize;
        {
            let mut entries = self.entries.write().await;
            for (key, entry) in entries.iter_mut() {
                if key.starts_with(prefix) {
                    entry.fresh = false;
                    marked += 1;
                }
            }
        }
        tracing::debug!(prefix = %prefix, marked, "Query cache invalidated");
        self.publish(QueryEvent::Invalidated {
            key: prefix.clone(),
        });
    }

    /// Subscribe to invalidations and direct writes.
    pub fn subscribe(&self) -> broadcast::Receiver<QueryEvent> {
        self.events.subscribe()
    }

    fn publish(&self, event: QueryEvent) {
        // SendError only means there are zero receivers right now.
        let _ = self.events.send(event);
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> QueryKey {
        QueryKey::new(name)
    }

    #[tokio::test]
    async fn insert_then_get_round_trips_through_any() {
        let cache = QueryCache::new();
        cache.insert(key("series"), vec![1i64, 2, 3]).await;

        let got: Arc<Vec<i64>> = cache.get(&key("series")).await.unwrap();
        assert_eq!(*got, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn type_mismatch_reads_as_miss() {
        let cache = QueryCache::new();
        cache.insert(key("series"), 7i64).await;

        let wrong: Option<Arc<String>> = cache.get(&key("series")).await;
        assert!(wrong.is_none());
    }

    #[tokio::test]
    async fn invalidation_marks_stale_but_retains_the_value() {
        let cache = QueryCache::new();
        cache.insert(key("player"), 450i64).await;

        cache.invalidate(&key("player")).await;

        let fresh: Option<Arc<i64>> = cache.get(&key("player")).await;
        assert!(fresh.is_none());
        let stale: Arc<i64> = cache.peek(&key("player")).await.unwrap();
        assert_eq!(*stale, 450);
    }

    #[tokio::test]
    async fn invalidation_matches_by_prefix() {
        let cache = QueryCache::new();
        cache.insert(key("character").with_id(7), "liora").await;
        cache.insert(key("character").with_id(8), "juno").await;
        cache.insert(key("characters"), "list").await;

        cache.invalidate(&key("character").with_id(7)).await;
        assert!(cache.get::<&str>(&key("character").with_id(7)).await.is_none());
        assert!(cache.get::<&str>(&key("character").with_id(8)).await.is_some());
        // `characters` is a different name, not an extension of `character`.
        assert!(cache.get::<&str>(&key("characters")).await.is_some());

        cache.invalidate(&key("character")).await;
        assert!(cache.get::<&str>(&key("character").with_id(8)).await.is_none());
    }

    #[tokio::test]
    async fn set_data_publishes_updated_and_refreshes() {
        let cache = QueryCache::new();
        cache.insert(key("card").with_id(1), "old").await;
        cache.invalidate(&key("card").with_id(1)).await;

        let mut events = cache.subscribe();
        cache.set_data(key("card").with_id(1), "new").await;

        let got: Arc<&str> = cache.get(&key("card").with_id(1)).await.unwrap();
        assert_eq!(*got, "new");
        assert_eq!(
            events.recv().await.unwrap(),
            QueryEvent::Updated {
                key: key("card").with_id(1)
            }
        );
    }

    #[tokio::test]
    async fn invalidation_event_carries_the_prefix() {
        let cache = QueryCache::new();
        let mut events = cache.subscribe();

        cache.invalidate(&key("quests")).await;
        assert_eq!(
            events.recv().await.unwrap(),
            QueryEvent::Invalidated { key: key("quests") }
        );
    }
}
