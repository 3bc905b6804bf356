//! The query client: cache + coalescer + API handle.

use std::future::Future;
use std::sync::Arc;

use gatcha_api::{ApiClient, ApiResult};
use tokio::sync::broadcast;

use crate::cache::{QueryCache, QueryEvent};
use crate::coalesce::QueryCoalescer;
use crate::key::QueryKey;
use crate::state::QueryState;

/// Keyed read-through cache over an [`ApiClient`].
///
/// One instance serves a whole client session; share it behind an `Arc`.
/// Reads go through [`fetch`](Self::fetch), writes through
/// [`mutate`](Self::mutate) so their invalidation sets fire on success.
pub struct QueryClient {
    api: Arc<ApiClient>,
    cache: QueryCache,
    coalescer: QueryCoalescer,
}

impl QueryClient {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api: Arc::new(api),
            cache: QueryCache::new(),
            coalescer: QueryCoalescer::new(),
        }
    }

    /// Client against the backend named by `GATCHA_API_BASE_URL`.
    pub fn from_env() -> Self {
        Self::new(ApiClient::from_env())
    }

    /// The underlying API client, for one-off calls outside the cache.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Read through the cache.
    ///
    /// A fresh entry answers without a request. On miss or staleness the
    /// key's guard is taken, the cache re-checked (a concurrent fetch may
    /// have landed while waiting), and only then does `fetcher` run. A
    /// failed fetch leaves the cache untouched; the returned state carries
    /// the error plus whatever stale data was already cached.
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> QueryState<T>
    where
        T: Send + Sync + 'static,
        F: FnOnce(Arc<ApiClient>) -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        if let Some(data) = self.cache.get(&key).await {
            return QueryState::success(data);
        }

        let guard = self.coalescer.acquire(&key).await;
        if let Some(data) = self.cache.get(&key).await {
            drop(guard);
            self.coalescer.prune(&key).await;
            return QueryState::success(data);
        }

        tracing::debug!(key = %key, "Query fetch");
        let state = match fetcher(Arc::clone(&self.api)).await {
            Ok(value) => QueryState::success(self.cache.insert(key.clone(), value).await),
            Err(error) => {
                tracing::warn!(key = %key, error = %error, "Query fetch failed");
                let stale = self.cache.peek(&key).await;
                QueryState::failed(error, stale)
            }
        };
        drop(guard);
        self.coalescer.prune(&key).await;
        state
    }

    /// Run a write and, on success, invalidate the keys derived from its
    /// output. A failed write touches nothing.
    pub async fn mutate<T, F, Fut, K>(&self, op: F, keys_for: K) -> ApiResult<T>
    where
        F: FnOnce(Arc<ApiClient>) -> Fut,
        Fut: Future<Output = ApiResult<T>>,
        K: FnOnce(&T) -> Vec<QueryKey>,
    {
        let output = op(Arc::clone(&self.api)).await?;
        for key in keys_for(&output) {
            self.cache.invalidate(&key).await;
        }
        Ok(output)
    }

    /// Write a value straight into the cache as fresh (no request), used by
    /// mutations whose response body is the entity itself.
    pub async fn set_query_data<T: Send + Sync + 'static>(
        &self,
        key: QueryKey,
        value: T,
    ) -> Arc<T> {
        self.cache.set_data(key, value).await
    }

    /// Mark everything under `prefix` stale.
    pub async fn invalidate(&self, prefix: &QueryKey) {
        self.cache.invalidate(prefix).await;
    }

    /// Subscribe to invalidations and direct writes.
    pub fn subscribe(&self) -> broadcast::Receiver<QueryEvent> {
        self.cache.subscribe()
    }
}
