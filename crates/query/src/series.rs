//! Cached accessors for series.

use gatcha_api::models::{Series, SeriesPayload};
use gatcha_api::services::series;
use gatcha_api::ApiResult;
use gatcha_core::DbId;

use crate::client::QueryClient;
use crate::key::QueryKey;
use crate::state::QueryState;

pub fn series_key() -> QueryKey {
    QueryKey::new("series")
}

pub async fn series_list(client: &QueryClient) -> QueryState<Vec<Series>> {
    client
        .fetch(series_key(), |api| async move { series::list(&api).await })
        .await
}

// ---- mutations and their invalidation sets --------------------------------

/// Every series write refreshes the one series list.
pub fn series_write_invalidates() -> Vec<QueryKey> {
    vec![series_key()]
}

pub async fn create_series(client: &QueryClient, payload: &SeriesPayload) -> ApiResult<Series> {
    client
        .mutate(
            |api| async move { series::create(&api, payload).await },
            |_| series_write_invalidates(),
        )
        .await
}

pub async fn update_series(
    client: &QueryClient,
    id: DbId,
    payload: &SeriesPayload,
) -> ApiResult<Series> {
    client
        .mutate(
            |api| async move { series::update(&api, id, payload).await },
            |_| series_write_invalidates(),
        )
        .await
}

pub async fn delete_series(client: &QueryClient, id: DbId) -> ApiResult<()> {
    client
        .mutate(
            |api| async move { series::delete(&api, id).await },
            |_| series_write_invalidates(),
        )
        .await
}
