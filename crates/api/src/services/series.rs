//! `/series/` endpoints.

use gatcha_core::DbId;

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{Series, SeriesPayload};

/// GET /series/
pub async fn list(api: &ApiClient) -> ApiResult<Vec<Series>> {
    api.get_json("/series/").await
}

/// GET /series/{id}/
pub async fn retrieve(api: &ApiClient, id: DbId) -> ApiResult<Series> {
    api.get_json(&format!("/series/{id}/")).await
}

/// POST /series/
pub async fn create(api: &ApiClient, payload: &SeriesPayload) -> ApiResult<Series> {
    let series: Series = api.post_json("/series/", payload).await?;
    tracing::info!(series_id = series.id, name = %series.name, "Series created");
    Ok(series)
}

/// PATCH /series/{id}/
pub async fn update(api: &ApiClient, id: DbId, payload: &SeriesPayload) -> ApiResult<Series> {
    let series: Series = api.patch_json(&format!("/series/{id}/"), payload).await?;
    tracing::info!(series_id = series.id, "Series updated");
    Ok(series)
}

/// DELETE /series/{id}/
pub async fn delete(api: &ApiClient, id: DbId) -> ApiResult<()> {
    api.delete_no_content(&format!("/series/{id}/")).await?;
    tracing::info!(series_id = id, "Series deleted");
    Ok(())
}
