//! `/styles/` endpoints.

use gatcha_core::DbId;

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::Style;

/// GET /styles/
pub async fn list(api: &ApiClient) -> ApiResult<Vec<Style>> {
    api.get_json("/styles/").await
}

/// GET /styles/{id}/
pub async fn retrieve(api: &ApiClient, id: DbId) -> ApiResult<Style> {
    api.get_json(&format!("/styles/{id}/")).await
}
