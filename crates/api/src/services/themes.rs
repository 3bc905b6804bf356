//! `/themes/` endpoints.

use gatcha_core::DbId;

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::Theme;

/// GET /themes/
pub async fn list(api: &ApiClient) -> ApiResult<Vec<Theme>> {
    api.get_json("/themes/").await
}

/// GET /themes/{id}/
pub async fn retrieve(api: &ApiClient, id: DbId) -> ApiResult<Theme> {
    api.get_json(&format!("/themes/{id}/")).await
}
