//! `/generated-images/` endpoints.

use gatcha_core::DbId;

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::GeneratedImage;

/// GET /generated-images/?search=
pub async fn list(api: &ApiClient, search: Option<&str>) -> ApiResult<Vec<GeneratedImage>> {
    match search {
        Some(term) => {
            api.get_json_query("/generated-images/", &[("search", term)])
                .await
        }
        None => api.get_json("/generated-images/").await,
    }
}

/// GET /generated-images/{id}/
pub async fn retrieve(api: &ApiClient, id: DbId) -> ApiResult<GeneratedImage> {
    api.get_json(&format!("/generated-images/{id}/")).await
}
