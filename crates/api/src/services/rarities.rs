//! `/rarities/` endpoints.

use gatcha_core::DbId;

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::Rarity;

/// GET /rarities/?search=
pub async fn list(api: &ApiClient, search: Option<&str>) -> ApiResult<Vec<Rarity>> {
    match search {
        Some(term) => api.get_json_query("/rarities/", &[("search", term)]).await,
        None => api.get_json("/rarities/").await,
    }
}

/// GET /rarities/{id}/
pub async fn retrieve(api: &ApiClient, id: DbId) -> ApiResult<Rarity> {
    api.get_json(&format!("/rarities/{id}/")).await
}
