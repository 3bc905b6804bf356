//! `/variants/` endpoints.

use gatcha_core::DbId;

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{CharacterVariant, VariantPayload};

/// GET /variants/?character=
pub async fn list(api: &ApiClient, character: Option<DbId>) -> ApiResult<Vec<CharacterVariant>> {
    match character {
        Some(id) => {
            api.get_json_query("/variants/", &[("character", id)])
                .await
        }
        None => api.get_json("/variants/").await,
    }
}

/// GET /variants/{id}/
pub async fn retrieve(api: &ApiClient, id: DbId) -> ApiResult<CharacterVariant> {
    api.get_json(&format!("/variants/{id}/")).await
}

/// POST /variants/
pub async fn create(api: &ApiClient, payload: &VariantPayload) -> ApiResult<CharacterVariant> {
    let variant: CharacterVariant = api.post_json("/variants/", payload).await?;
    tracing::info!(
        variant_id = variant.id,
        character_id = variant.character,
        "Variant created"
    );
    Ok(variant)
}

/// PATCH /variants/{id}/
pub async fn update(
    api: &ApiClient,
    id: DbId,
    payload: &VariantPayload,
) -> ApiResult<CharacterVariant> {
    let variant: CharacterVariant = api.patch_json(&format!("/variants/{id}/"), payload).await?;
    tracing::info!(variant_id = variant.id, "Variant updated");
    Ok(variant)
}

/// DELETE /variants/{id}/
pub async fn delete(api: &ApiClient, id: DbId) -> ApiResult<()> {
    api.delete_no_content(&format!("/variants/{id}/")).await?;
    tracing::info!(variant_id = id, "Variant deleted");
    Ok(())
}
