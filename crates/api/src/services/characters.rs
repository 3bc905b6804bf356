//! `/characters/` endpoints, including the wiki-profiling actions.

use gatcha_core::DbId;
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{Character, CharacterPayload, CharacterVariant};

/// Optional list filters, serialized straight into the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CharacterFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl CharacterFilter {
    pub fn by_series(series: DbId) -> Self {
        Self {
            series: Some(series),
            ..Self::default()
        }
    }

    pub fn by_search(search: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            ..Self::default()
        }
    }
}

/// GET /characters/?series=&search=
pub async fn list(api: &ApiClient, filter: &CharacterFilter) -> ApiResult<Vec<Character>> {
    api.get_json_query("/characters/", filter).await
}

/// GET /characters/{id}/
pub async fn retrieve(api: &ApiClient, id: DbId) -> ApiResult<Character> {
    api.get_json(&format!("/characters/{id}/")).await
}

/// POST /characters/
pub async fn create(api: &ApiClient, payload: &CharacterPayload) -> ApiResult<Character> {
    let character: Character = api.post_json("/characters/", payload).await?;
    tracing::info!(character_id = character.id, name = %character.name, "Character created");
    Ok(character)
}

/// PATCH /characters/{id}/
pub async fn update(api: &ApiClient, id: DbId, payload: &CharacterPayload) -> ApiResult<Character> {
    let character: Character = api.patch_json(&format!("/characters/{id}/"), payload).await?;
    tracing::info!(character_id = character.id, "Character updated");
    Ok(character)
}

/// DELETE /characters/{id}/
pub async fn delete(api: &ApiClient, id: DbId) -> ApiResult<()> {
    api.delete_no_content(&format!("/characters/{id}/")).await?;
    tracing::info!(character_id = id, "Character deleted");
    Ok(())
}

/// PATCH /characters/{id}/ (multipart)
///
/// Attach or replace the identity face image. Sent as multipart so the
/// backend's image field parser picks it up; every other field is left
/// untouched.
pub async fn upload_face_image(
    api: &ApiClient,
    id: DbId,
    file_name: String,
    bytes: Vec<u8>,
) -> ApiResult<Character> {
    let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
    let form = reqwest::multipart::Form::new().part("identity_face_image", part);
    let character: Character = api
        .patch_multipart(&format!("/characters/{id}/"), form)
        .await?;
    tracing::info!(character_id = id, "Character face image uploaded");
    Ok(character)
}

/// POST /characters/{id}/create-variants/
///
/// Ask the backend to derive a variant set for the character. Returns the
/// variants that were created.
pub async fn create_variants(api: &ApiClient, id: DbId) -> ApiResult<Vec<CharacterVariant>> {
    let variants: Vec<CharacterVariant> =
        api.post_action(&format!("/characters/{id}/create-variants/")).await?;
    tracing::info!(
        character_id = id,
        count = variants.len(),
        "Character variants generated"
    );
    Ok(variants)
}

/// POST /characters/{id}/regenerate_from_wiki/
///
/// Re-run the profiling pipeline over the given wiki text and return the
/// updated character.
pub async fn regenerate_from_wiki(
    api: &ApiClient,
    id: DbId,
    wiki_text: &str,
) -> ApiResult<Character> {
    let body = serde_json::json!({ "wiki_text": wiki_text });
    let character: Character = api
        .post_json(&format!("/characters/{id}/regenerate_from_wiki/"), &body)
        .await?;
    tracing::info!(character_id = id, "Character regenerated from wiki");
    Ok(character)
}
