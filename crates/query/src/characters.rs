//! Cached accessors for characters, variants, and reference images.
//!
//! The character detail key (`character/{id}`) is the hub of the editing
//! flow: every variant and image write funnels its invalidation there so
//! the editor rereads one entity. The variant delete and image upload
//! endpoints do not name the owning character in their responses, so those
//! accessors take the owner id from the caller.

use gatcha_api::models::{
    Character, CharacterPayload, CharacterVariant, VariantPayload, VariantReferenceImage,
};
use gatcha_api::services::characters::CharacterFilter;
use gatcha_api::services::{characters, variant_images, variants};
use gatcha_api::ApiResult;
use gatcha_core::DbId;

use crate::client::QueryClient;
use crate::key::QueryKey;
use crate::state::{selected_id, QueryState};

pub fn characters_key() -> QueryKey {
    QueryKey::new("characters")
}

pub fn character_key(id: DbId) -> QueryKey {
    QueryKey::new("character").with_id(id)
}

/// List key; an unfiltered list and each distinct filter cache separately.
pub fn characters_key_for(filter: &CharacterFilter) -> QueryKey {
    let mut params: Vec<(String, String)> = Vec::new();
    if let Some(series) = filter.series {
        params.push(("series".into(), series.to_string()));
    }
    if let Some(search) = &filter.search {
        params.push(("search".into(), search.clone()));
    }
    if params.is_empty() {
        characters_key()
    } else {
        characters_key().with_params(params)
    }
}

pub fn variants_key(character: Option<DbId>) -> QueryKey {
    match character {
        Some(character) => QueryKey::new("variants").with_params([("character", character)]),
        None => QueryKey::new("variants"),
    }
}

// ---- reads ----------------------------------------------------------------

pub async fn character_list(
    client: &QueryClient,
    filter: &CharacterFilter,
) -> QueryState<Vec<Character>> {
    client
        .fetch(characters_key_for(filter), |api| async move {
            characters::list(&api, filter).await
        })
        .await
}

/// Detail read, disabled while no character is selected (`None` or `0`).
pub async fn character_details(client: &QueryClient, id: Option<DbId>) -> QueryState<Character> {
    let Some(id) = selected_id(id) else {
        return QueryState::disabled();
    };
    client
        .fetch(character_key(id), |api| async move {
            characters::retrieve(&api, id).await
        })
        .await
}

pub async fn variant_list(
    client: &QueryClient,
    character: Option<DbId>,
) -> QueryState<Vec<CharacterVariant>> {
    client
        .fetch(variants_key(character), |api| async move {
            variants::list(&api, character).await
        })
        .await
}

// ---- mutations and their invalidation sets --------------------------------

pub fn create_character_invalidates() -> Vec<QueryKey> {
    vec![characters_key()]
}

pub fn update_character_invalidates(id: DbId) -> Vec<QueryKey> {
    vec![characters_key(), character_key(id)]
}

pub fn delete_character_invalidates() -> Vec<QueryKey> {
    vec![characters_key()]
}

pub fn upload_face_image_invalidates(id: DbId) -> Vec<QueryKey> {
    vec![characters_key(), character_key(id)]
}

/// Variant creates and updates name their owner in the response; deletes
/// and image uploads rely on a caller-supplied owner id.
pub fn variant_write_invalidates(character: DbId) -> Vec<QueryKey> {
    vec![character_key(character)]
}

pub fn create_variants_invalidates(character: DbId) -> Vec<QueryKey> {
    vec![character_key(character)]
}

/// The editing flow refreshes explicitly after removing an image, so the
/// delete itself invalidates nothing.
pub fn delete_variant_image_invalidates() -> Vec<QueryKey> {
    Vec::new()
}

pub async fn create_character(
    client: &QueryClient,
    payload: &CharacterPayload,
) -> ApiResult<Character> {
    client
        .mutate(
            |api| async move { characters::create(&api, payload).await },
            |_| create_character_invalidates(),
        )
        .await
}

pub async fn update_character(
    client: &QueryClient,
    id: DbId,
    payload: &CharacterPayload,
) -> ApiResult<Character> {
    client
        .mutate(
            |api| async move { characters::update(&api, id, payload).await },
            |_| update_character_invalidates(id),
        )
        .await
}

pub async fn delete_character(client: &QueryClient, id: DbId) -> ApiResult<()> {
    client
        .mutate(
            |api| async move { characters::delete(&api, id).await },
            |_| delete_character_invalidates(),
        )
        .await
}

pub async fn upload_face_image(
    client: &QueryClient,
    id: DbId,
    file_name: String,
    bytes: Vec<u8>,
) -> ApiResult<Character> {
    client
        .mutate(
            |api| async move { characters::upload_face_image(&api, id, file_name, bytes).await },
            |_| upload_face_image_invalidates(id),
        )
        .await
}

/// Rebuild the character's profile from wiki text.
///
/// The response body is the updated character, so it is written into the
/// detail slot directly; only the list goes through invalidate-and-refetch.
pub async fn regenerate_from_wiki(
    client: &QueryClient,
    id: DbId,
    wiki_text: &str,
) -> ApiResult<Character> {
    let character = characters::regenerate_from_wiki(client.api(), id, wiki_text).await?;
    client
        .set_query_data(character_key(id), character.clone())
        .await;
    client.invalidate(&characters_key()).await;
    Ok(character)
}

pub async fn create_variants(client: &QueryClient, id: DbId) -> ApiResult<Vec<CharacterVariant>> {
    client
        .mutate(
            |api| async move { characters::create_variants(&api, id).await },
            |_| create_variants_invalidates(id),
        )
        .await
}

pub async fn create_variant(
    client: &QueryClient,
    payload: &VariantPayload,
) -> ApiResult<CharacterVariant> {
    client
        .mutate(
            |api| async move { variants::create(&api, payload).await },
            |variant: &CharacterVariant| variant_write_invalidates(variant.character),
        )
        .await
}

pub async fn update_variant(
    client: &QueryClient,
    id: DbId,
    payload: &VariantPayload,
) -> ApiResult<CharacterVariant> {
    client
        .mutate(
            |api| async move { variants::update(&api, id, payload).await },
            |variant: &CharacterVariant| variant_write_invalidates(variant.character),
        )
        .await
}

/// `character_id` is the owner; the delete response has no body to read it
/// from.
pub async fn delete_variant(client: &QueryClient, id: DbId, character_id: DbId) -> ApiResult<()> {
    client
        .mutate(
            |api| async move { variants::delete(&api, id).await },
            |_| variant_write_invalidates(character_id),
        )
        .await
}

/// `character_id` is the owner of `variant`; the upload response names only
/// the variant.
pub async fn upload_variant_image(
    client: &QueryClient,
    variant: DbId,
    character_id: DbId,
    file_name: String,
    bytes: Vec<u8>,
) -> ApiResult<VariantReferenceImage> {
    client
        .mutate(
            |api| async move { variant_images::upload(&api, variant, file_name, bytes).await },
            |_| variant_write_invalidates(character_id),
        )
        .await
}

pub async fn delete_variant_image(client: &QueryClient, id: DbId) -> ApiResult<()> {
    client
        .mutate(
            |api| async move { variant_images::delete(&api, id).await },
            |_| delete_variant_image_invalidates(),
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtered_lists_cache_separately_from_the_plain_list() {
        let plain = characters_key_for(&CharacterFilter::default());
        assert_eq!(plain, characters_key());

        let filtered = characters_key_for(&CharacterFilter::by_series(2));
        assert_ne!(filtered, plain);
        assert!(filtered.starts_with(&characters_key()));
    }

    #[test]
    fn filter_field_order_does_not_change_the_key() {
        let filter = CharacterFilter {
            series: Some(2),
            search: Some("rei".into()),
        };
        assert_eq!(
            characters_key_for(&filter).to_string(),
            "characters/{search=rei,series=2}"
        );
    }

    #[test]
    fn update_invalidates_both_list_and_detail() {
        assert_eq!(
            update_character_invalidates(7),
            vec![characters_key(), character_key(7)]
        );
        assert_eq!(upload_face_image_invalidates(7), update_character_invalidates(7));
    }

    #[test]
    fn variant_writes_funnel_into_the_owner_detail() {
        assert_eq!(variant_write_invalidates(3), vec![character_key(3)]);
        assert_eq!(create_variants_invalidates(3), vec![character_key(3)]);
    }

    #[test]
    fn image_deletes_invalidate_nothing() {
        assert!(delete_variant_image_invalidates().is_empty());
    }
}
