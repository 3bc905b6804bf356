//! Series, character, variant, and reference-image handlers.

use axum::extract::{FromRequest, Multipart, Path, Query, Request, State};
use axum::http::{header, StatusCode};
use axum::Json;
use serde::Deserialize;

use gatcha_api::models::{
    Character, CharacterPayload, CharacterVariant, Series, SeriesPayload, VariantPayload,
    VariantReferenceImage, VariantType,
};
use gatcha_core::DbId;

use crate::error::{MockError, MockResult};
use crate::state::{next_key, SharedDb};

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

pub async fn list_series(State(db): State<SharedDb>) -> Json<Vec<Series>> {
    let db = db.read().await;
    Json(db.series.values().cloned().collect())
}

pub async fn get_series(
    State(db): State<SharedDb>,
    Path(id): Path<DbId>,
) -> MockResult<Json<Series>> {
    let db = db.read().await;
    db.series
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(MockError::NotFound)
}

pub async fn create_series(
    State(db): State<SharedDb>,
    Json(payload): Json<SeriesPayload>,
) -> (StatusCode, Json<Series>) {
    let mut db = db.write().await;
    let id = next_key(&db.series);
    let series = Series {
        id,
        name: payload.name,
        description: payload.description,
        unlock_level: payload.unlock_level,
    };
    db.series.insert(id, series.clone());
    (StatusCode::CREATED, Json(series))
}

pub async fn update_series(
    State(db): State<SharedDb>,
    Path(id): Path<DbId>,
    Json(payload): Json<SeriesPayload>,
) -> MockResult<Json<Series>> {
    let mut db = db.write().await;
    let series = db.series.get_mut(&id).ok_or(MockError::NotFound)?;
    series.name = payload.name;
    series.description = payload.description;
    series.unlock_level = payload.unlock_level;
    Ok(Json(series.clone()))
}

pub async fn delete_series(
    State(db): State<SharedDb>,
    Path(id): Path<DbId>,
) -> MockResult<StatusCode> {
    let mut db = db.write().await;
    db.series.remove(&id).ok_or(MockError::NotFound)?;
    // Cascade like the real schema: characters in the series go with it.
    let orphaned: Vec<DbId> = db
        .characters
        .values()
        .filter(|character| character.series == id)
        .map(|character| character.id)
        .collect();
    for character_id in orphaned {
        remove_character_tree(&mut db, character_id);
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CharacterListQuery {
    pub series: Option<DbId>,
    pub search: Option<String>,
}

pub async fn list_characters(
    State(db): State<SharedDb>,
    Query(query): Query<CharacterListQuery>,
) -> Json<Vec<Character>> {
    let db = db.read().await;
    let needle = query.search.as_deref().map(str::to_lowercase);
    let characters = db
        .characters
        .values()
        .filter(|character| query.series.is_none_or(|series| character.series == series))
        .filter(|character| {
            needle.as_deref().is_none_or(|needle| {
                character.name.to_lowercase().contains(needle)
                    || character.description.to_lowercase().contains(needle)
            })
        })
        .filter_map(|character| db.hydrate_character(character.id))
        .collect();
    Json(characters)
}

pub async fn get_character(
    State(db): State<SharedDb>,
    Path(id): Path<DbId>,
) -> MockResult<Json<Character>> {
    let db = db.read().await;
    db.hydrate_character(id).map(Json).ok_or(MockError::NotFound)
}

pub async fn create_character(
    State(db): State<SharedDb>,
    Json(payload): Json<CharacterPayload>,
) -> MockResult<(StatusCode, Json<Character>)> {
    let series = payload
        .series
        .ok_or_else(|| MockError::BadRequest("series is required".into()))?;

    let mut db = db.write().await;
    if !db.series.contains_key(&series) {
        return Err(MockError::BadRequest(format!(
            "series {series} does not exist"
        )));
    }
    let id = next_key(&db.characters);
    let character = Character {
        id,
        name: payload.name,
        description: payload.description,
        images: Vec::new(),
        variants: Vec::new(),
        series,
        unlock_level: payload.unlock_level,
        identity_face_image: None,
        body_type_description: String::new(),
        height_perception: String::new(),
        hair_prompt: String::new(),
        eye_prompt: String::new(),
        visual_traits: Vec::new(),
        lore_tags: Vec::new(),
        affinity_environments: Vec::new(),
        clashing_environments: Vec::new(),
        negative_traits_suggestion: String::new(),
        legacy: false,
    };
    db.characters.insert(id, character.clone());
    Ok((StatusCode::CREATED, Json(character)))
}

/// PATCH accepts either a JSON payload or a multipart form carrying an
/// `identity_face_image` file, matching the real endpoint's parser set.
pub async fn update_character(
    State(db): State<SharedDb>,
    Path(id): Path<DbId>,
    request: Request,
) -> MockResult<Json<Character>> {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"));

    if is_multipart {
        let multipart = Multipart::from_request(request, &())
            .await
            .map_err(|err| MockError::BadRequest(err.to_string()))?;
        return update_character_face(db, id, multipart).await;
    }

    let Json(payload): Json<CharacterPayload> = Json::from_request(request, &())
        .await
        .map_err(|err| MockError::BadRequest(err.to_string()))?;

    let mut db = db.write().await;
    {
        let character = db.characters.get_mut(&id).ok_or(MockError::NotFound)?;
        character.name = payload.name;
        character.description = payload.description;
        character.unlock_level = payload.unlock_level;
        if let Some(series) = payload.series {
            character.series = series;
        }
    }
    db.hydrate_character(id).map(Json).ok_or(MockError::NotFound)
}

async fn update_character_face(
    db: SharedDb,
    id: DbId,
    mut multipart: Multipart,
) -> MockResult<Json<Character>> {
    let mut face: Option<String> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| MockError::BadRequest(err.to_string()))?
    {
        if field.name() == Some("identity_face_image") {
            let file_name = field.file_name().unwrap_or("face.png").to_string();
            // Bytes are read to honour the stream but only the name is kept.
            let _ = field
                .bytes()
                .await
                .map_err(|err| MockError::BadRequest(err.to_string()))?;
            face = Some(format!("/media/character_faces/{file_name}"));
        }
    }
    let face = face.ok_or_else(|| MockError::BadRequest("identity_face_image is required".into()))?;

    let mut db = db.write().await;
    {
        let character = db.characters.get_mut(&id).ok_or(MockError::NotFound)?;
        character.identity_face_image = Some(face);
    }
    db.hydrate_character(id).map(Json).ok_or(MockError::NotFound)
}

pub async fn delete_character(
    State(db): State<SharedDb>,
    Path(id): Path<DbId>,
) -> MockResult<StatusCode> {
    let mut db = db.write().await;
    if !db.characters.contains_key(&id) {
        return Err(MockError::NotFound);
    }
    remove_character_tree(&mut db, id);
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct RegeneratePayload {
    pub wiki_text: String,
}

/// POST /characters/{id}/regenerate_from_wiki/
///
/// Stands in for the profiling pipeline: derives a deterministic profile
/// from the submitted text so callers can observe the update.
pub async fn regenerate_from_wiki(
    State(db): State<SharedDb>,
    Path(id): Path<DbId>,
    Json(payload): Json<RegeneratePayload>,
) -> MockResult<Json<Character>> {
    if payload.wiki_text.trim().is_empty() {
        return Err(MockError::BadRequest("wiki_text is required".into()));
    }

    let mut db = db.write().await;
    {
        let character = db.characters.get_mut(&id).ok_or(MockError::NotFound)?;
        let excerpt: String = payload.wiki_text.chars().take(120).collect();
        character.description = excerpt;
        character.lore_tags = vec!["wiki-derived".into()];
        if character.height_perception.is_empty() {
            character.height_perception = "AVERAGE".into();
        }
    }
    db.hydrate_character(id).map(Json).ok_or(MockError::NotFound)
}

/// POST /characters/{id}/create-variants/
///
/// Stands in for variant generation: creates one canonical variant and
/// returns the created set.
pub async fn create_variants(
    State(db): State<SharedDb>,
    Path(id): Path<DbId>,
) -> MockResult<Json<Vec<CharacterVariant>>> {
    let mut db = db.write().await;
    if !db.characters.contains_key(&id) {
        return Err(MockError::NotFound);
    }
    let variant_id = next_key(&db.variants);
    let variant = CharacterVariant {
        id: variant_id,
        name: format!("Generated Look {variant_id}"),
        description: "Auto-derived canonical outfit.".into(),
        images: Vec::new(),
        character: id,
        theme: None,
        visual_override: String::new(),
        variant_type: VariantType::Canon,
        specific_reference_image: None,
    };
    db.variants.insert(variant_id, variant.clone());
    Ok(Json(vec![variant]))
}

// ---------------------------------------------------------------------------
// Variants
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct VariantListQuery {
    pub character: Option<DbId>,
}

pub async fn list_variants(
    State(db): State<SharedDb>,
    Query(query): Query<VariantListQuery>,
) -> Json<Vec<CharacterVariant>> {
    let db = db.read().await;
    let variants = db
        .variants
        .values()
        .filter(|variant| {
            query
                .character
                .is_none_or(|character| variant.character == character)
        })
        .filter_map(|variant| db.hydrate_variant(variant.id))
        .collect();
    Json(variants)
}

pub async fn get_variant(
    State(db): State<SharedDb>,
    Path(id): Path<DbId>,
) -> MockResult<Json<CharacterVariant>> {
    let db = db.read().await;
    db.hydrate_variant(id).map(Json).ok_or(MockError::NotFound)
}

pub async fn create_variant(
    State(db): State<SharedDb>,
    Json(payload): Json<VariantPayload>,
) -> MockResult<(StatusCode, Json<CharacterVariant>)> {
    let character = payload
        .character
        .ok_or_else(|| MockError::BadRequest("character is required".into()))?;

    let mut db = db.write().await;
    if !db.characters.contains_key(&character) {
        return Err(MockError::BadRequest(format!(
            "character {character} does not exist"
        )));
    }
    let id = next_key(&db.variants);
    let variant = CharacterVariant {
        id,
        name: payload.name,
        description: payload.description,
        images: Vec::new(),
        character,
        theme: None,
        visual_override: String::new(),
        variant_type: VariantType::Canon,
        specific_reference_image: None,
    };
    db.variants.insert(id, variant.clone());
    Ok((StatusCode::CREATED, Json(variant)))
}

pub async fn update_variant(
    State(db): State<SharedDb>,
    Path(id): Path<DbId>,
    Json(payload): Json<VariantPayload>,
) -> MockResult<Json<CharacterVariant>> {
    let mut db = db.write().await;
    {
        let variant = db.variants.get_mut(&id).ok_or(MockError::NotFound)?;
        variant.name = payload.name;
        variant.description = payload.description;
    }
    db.hydrate_variant(id).map(Json).ok_or(MockError::NotFound)
}

pub async fn delete_variant(
    State(db): State<SharedDb>,
    Path(id): Path<DbId>,
) -> MockResult<StatusCode> {
    let mut db = db.write().await;
    db.variants.remove(&id).ok_or(MockError::NotFound)?;
    db.variant_images.retain(|_, image| image.variant != id);
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Variant reference images
// ---------------------------------------------------------------------------

/// POST /variant-images/ — multipart with a `variant` text field and an
/// `image` file field.
pub async fn upload_variant_image(
    State(db): State<SharedDb>,
    mut multipart: Multipart,
) -> MockResult<(StatusCode, Json<VariantReferenceImage>)> {
    let mut variant: Option<DbId> = None;
    let mut file_name: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| MockError::BadRequest(err.to_string()))?
    {
        match field.name() {
            Some("variant") => {
                let text = field
                    .text()
                    .await
                    .map_err(|err| MockError::BadRequest(err.to_string()))?;
                variant = Some(
                    text.parse()
                        .map_err(|_| MockError::BadRequest("variant must be an id".into()))?,
                );
            }
            Some("image") => {
                file_name = Some(field.file_name().unwrap_or("upload.png").to_string());
                let _ = field
                    .bytes()
                    .await
                    .map_err(|err| MockError::BadRequest(err.to_string()))?;
            }
            _ => {}
        }
    }

    let variant = variant.ok_or_else(|| MockError::BadRequest("variant is required".into()))?;
    let file_name = file_name.ok_or_else(|| MockError::BadRequest("image is required".into()))?;

    let mut db = db.write().await;
    if !db.variants.contains_key(&variant) {
        return Err(MockError::BadRequest(format!(
            "variant {variant} does not exist"
        )));
    }
    let id = next_key(&db.variant_images);
    let image = VariantReferenceImage {
        id,
        image: format!("/media/ref_images/{file_name}"),
        variant,
    };
    db.variant_images.insert(id, image.clone());
    Ok((StatusCode::CREATED, Json(image)))
}

pub async fn delete_variant_image(
    State(db): State<SharedDb>,
    Path(id): Path<DbId>,
) -> MockResult<StatusCode> {
    let mut db = db.write().await;
    db.variant_images.remove(&id).ok_or(MockError::NotFound)?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Remove a character and everything hanging off it.
fn remove_character_tree(db: &mut crate::state::MockDb, id: DbId) {
    db.characters.remove(&id);
    let variant_ids: Vec<DbId> = db
        .variants
        .values()
        .filter(|variant| variant.character == id)
        .map(|variant| variant.id)
        .collect();
    for variant_id in variant_ids {
        db.variants.remove(&variant_id);
        db.variant_images.retain(|_, image| image.variant != variant_id);
    }
}
