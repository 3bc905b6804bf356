//! Read-only catalog handlers: rarities, styles, themes, generated images.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use gatcha_api::models::{GeneratedImage, Rarity, Style, Theme};
use gatcha_core::DbId;

use crate::error::{MockError, MockResult};
use crate::state::SharedDb;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

// ---------------------------------------------------------------------------
// Rarities
// ---------------------------------------------------------------------------

pub async fn list_rarities(
    State(db): State<SharedDb>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Rarity>> {
    let db = db.read().await;
    let needle = query.search.as_deref().map(str::to_lowercase);
    let rarities = db
        .rarities
        .values()
        .filter(|rarity| {
            needle
                .as_deref()
                .is_none_or(|needle| rarity.name.to_lowercase().contains(needle))
        })
        .cloned()
        .collect();
    Json(rarities)
}

pub async fn get_rarity(
    State(db): State<SharedDb>,
    Path(id): Path<DbId>,
) -> MockResult<Json<Rarity>> {
    let db = db.read().await;
    db.rarities
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(MockError::NotFound)
}

// ---------------------------------------------------------------------------
// Styles
// ---------------------------------------------------------------------------

pub async fn list_styles(State(db): State<SharedDb>) -> Json<Vec<Style>> {
    let db = db.read().await;
    Json(db.styles.values().cloned().collect())
}

pub async fn get_style(
    State(db): State<SharedDb>,
    Path(id): Path<DbId>,
) -> MockResult<Json<Style>> {
    let db = db.read().await;
    db.styles
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(MockError::NotFound)
}

// ---------------------------------------------------------------------------
// Themes
// ---------------------------------------------------------------------------

pub async fn list_themes(State(db): State<SharedDb>) -> Json<Vec<Theme>> {
    let db = db.read().await;
    Json(db.themes.values().cloned().collect())
}

pub async fn get_theme(
    State(db): State<SharedDb>,
    Path(id): Path<DbId>,
) -> MockResult<Json<Theme>> {
    let db = db.read().await;
    db.themes
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(MockError::NotFound)
}

// ---------------------------------------------------------------------------
// Generated images
// ---------------------------------------------------------------------------

pub async fn list_generated_images(
    State(db): State<SharedDb>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<GeneratedImage>> {
    let db = db.read().await;
    let needle = query.search.as_deref().map(str::to_lowercase);
    let images = db
        .generated_images
        .values()
        .filter(|image| {
            needle.as_deref().is_none_or(|needle| {
                // Search matches the owning variant's name, like the backend's
                // relation-spanning filter.
                db.variants
                    .get(&image.character_variant)
                    .is_some_and(|variant| variant.name.to_lowercase().contains(needle))
            })
        })
        .cloned()
        .collect();
    Json(images)
}

pub async fn get_generated_image(
    State(db): State<SharedDb>,
    Path(id): Path<DbId>,
) -> MockResult<Json<GeneratedImage>> {
    let db = db.read().await;
    db.generated_images
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(MockError::NotFound)
}
