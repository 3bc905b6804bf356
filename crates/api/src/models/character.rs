use gatcha_core::DbId;
use serde::{Deserialize, Serialize};

/// A collectible character profile with its nested variants and reference
/// images.
///
/// The prompt and lore fields (`hair_prompt`, `lore_tags`, …) are produced by
/// the backend's wiki-derivation pipeline; the client reads them but never
/// writes them directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<VariantReferenceImage>,
    #[serde(default)]
    pub variants: Vec<CharacterVariant>,
    pub series: DbId,
    pub unlock_level: i64,
    /// Media URL of the identity face crop, when one has been attached.
    #[serde(default)]
    pub identity_face_image: Option<String>,
    #[serde(default)]
    pub body_type_description: String,
    #[serde(default)]
    pub height_perception: String,
    #[serde(default)]
    pub hair_prompt: String,
    #[serde(default)]
    pub eye_prompt: String,
    #[serde(default)]
    pub visual_traits: Vec<String>,
    #[serde(default)]
    pub lore_tags: Vec<String>,
    #[serde(default)]
    pub affinity_environments: Vec<String>,
    #[serde(default)]
    pub clashing_environments: Vec<String>,
    #[serde(default)]
    pub negative_traits_suggestion: String,
    /// Archived characters stay queryable but are excluded from new rolls.
    #[serde(default)]
    pub legacy: bool,
}

/// Writable fields for creating or partially updating a character.
///
/// `series` is omitted from the request when `None` so partial updates do
/// not clear the relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<DbId>,
    pub description: String,
    pub unlock_level: i64,
}

/// A named visual version of a character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterVariant {
    pub id: DbId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<VariantReferenceImage>,
    pub character: DbId,
    #[serde(default)]
    pub theme: Option<DbId>,
    /// Outfit/adaptation override applied on top of the character prompts.
    #[serde(default)]
    pub visual_override: String,
    #[serde(default)]
    pub variant_type: VariantType,
    #[serde(default)]
    pub specific_reference_image: Option<String>,
}

/// Writable fields for creating or updating a variant.
///
/// `character` must be set on create; updates leave it `None` so the PATCH
/// touches only the text fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantPayload {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character: Option<DbId>,
}

/// Whether a variant is the character's canonical look or an alternate skin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariantType {
    #[default]
    Canon,
    Skin,
}

/// One reference image attached to a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantReferenceImage {
    pub id: DbId,
    /// Media URL of the stored image.
    pub image: String,
    pub variant: DbId,
}
