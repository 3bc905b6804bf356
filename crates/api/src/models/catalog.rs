//! Rarity, style, and theme catalog records.
//!
//! These drive roll odds and image-generation prompts server-side; the
//! client only lists them for pickers and collection filters.

use gatcha_core::DbId;
use serde::{Deserialize, Serialize};

/// A rarity tier. Rolls land in the tier whose threshold is the highest one
/// at or below the rolled percentile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rarity {
    pub id: DbId,
    pub name: String,
    pub min_roll_threshold: i64,
    /// Hex color the UI uses for this tier's frame.
    pub ui_color_hex: String,
}

/// An art style tied to a rarity tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub id: DbId,
    pub name: String,
    #[serde(default)]
    pub style_keywords: String,
    #[serde(default)]
    pub composition_hint: String,
    pub rarity: DbId,
    pub unlock_level: i64,
}

/// A backdrop/ambiance theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: DbId,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub ambiance: String,
    #[serde(default)]
    pub keywords_theme: String,
    #[serde(default)]
    pub prompt_background: String,
    #[serde(default)]
    pub integration_idea: String,
    pub unlock_level: i64,
}
