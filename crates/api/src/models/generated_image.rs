use gatcha_core::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

/// A rendered card image for a variant/rarity/style/theme combination.
///
/// Creation rolls the rarity and picks style/theme server-side, so every
/// field except the target variant is read-only on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub id: DbId,
    /// Media URL of the rendered image.
    #[serde(default)]
    pub image: Option<String>,
    pub character_variant: DbId,
    #[serde(default)]
    pub rarity: Option<DbId>,
    #[serde(default)]
    pub style: Option<DbId>,
    #[serde(default)]
    pub theme: Option<DbId>,
    pub created_at: Timestamp,
}
