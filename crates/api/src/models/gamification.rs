//! Player, quest, and collection records.

use gatcha_core::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

/// The player's progression state. Level, XP, and coins are owned by the
/// backend's reward pipeline and read-only on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: DbId,
    pub level: i64,
    pub xp: i64,
    pub gatcha_coins: i64,
}

/// A quest definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: DbId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub xp_reward: i64,
    pub currency_reward: i64,
    #[serde(rename = "type")]
    pub quest_type: QuestType,
    /// Key the backend's condition tracker matches against (e.g.
    /// `task_completed`).
    pub condition_key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestType {
    Daily,
    Achievement,
}

/// A player's progress against one quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerQuest {
    pub id: DbId,
    pub quest: Quest,
    pub progress: i64,
    pub completed: bool,
    pub claimed: bool,
}

/// Denormalised card read model: every name the collection view renders is
/// flattened in server-side so the client never has to join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: DbId,
    pub character_variant: DbId,
    pub character_variant_name: String,
    pub character_name: String,
    #[serde(default)]
    pub series_name: String,
    pub rarity: DbId,
    pub rarity_name: String,
    pub style: DbId,
    pub style_name: String,
    pub theme: DbId,
    pub theme_name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub pose: String,
    #[serde(default)]
    pub visual_override: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

/// A card instance the player owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCard {
    pub id: DbId,
    pub card: Card,
    /// How many copies have been rolled.
    pub count: i64,
    pub obtained_at: Timestamp,
}

/// Result of a gatcha roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// The card that landed, with its owned-copy count already updated.
    pub drop: UserCard,
    /// Whether this was the first copy of the card.
    pub is_new: bool,
    pub remaining_coins: i64,
}

/// Result of claiming a completed quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimOutcome {
    pub status: String,
}
