//! Wire-format records, exactly as the backend serializes them.
//!
//! Read models mirror the backend's serializer output field-for-field; write
//! payloads carry only the writable subset. Fields the backend may omit or
//! blank out are `Option` or defaulted so older payloads still decode.

pub mod catalog;
pub mod character;
pub mod gamification;
pub mod generated_image;
pub mod series;
pub mod ticktick;

pub use catalog::{Rarity, Style, Theme};
pub use character::{
    Character, CharacterPayload, CharacterVariant, VariantPayload, VariantReferenceImage,
    VariantType,
};
pub use gamification::{
    Card, ClaimOutcome, Player, PlayerQuest, Quest, QuestType, RollOutcome, UserCard,
};
pub use generated_image::GeneratedImage;
pub use series::{Series, SeriesPayload};
pub use ticktick::{ManualTaskOutcome, ManualTaskPayload, TaskActivity, TaskReward, TaskStats};
