//! In-memory state backing the mock backend.
//!
//! Records live in per-table `BTreeMap`s keyed by id, mirroring the real
//! backend's per-table integer primary keys. Nested structures (a character's
//! variants, a variant's images) are assembled on read by the `hydrate_*`
//! helpers so writes stay single-table.

use std::collections::BTreeMap;
use std::sync::Arc;

use gatcha_api::models::{
    Card, Character, CharacterVariant, GeneratedImage, Player, PlayerQuest, Quest, QuestType,
    Rarity, Series, Style, TaskActivity, TaskStats, Theme, UserCard, VariantReferenceImage,
    VariantType,
};
use gatcha_core::{DbId, Timestamp};
use tokio::sync::RwLock;

pub type SharedDb = Arc<RwLock<MockDb>>;

#[derive(Debug, Default)]
pub struct MockDb {
    pub series: BTreeMap<DbId, Series>,
    /// Stored flat; `variants`/`images` are filled in by [`MockDb::hydrate_character`].
    pub characters: BTreeMap<DbId, Character>,
    /// Stored flat; `images` is filled in by [`MockDb::hydrate_variant`].
    pub variants: BTreeMap<DbId, CharacterVariant>,
    pub variant_images: BTreeMap<DbId, VariantReferenceImage>,
    pub generated_images: BTreeMap<DbId, GeneratedImage>,
    pub rarities: BTreeMap<DbId, Rarity>,
    pub styles: BTreeMap<DbId, Style>,
    pub themes: BTreeMap<DbId, Theme>,
    pub player: Option<Player>,
    pub quests: BTreeMap<DbId, PlayerQuest>,
    pub cards: BTreeMap<DbId, Card>,
    pub user_cards: BTreeMap<DbId, UserCard>,
    pub task_stats: TaskStats,
    reroll_serial: u64,
}

/// Next free id for a table: max key + 1, starting at 1 like the real
/// backend's autoincrement columns.
pub fn next_key<T>(table: &BTreeMap<DbId, T>) -> DbId {
    table.last_key_value().map(|(id, _)| id + 1).unwrap_or(1)
}

fn ts(secs: i64) -> Timestamp {
    chrono::DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

impl MockDb {
    pub fn shared(self) -> SharedDb {
        Arc::new(RwLock::new(self))
    }

    /// A variant with its reference images attached.
    pub fn hydrate_variant(&self, id: DbId) -> Option<CharacterVariant> {
        let mut variant = self.variants.get(&id)?.clone();
        variant.images = self
            .variant_images
            .values()
            .filter(|image| image.variant == id)
            .cloned()
            .collect();
        Some(variant)
    }

    /// A character with its variants (and their images) attached. The
    /// character-level `images` list is the union of its variants' images.
    pub fn hydrate_character(&self, id: DbId) -> Option<Character> {
        let mut character = self.characters.get(&id)?.clone();
        let variant_ids: Vec<DbId> = self
            .variants
            .values()
            .filter(|variant| variant.character == id)
            .map(|variant| variant.id)
            .collect();
        character.variants = variant_ids
            .iter()
            .filter_map(|variant_id| self.hydrate_variant(*variant_id))
            .collect();
        character.images = character
            .variants
            .iter()
            .flat_map(|variant| variant.images.iter().cloned())
            .collect();
        Some(character)
    }

    /// A fresh media URL for a rerolled card image; each call yields a new
    /// one so tests can observe the change.
    pub fn next_reroll_url(&mut self) -> String {
        self.reroll_serial += 1;
        format!("/media/generated/reroll_{}.png", self.reroll_serial)
    }

    /// Deterministic fixture set: two series, two characters with variants
    /// and images, the full rarity ladder, one owned card and one rollable
    /// card, and a claimable plus an exhausted quest.
    pub fn seeded() -> Self {
        let mut db = MockDb::default();

        db.series.insert(
            1,
            Series {
                id: 1,
                name: "Starfall Academy".into(),
                description: "Slice-of-life magic school ensemble.".into(),
                unlock_level: 1,
            },
        );
        db.series.insert(
            2,
            Series {
                id: 2,
                name: "Midnight Arcade".into(),
                description: "Neon competitive-gaming drama.".into(),
                unlock_level: 3,
            },
        );

        db.characters.insert(
            1,
            Character {
                id: 1,
                name: "Liora Venn".into(),
                description: "Transfer student with a knack for starlight magic.".into(),
                images: Vec::new(),
                variants: Vec::new(),
                series: 1,
                unlock_level: 1,
                identity_face_image: Some("/media/character_faces/liora.png".into()),
                body_type_description: "petite build".into(),
                height_perception: "SHORT".into(),
                hair_prompt: "silver twin-tails".into(),
                eye_prompt: "violet eyes".into(),
                visual_traits: vec!["freckles".into()],
                lore_tags: vec!["starlight".into(), "academy".into()],
                affinity_environments: vec!["night sky".into()],
                clashing_environments: vec!["deep sea".into()],
                negative_traits_suggestion: String::new(),
                legacy: false,
            },
        );
        db.characters.insert(
            2,
            Character {
                id: 2,
                name: "Juno Kest".into(),
                description: "Reigning arcade champion, undefeated after dark.".into(),
                images: Vec::new(),
                variants: Vec::new(),
                series: 2,
                unlock_level: 3,
                identity_face_image: None,
                body_type_description: String::new(),
                height_perception: "TALL".into(),
                hair_prompt: String::new(),
                eye_prompt: String::new(),
                visual_traits: Vec::new(),
                lore_tags: vec!["arcade".into()],
                affinity_environments: Vec::new(),
                clashing_environments: Vec::new(),
                negative_traits_suggestion: String::new(),
                legacy: false,
            },
        );

        db.variants.insert(
            1,
            CharacterVariant {
                id: 1,
                name: "School Uniform".into(),
                description: "Standard academy look.".into(),
                images: Vec::new(),
                character: 1,
                theme: None,
                visual_override: String::new(),
                variant_type: VariantType::Canon,
                specific_reference_image: None,
            },
        );
        db.variants.insert(
            2,
            CharacterVariant {
                id: 2,
                name: "Summer Festival".into(),
                description: "Yukata with star ornaments.".into(),
                images: Vec::new(),
                character: 1,
                theme: Some(1),
                visual_override: "festival yukata, paper lanterns".into(),
                variant_type: VariantType::Skin,
                specific_reference_image: None,
            },
        );
        db.variants.insert(
            3,
            CharacterVariant {
                id: 3,
                name: "Arcade Champion".into(),
                description: "Jacket covered in tournament patches.".into(),
                images: Vec::new(),
                character: 2,
                theme: Some(2),
                visual_override: String::new(),
                variant_type: VariantType::Canon,
                specific_reference_image: None,
            },
        );

        for (id, variant, file) in [
            (1, 1, "liora_front.png"),
            (2, 1, "liora_side.png"),
            (3, 2, "liora_festival.png"),
        ] {
            db.variant_images.insert(
                id,
                VariantReferenceImage {
                    id,
                    image: format!("/media/ref_images/{file}"),
                    variant,
                },
            );
        }

        for (id, name, threshold, color) in [
            (1, "COMMON", 0, "#9e9e9e"),
            (2, "RARE", 60, "#3f51b5"),
            (3, "EPIC", 85, "#9c27b0"),
            (4, "LEGENDARY", 97, "#ffc107"),
        ] {
            db.rarities.insert(
                id,
                Rarity {
                    id,
                    name: name.into(),
                    min_roll_threshold: threshold,
                    ui_color_hex: color.into(),
                },
            );
        }

        for (id, name, rarity) in [
            (1, "Ink Sketch", 1),
            (2, "Cel Shaded", 2),
            (3, "Oil Portrait", 3),
            (4, "Holographic", 4),
        ] {
            db.styles.insert(
                id,
                Style {
                    id,
                    name: name.into(),
                    style_keywords: format!("{}, clean lines", name.to_lowercase()),
                    composition_hint: "bust framing".into(),
                    rarity,
                    unlock_level: 1,
                },
            );
        }

        db.themes.insert(
            1,
            Theme {
                id: 1,
                name: "Neon City".into(),
                category: "Urban".into(),
                ambiance: "rain-slick streets".into(),
                keywords_theme: "neon signage, midnight crowd".into(),
                prompt_background: "glowing alley under neon rain".into(),
                integration_idea: "reflections on wet asphalt".into(),
                unlock_level: 1,
            },
        );
        db.themes.insert(
            2,
            Theme {
                id: 2,
                name: "Ancient Forest".into(),
                category: "Nature".into(),
                ambiance: "dappled light".into(),
                keywords_theme: "mossy stones, fireflies".into(),
                prompt_background: "sunbeams through old-growth canopy".into(),
                integration_idea: "perched on a root".into(),
                unlock_level: 2,
            },
        );

        db.generated_images.insert(
            1,
            GeneratedImage {
                id: 1,
                image: Some("/media/generated/liora_common.png".into()),
                character_variant: 1,
                rarity: Some(1),
                style: Some(1),
                theme: Some(1),
                created_at: ts(1_762_160_400),
            },
        );

        db.player = Some(Player {
            id: 1,
            level: 3,
            xp: 120,
            gatcha_coins: 450,
        });

        let quests = [
            (
                Quest {
                    id: 1,
                    title: "Daily Grind".into(),
                    description: "Complete three tasks today.".into(),
                    xp_reward: 25,
                    currency_reward: 10,
                    quest_type: QuestType::Daily,
                    condition_key: "task_completed".into(),
                },
                3,
                true,
                false,
            ),
            (
                Quest {
                    id: 2,
                    title: "Collector".into(),
                    description: "Own five different cards.".into(),
                    xp_reward: 100,
                    currency_reward: 50,
                    quest_type: QuestType::Achievement,
                    condition_key: "cards_owned".into(),
                },
                1,
                false,
                false,
            ),
            (
                Quest {
                    id: 3,
                    title: "First Roll".into(),
                    description: "Roll the gatcha once.".into(),
                    xp_reward: 10,
                    currency_reward: 5,
                    quest_type: QuestType::Achievement,
                    condition_key: "gatcha_rolled".into(),
                },
                1,
                true,
                true,
            ),
        ];
        for (quest, progress, completed, claimed) in quests {
            let id = quest.id;
            db.quests.insert(
                id,
                PlayerQuest {
                    id,
                    quest,
                    progress,
                    completed,
                    claimed,
                },
            );
        }

        let starter_card = Card {
            id: 1,
            character_variant: 1,
            character_variant_name: "School Uniform".into(),
            character_name: "Liora Venn".into(),
            series_name: "Starfall Academy".into(),
            rarity: 1,
            rarity_name: "COMMON".into(),
            style: 1,
            style_name: "Ink Sketch".into(),
            theme: 1,
            theme_name: "Neon City".into(),
            image_url: Some("/media/generated/liora_common.png".into()),
            pose: "waving".into(),
            visual_override: String::new(),
            description: "Standard academy look.".into(),
            is_archived: false,
            thumbnail_url: Some("/media/generated/thumbs/liora_common.png".into()),
        };
        db.cards.insert(1, starter_card.clone());
        db.cards.insert(
            2,
            Card {
                id: 2,
                character_variant: 3,
                character_variant_name: "Arcade Champion".into(),
                character_name: "Juno Kest".into(),
                series_name: "Midnight Arcade".into(),
                rarity: 2,
                rarity_name: "RARE".into(),
                style: 2,
                style_name: "Cel Shaded".into(),
                theme: 2,
                theme_name: "Ancient Forest".into(),
                image_url: None,
                pose: String::new(),
                visual_override: String::new(),
                description: "Jacket covered in tournament patches.".into(),
                is_archived: false,
                thumbnail_url: None,
            },
        );

        db.user_cards.insert(
            1,
            UserCard {
                id: 1,
                card: starter_card,
                count: 2,
                obtained_at: ts(1_762_074_000),
            },
        );

        db.task_stats = TaskStats {
            total_completed_all_time: 57,
            rewarded_total: 31,
            rewarded_today: 2,
            recent_activity: vec![
                TaskActivity {
                    id: "tt-9f21".into(),
                    title: "Clear inbox".into(),
                    project: Some("Work".into()),
                    processed_at: ts(1_762_153_200),
                },
                TaskActivity {
                    id: "tt-8c07".into(),
                    title: "Evening run".into(),
                    project: Some("Health".into()),
                    processed_at: ts(1_762_146_000),
                },
            ],
        };

        db
    }
}
