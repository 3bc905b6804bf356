//! Editable state for the character editor.
//!
//! The form mirrors what the editor binds to, not the wire format: the
//! series selection is a raw string until submit, variant descriptions edit
//! under a "visual description" label, and each image slot is either an
//! already-uploaded URL or locally picked bytes.

use gatcha_api::models::Character;
use gatcha_core::DbId;

/// Fixed editor chrome. The heading stays the same in create and edit mode.
pub struct CharacterEditor;

impl CharacterEditor {
    pub const TITLE: &'static str = "Character Forge";
}

/// One slot in a variant's image gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSlot {
    /// Already uploaded; removing it from the form schedules a delete.
    Existing { id: DbId, url: String },
    /// Picked locally; submission uploads it via multipart.
    New { file_name: String, bytes: Vec<u8> },
}

/// Editable state for one variant row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantForm {
    /// `None` until the variant exists server-side.
    pub id: Option<DbId>,
    pub name: String,
    /// Edits the variant's `description` on the wire.
    pub visual_description: String,
    pub images: Vec<ImageSlot>,
}

/// Editable state for the whole editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterForm {
    pub name: String,
    /// Raw picker selection; empty means nothing selected. Coerced to a
    /// numeric id when the submit plan is built.
    pub series: String,
    pub description: String,
    pub variants: Vec<VariantForm>,
}

impl CharacterForm {
    /// Blank state for the create flow.
    pub fn new_character() -> Self {
        Self::default()
    }

    /// Decompose a fetched character into editable state.
    pub fn from_character(character: &Character) -> Self {
        Self {
            name: character.name.clone(),
            series: character.series.to_string(),
            description: character.description.clone(),
            variants: character
                .variants
                .iter()
                .map(|variant| VariantForm {
                    id: Some(variant.id),
                    name: variant.name.clone(),
                    visual_description: variant.description.clone(),
                    images: variant
                        .images
                        .iter()
                        .map(|image| ImageSlot::Existing {
                            id: image.id,
                            url: image.image.clone(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use gatcha_api::models::{CharacterVariant, VariantReferenceImage, VariantType};

    /// An edit-mode fixture with one richly populated variant and one bare
    /// one. Shared with the planner tests.
    pub(crate) fn fixture_character() -> Character {
        Character {
            id: 7,
            name: "Liora".into(),
            description: "Starfall's resident prodigy.".into(),
            images: vec![],
            variants: vec![
                CharacterVariant {
                    id: 11,
                    name: "Nebula Uniform".into(),
                    description: "School uniform under aurora light.".into(),
                    images: vec![
                        VariantReferenceImage {
                            id: 101,
                            image: "/media/ref_images/liora_front.png".into(),
                            variant: 11,
                        },
                        VariantReferenceImage {
                            id: 102,
                            image: "/media/ref_images/liora_side.png".into(),
                            variant: 11,
                        },
                    ],
                    character: 7,
                    theme: None,
                    visual_override: String::new(),
                    variant_type: VariantType::Canon,
                    specific_reference_image: None,
                },
                CharacterVariant {
                    id: 12,
                    name: "Festival Yukata".into(),
                    description: String::new(),
                    images: vec![],
                    character: 7,
                    theme: Some(2),
                    visual_override: "fireworks backdrop".into(),
                    variant_type: VariantType::Skin,
                    specific_reference_image: None,
                },
            ],
            series: 1,
            unlock_level: 2,
            identity_face_image: Some("/media/character_faces/liora.png".into()),
            body_type_description: "slender".into(),
            height_perception: "SHORT".into(),
            hair_prompt: "silver twin-tails".into(),
            eye_prompt: "violet".into(),
            visual_traits: vec!["star hairpin".into()],
            lore_tags: vec!["prodigy".into()],
            affinity_environments: vec!["observatory".into()],
            clashing_environments: vec![],
            negative_traits_suggestion: String::new(),
            legacy: false,
        }
    }

    #[test]
    fn editor_heading_is_fixed() {
        assert_eq!(CharacterEditor::TITLE, "Character Forge");
    }

    #[test]
    fn loading_decomposes_variants_and_images() {
        let form = CharacterForm::from_character(&fixture_character());

        assert_eq!(form.name, "Liora");
        assert_eq!(form.series, "1");
        assert_eq!(form.variants.len(), 2);

        let uniform = &form.variants[0];
        assert_eq!(uniform.id, Some(11));
        assert_eq!(uniform.visual_description, "School uniform under aurora light.");
        assert_eq!(
            uniform.images[0],
            ImageSlot::Existing {
                id: 101,
                url: "/media/ref_images/liora_front.png".into()
            }
        );

        let yukata = &form.variants[1];
        assert_eq!(yukata.id, Some(12));
        assert!(yukata.images.is_empty());
    }

    #[test]
    fn a_new_form_starts_empty() {
        let form = CharacterForm::new_character();
        assert!(form.name.is_empty());
        assert!(form.series.is_empty());
        assert!(form.variants.is_empty());
    }
}
