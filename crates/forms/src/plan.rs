//! Pure submission planning.
//!
//! [`SubmitPlan::build`] diffs an edited [`CharacterForm`] against the
//! fetched original into an ordered list of write steps. Nothing here
//! performs IO; execution lives in [`crate::submit`].

use gatcha_api::models::{Character, CharacterPayload, VariantPayload, VariantReferenceImage};
use gatcha_core::{CoreError, DbId};

use crate::character::{CharacterForm, ImageSlot, VariantForm};

/// Unlock level applied to newly created characters; the editor does not
/// expose the field.
const DEFAULT_UNLOCK_LEVEL: i64 = 1;

/// The create-or-update step for the character record itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterStep {
    Create(CharacterPayload),
    Update(DbId, CharacterPayload),
}

/// A locally picked image awaiting upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// One variant write, in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantStep {
    /// `payload.character` stays `None` in create-character mode; execution
    /// fills it in once the character exists. `uploads` land immediately
    /// after the variant does, using its fresh id.
    Create {
        payload: VariantPayload,
        uploads: Vec<NewImage>,
    },
    Update { id: DbId, payload: VariantPayload },
    Delete { id: DbId },
}

/// Image work for variants that already exist. Images of deleted variants
/// go away with the backend cascade and need no steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageStep {
    Upload { variant: DbId, image: NewImage },
    Delete { id: DbId },
}

/// Ordered write steps for one editor submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitPlan {
    pub character: CharacterStep,
    pub variants: Vec<VariantStep>,
    pub images: Vec<ImageStep>,
}

impl SubmitPlan {
    /// Diff `form` against `original` (`None` for the create flow).
    ///
    /// Fails only on client-side coercion: a non-empty series selection
    /// that is not a number.
    pub fn build(
        form: &CharacterForm,
        original: Option<&Character>,
    ) -> Result<SubmitPlan, CoreError> {
        let payload = CharacterPayload {
            name: form.name.clone(),
            series: parse_series(&form.series)?,
            description: form.description.clone(),
            unlock_level: original.map_or(DEFAULT_UNLOCK_LEVEL, |original| original.unlock_level),
        };
        let character = match original {
            Some(original) => CharacterStep::Update(original.id, payload),
            None => CharacterStep::Create(payload),
        };

        let mut variants = Vec::new();
        let mut images = Vec::new();
        for variant in &form.variants {
            match variant.id {
                Some(id) => {
                    variants.push(VariantStep::Update {
                        id,
                        payload: variant_payload(variant, None),
                    });
                    plan_images(&mut images, id, variant, original_images(original, id));
                }
                None => {
                    variants.push(VariantStep::Create {
                        payload: variant_payload(variant, original.map(|original| original.id)),
                        uploads: new_images(variant),
                    });
                }
            }
        }

        if let Some(original) = original {
            for dropped in &original.variants {
                let kept = form
                    .variants
                    .iter()
                    .any(|variant| variant.id == Some(dropped.id));
                if !kept {
                    variants.push(VariantStep::Delete { id: dropped.id });
                }
            }
        }

        Ok(SubmitPlan {
            character,
            variants,
            images,
        })
    }
}

/// Coerce the raw series selection: empty means no selection, anything else
/// must parse as an id.
fn parse_series(raw: &str) -> Result<Option<DbId>, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<DbId>().map(Some).map_err(|_| {
        CoreError::Validation(format!("series selection is not a number: {raw:?}"))
    })
}

fn variant_payload(variant: &VariantForm, character: Option<DbId>) -> VariantPayload {
    VariantPayload {
        name: variant.name.clone(),
        description: variant.visual_description.clone(),
        character,
    }
}

fn new_images(variant: &VariantForm) -> Vec<NewImage> {
    variant
        .images
        .iter()
        .filter_map(|slot| match slot {
            ImageSlot::New { file_name, bytes } => Some(NewImage {
                file_name: file_name.clone(),
                bytes: bytes.clone(),
            }),
            ImageSlot::Existing { .. } => None,
        })
        .collect()
}

/// Uploads for the variant's `New` slots, then deletes for original images
/// no longer present in the form.
fn plan_images(
    images: &mut Vec<ImageStep>,
    variant_id: DbId,
    variant: &VariantForm,
    originals: &[VariantReferenceImage],
) {
    for image in new_images(variant) {
        images.push(ImageStep::Upload {
            variant: variant_id,
            image,
        });
    }
    for original in originals {
        let kept = variant.images.iter().any(|slot| {
            matches!(slot, ImageSlot::Existing { id, .. } if *id == original.id)
        });
        if !kept {
            images.push(ImageStep::Delete { id: original.id });
        }
    }
}

fn original_images<'a>(
    original: Option<&'a Character>,
    variant_id: DbId,
) -> &'a [VariantReferenceImage] {
    original
        .and_then(|original| {
            original
                .variants
                .iter()
                .find(|variant| variant.id == variant_id)
        })
        .map(|variant| variant.images.as_slice())
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::tests::fixture_character;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn creation_coerces_series_and_defaults_unlock_level() {
        let form = CharacterForm {
            name: "Test Character".into(),
            series: "1".into(),
            description: "Test Description".into(),
            variants: vec![],
        };

        let plan = SubmitPlan::build(&form, None).unwrap();
        let CharacterStep::Create(payload) = plan.character else {
            panic!("expected a create step");
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "name": "Test Character",
                "series": 1,
                "description": "Test Description",
                "unlock_level": 1,
            })
        );
        assert!(plan.variants.is_empty());
        assert!(plan.images.is_empty());
    }

    #[test]
    fn empty_series_selection_stays_unset() {
        let form = CharacterForm {
            name: "Drifter".into(),
            ..CharacterForm::new_character()
        };

        let plan = SubmitPlan::build(&form, None).unwrap();
        assert_matches!(plan.character, CharacterStep::Create(payload) => {
            assert_eq!(payload.series, None);
        });
    }

    #[test]
    fn non_numeric_series_selection_is_rejected() {
        let form = CharacterForm {
            name: "Drifter".into(),
            series: "first".into(),
            ..CharacterForm::new_character()
        };

        let error = SubmitPlan::build(&form, None).unwrap_err();
        assert_matches!(error, CoreError::Validation(message) => {
            assert!(message.contains("first"));
        });
    }

    #[test]
    fn unchanged_form_round_trips_the_original_values() {
        let original = fixture_character();
        let form = CharacterForm::from_character(&original);

        let plan = SubmitPlan::build(&form, Some(&original)).unwrap();

        assert_eq!(
            plan.character,
            CharacterStep::Update(
                7,
                CharacterPayload {
                    name: "Liora".into(),
                    series: Some(1),
                    description: "Starfall's resident prodigy.".into(),
                    unlock_level: 2,
                }
            )
        );
        assert_eq!(plan.variants.len(), 2);
        assert_matches!(&plan.variants[0], VariantStep::Update { id: 11, payload } => {
            assert_eq!(payload.name, "Nebula Uniform");
            assert_eq!(payload.description, "School uniform under aurora light.");
            assert_eq!(payload.character, None);
        });
        assert_matches!(&plan.variants[1], VariantStep::Update { id: 12, .. });
        assert!(plan.images.is_empty());
    }

    #[test]
    fn dropped_variants_schedule_deletes_after_the_kept_ones() {
        let original = fixture_character();
        let mut form = CharacterForm::from_character(&original);
        form.variants.remove(1);
        form.variants.push(VariantForm {
            id: None,
            name: "Winter Coat".into(),
            visual_description: "heavy scarf".into(),
            images: vec![ImageSlot::New {
                file_name: "coat.png".into(),
                bytes: vec![1, 2, 3],
            }],
        });

        let plan = SubmitPlan::build(&form, Some(&original)).unwrap();

        assert_eq!(plan.variants.len(), 3);
        assert_matches!(&plan.variants[0], VariantStep::Update { id: 11, .. });
        assert_matches!(&plan.variants[1], VariantStep::Create { payload, uploads } => {
            // Editing an existing character, so the owner id is known at
            // plan time.
            assert_eq!(payload.character, Some(7));
            assert_eq!(uploads.len(), 1);
            assert_eq!(uploads[0].file_name, "coat.png");
        });
        assert_matches!(&plan.variants[2], VariantStep::Delete { id: 12 });
    }

    #[test]
    fn image_edits_diff_into_uploads_and_deletes() {
        let original = fixture_character();
        let mut form = CharacterForm::from_character(&original);
        // Drop the second gallery image, add a new one.
        form.variants[0].images.remove(1);
        form.variants[0].images.push(ImageSlot::New {
            file_name: "liora_back.png".into(),
            bytes: vec![9, 9],
        });

        let plan = SubmitPlan::build(&form, Some(&original)).unwrap();

        assert_eq!(plan.images.len(), 2);
        assert_matches!(&plan.images[0], ImageStep::Upload { variant: 11, image } => {
            assert_eq!(image.file_name, "liora_back.png");
        });
        assert_eq!(plan.images[1], ImageStep::Delete { id: 102 });
    }

    #[test]
    fn create_mode_variants_leave_the_owner_unset() {
        let form = CharacterForm {
            name: "Drifter".into(),
            series: "2".into(),
            description: String::new(),
            variants: vec![VariantForm {
                id: None,
                name: "Default".into(),
                visual_description: String::new(),
                images: vec![],
            }],
        };

        let plan = SubmitPlan::build(&form, None).unwrap();
        assert_matches!(&plan.variants[0], VariantStep::Create { payload, .. } => {
            assert_eq!(payload.character, None);
        });
    }
}
