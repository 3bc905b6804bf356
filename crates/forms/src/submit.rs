//! Sequential execution of a submit plan.
//!
//! Every step runs through the query layer's mutation accessors, so each
//! write fires its cache invalidations as it lands. The first failure
//! aborts the remainder; earlier writes are not rolled back (the backend
//! offers no transaction to lean on), so the error reports exactly which
//! steps had already landed.

use gatcha_api::models::{Character, CharacterVariant, VariantReferenceImage};
use gatcha_api::ApiError;
use gatcha_core::DbId;
use gatcha_query::{characters, QueryClient};

use crate::plan::{CharacterStep, ImageStep, NewImage, SubmitPlan, VariantStep};

/// One landed or attempted write, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStep {
    CreateCharacter,
    UpdateCharacter(DbId),
    CreateVariant { name: String },
    UpdateVariant(DbId),
    DeleteVariant(DbId),
    UploadImage { variant: DbId, file_name: String },
    DeleteImage(DbId),
}

/// A submission failure: the step that failed, the underlying API error,
/// and every step that had already landed.
#[derive(Debug, thiserror::Error)]
#[error("character submission failed at {step:?}: {source}")]
pub struct SubmitError {
    pub step: SubmitStep,
    #[source]
    pub source: ApiError,
    pub completed: Vec<SubmitStep>,
}

/// Everything a completed submission wrote.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub character: Character,
    pub created_variants: Vec<CharacterVariant>,
    pub uploaded_images: Vec<VariantReferenceImage>,
    pub deleted_variants: Vec<DbId>,
    pub deleted_images: Vec<DbId>,
}

/// Run `plan` to completion: the character step, then variant steps in form
/// order (a created variant's images upload immediately after it), then the
/// remaining image steps.
pub async fn submit_character(
    client: &QueryClient,
    plan: SubmitPlan,
) -> Result<SubmitOutcome, SubmitError> {
    let mut completed: Vec<SubmitStep> = Vec::new();
    let mut created_variants = Vec::new();
    let mut uploaded_images = Vec::new();
    let mut deleted_variants = Vec::new();
    let mut deleted_images = Vec::new();

    let character = run_character_step(client, plan.character, &mut completed).await?;

    for step in plan.variants {
        match step {
            VariantStep::Create {
                mut payload,
                uploads,
            } => {
                if payload.character.is_none() {
                    payload.character = Some(character.id);
                }
                let step = SubmitStep::CreateVariant {
                    name: payload.name.clone(),
                };
                let variant = characters::create_variant(client, &payload)
                    .await
                    .map_err(|source| fail(step.clone(), source, &completed))?;
                completed.push(step);
                for image in uploads {
                    let uploaded =
                        upload_image(client, variant.id, character.id, image, &mut completed)
                            .await?;
                    uploaded_images.push(uploaded);
                }
                created_variants.push(variant);
            }
            VariantStep::Update { id, payload } => {
                let step = SubmitStep::UpdateVariant(id);
                characters::update_variant(client, id, &payload)
                    .await
                    .map_err(|source| fail(step.clone(), source, &completed))?;
                completed.push(step);
            }
            VariantStep::Delete { id } => {
                let step = SubmitStep::DeleteVariant(id);
                characters::delete_variant(client, id, character.id)
                    .await
                    .map_err(|source| fail(step.clone(), source, &completed))?;
                completed.push(step);
                deleted_variants.push(id);
            }
        }
    }

    for step in plan.images {
        match step {
            ImageStep::Upload { variant, image } => {
                let uploaded =
                    upload_image(client, variant, character.id, image, &mut completed).await?;
                uploaded_images.push(uploaded);
            }
            ImageStep::Delete { id } => {
                let step = SubmitStep::DeleteImage(id);
                characters::delete_variant_image(client, id)
                    .await
                    .map_err(|source| fail(step.clone(), source, &completed))?;
                completed.push(step);
                deleted_images.push(id);
            }
        }
    }

    tracing::info!(
        character_id = character.id,
        variants_created = created_variants.len(),
        images_uploaded = uploaded_images.len(),
        variants_deleted = deleted_variants.len(),
        "Character submission landed"
    );
    Ok(SubmitOutcome {
        character,
        created_variants,
        uploaded_images,
        deleted_variants,
        deleted_images,
    })
}

async fn run_character_step(
    client: &QueryClient,
    step: CharacterStep,
    completed: &mut Vec<SubmitStep>,
) -> Result<Character, SubmitError> {
    match step {
        CharacterStep::Create(payload) => {
            let step = SubmitStep::CreateCharacter;
            let character = characters::create_character(client, &payload)
                .await
                .map_err(|source| fail(step.clone(), source, &*completed))?;
            completed.push(step);
            Ok(character)
        }
        CharacterStep::Update(id, payload) => {
            let step = SubmitStep::UpdateCharacter(id);
            let character = characters::update_character(client, id, &payload)
                .await
                .map_err(|source| fail(step.clone(), source, &*completed))?;
            completed.push(step);
            Ok(character)
        }
    }
}

async fn upload_image(
    client: &QueryClient,
    variant: DbId,
    character_id: DbId,
    image: NewImage,
    completed: &mut Vec<SubmitStep>,
) -> Result<VariantReferenceImage, SubmitError> {
    let step = SubmitStep::UploadImage {
        variant,
        file_name: image.file_name.clone(),
    };
    let uploaded = characters::upload_variant_image(
        client,
        variant,
        character_id,
        image.file_name,
        image.bytes,
    )
    .await
    .map_err(|source| fail(step.clone(), source, &*completed))?;
    completed.push(step);
    Ok(uploaded)
}

fn fail(step: SubmitStep, source: ApiError, completed: &[SubmitStep]) -> SubmitError {
    tracing::warn!(
        ?step,
        landed = completed.len(),
        error = %source,
        "Character submission aborted"
    );
    SubmitError {
        step,
        source,
        completed: completed.to_vec(),
    }
}
