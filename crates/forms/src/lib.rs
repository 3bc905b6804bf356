//! Editor form state and submission orchestration for GatchaLife.
//!
//! The editing flow is load → edit → plan → submit:
//! - [`CharacterForm::from_character`] decomposes a fetched character into
//!   flat editable state (series as a raw selection string, images split
//!   into existing URLs and locally picked bytes).
//! - [`SubmitPlan::build`] diffs the edited form against the original into
//!   an ordered list of write steps. Pure; all coercion failures surface
//!   here, before any request.
//! - [`submit_character`] walks the plan sequentially through the query
//!   layer, so each write invalidates its cache entries as it lands. There
//!   is no rollback; a failure reports the failed step and everything that
//!   already landed.

pub mod character;
pub mod plan;
pub mod series;
pub mod submit;

pub use character::{CharacterEditor, CharacterForm, ImageSlot, VariantForm};
pub use plan::{CharacterStep, ImageStep, NewImage, SubmitPlan, VariantStep};
pub use series::SeriesForm;
pub use submit::{submit_character, SubmitError, SubmitOutcome, SubmitStep};
