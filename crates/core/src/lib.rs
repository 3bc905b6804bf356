//! Shared foundations for the GatchaLife client crates.
//!
//! Everything here is plain data and pure logic — no IO:
//!
//! - [`types`] — primary-key and timestamp aliases used across the workspace.
//! - [`error`] — client-side error taxonomy ([`CoreError`]).
//! - [`config`] — environment-driven client configuration ([`ApiConfig`]).
//! - [`routes`] — the app's route table as a bidirectional path mapping.
//! - [`progression`] — player leveling math mirrored from the backend.

pub mod config;
pub mod error;
pub mod progression;
pub mod routes;
pub mod types;

pub use config::ApiConfig;
pub use error::CoreError;
pub use routes::Route;
pub use types::{DbId, Timestamp};
