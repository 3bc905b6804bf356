//! Client-side error taxonomy.
//!
//! Transport and HTTP failures live in the API crate; [`CoreError`] covers
//! everything the client can get wrong before a request is made.

/// Errors produced by the client itself, before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// User-supplied input that cannot be coerced into a valid payload.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A configuration value that cannot be used as-is.
    #[error("Configuration error: {0}")]
    Config(String),
}
