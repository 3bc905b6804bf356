//! Errors from the GatchaLife REST API layer.

/// Errors surfaced by every request function in this crate.
///
/// The three classes a caller can meaningfully distinguish: the request
/// never completed, the backend answered with a failure status, or the
/// body did not match the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("GatchaLife API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response body could not be decoded into the expected type.
    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// The HTTP status for [`ApiError::Status`] responses, if that is what
    /// this error is.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience alias for API call results.
pub type ApiResult<T> = Result<T, ApiError>;
