//! Error replies shaped like the real backend's.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Mock-side request failures.
///
/// Bodies mirror the backend: missing rows answer `{"detail": "Not found."}`,
/// rejected actions answer `{"error": "..."}`.
#[derive(Debug)]
pub enum MockError {
    NotFound,
    BadRequest(String),
}

pub type MockResult<T> = Result<T, MockError>;

impl IntoResponse for MockError {
    fn into_response(self) -> Response {
        match self {
            MockError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": "Not found." })),
            )
                .into_response(),
            MockError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
        }
    }
}
