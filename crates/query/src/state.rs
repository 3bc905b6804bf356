//! Query result states.

use std::sync::Arc;

use gatcha_api::ApiError;
use gatcha_core::DbId;

/// A detail id counts as selected only when present and non-zero; zero is
/// the "nothing picked yet" placeholder ids arrive as from selection state.
pub(crate) fn selected_id(id: Option<DbId>) -> Option<DbId> {
    id.filter(|id| *id != 0)
}

/// What a view layer gets back from a query.
///
/// Data is handed out as `Arc<T>` straight from the cache, so holding a
/// state never clones the payload. A failed refetch can carry both the
/// error and the stale data that was cached before it, letting callers
/// keep showing something while surfacing the failure.
#[derive(Debug)]
pub struct QueryState<T> {
    pub data: Option<Arc<T>>,
    pub error: Option<ApiError>,
    pub is_loading: bool,
    /// `false` for queries that were never allowed to run (e.g. a detail
    /// read with no id selected yet).
    pub enabled: bool,
}

impl<T> QueryState<T> {
    /// A query that was not allowed to run; no request was made.
    pub fn disabled() -> Self {
        Self {
            data: None,
            error: None,
            is_loading: false,
            enabled: false,
        }
    }

    /// The in-flight placeholder, for callers that hold a state across an
    /// await.
    pub fn loading() -> Self {
        Self {
            data: None,
            error: None,
            is_loading: true,
            enabled: true,
        }
    }

    pub fn success(data: Arc<T>) -> Self {
        Self {
            data: Some(data),
            error: None,
            is_loading: false,
            enabled: true,
        }
    }

    /// A failed fetch, optionally still carrying stale cached data.
    pub fn failed(error: ApiError, stale: Option<Arc<T>>) -> Self {
        Self {
            data: stale,
            error: Some(error),
            is_loading: false,
            enabled: true,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.data.is_some()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn is_disabled(&self) -> bool {
        !self.enabled
    }
}
