//! Client configuration loaded from environment variables.

/// Where the GatchaLife backend lives.
///
/// Defaults match a local development backend; override via environment
/// variables in other setups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend origin, without a trailing slash (default:
    /// `http://127.0.0.1:8000`).
    pub base_url: String,
}

/// Fallback backend origin when `GATCHA_API_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

impl ApiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default                 |
    /// |-----------------------|-------------------------|
    /// | `GATCHA_API_BASE_URL` | `http://127.0.0.1:8000` |
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("GATCHA_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::new(base_url)
    }

    /// Build a config for an explicit backend origin.
    ///
    /// Trailing slashes are trimmed so joined request paths stay canonical
    /// (`{base_url}/series/`, never `{base_url}//series/`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
