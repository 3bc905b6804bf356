//! HTTP client wrapper for the GatchaLife backend.
//!
//! Holds the pooled [`reqwest::Client`] and the backend origin, and gives the
//! service modules a small set of request/response helpers so status and
//! decode handling stay uniform across every endpoint.

use gatcha_core::ApiConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// HTTP client for a single GatchaLife backend.
///
/// Cheap to clone is not a goal here; share it behind an `Arc` instead. No
/// request timeout is configured — hangs are bounded only by the transport's
/// own defaults, and there are no retries.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the configured backend origin.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`] (useful for
    /// connection pooling across clients in tests).
    pub fn with_client(http: reqwest::Client, config: ApiConfig) -> Self {
        Self {
            http,
            base_url: config.base_url,
        }
    }

    /// Create a client from `GATCHA_API_BASE_URL`, falling back to the local
    /// development backend.
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    /// The backend origin this client talks to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ---- request builders -------------------------------------------------

    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::GET, path)
    }

    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::POST, path)
    }

    pub(crate) fn patch(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::PATCH, path)
    }

    pub(crate) fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::DELETE, path)
    }

    /// All requests carry a fresh `x-request-id` so client and backend logs
    /// can be correlated.
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .header("x-request-id", Uuid::new_v4().to_string())
    }

    // ---- common request shapes --------------------------------------------

    /// `GET {path}` expecting a JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        Self::parse_response(self.get(path).send().await?).await
    }

    /// `GET {path}?{query}` expecting a JSON body.
    pub(crate) async fn get_json_query<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        Self::parse_response(self.get(path).query(query).send().await?).await
    }

    /// `POST {path}` with a JSON body, expecting a JSON body back.
    pub(crate) async fn post_json<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        Self::parse_response(self.post(path).json(body).send().await?).await
    }

    /// `POST {path}` with no body, expecting a JSON body back. Used by the
    /// backend's action endpoints (roll, claim, create-variants, reroll).
    pub(crate) async fn post_action<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        Self::parse_response(self.post(path).send().await?).await
    }

    /// `PATCH {path}` with a JSON body, expecting a JSON body back.
    pub(crate) async fn patch_json<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        Self::parse_response(self.patch(path).json(body).send().await?).await
    }

    /// `POST {path}` with a multipart form, expecting a JSON body back.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ApiResult<T> {
        Self::parse_response(self.post(path).multipart(form).send().await?).await
    }

    /// `PATCH {path}` with a multipart form, expecting a JSON body back.
    pub(crate) async fn patch_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ApiResult<T> {
        Self::parse_response(self.patch(path).multipart(form).send().await?).await
    }

    /// `DELETE {path}`, expecting an empty 2xx answer.
    pub(crate) async fn delete_no_content(&self, path: &str) -> ApiResult<()> {
        Self::check_status(self.delete(path).send().await?).await
    }

    // ---- response handling ------------------------------------------------

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or an [`ApiError::Status`] containing the status
    /// and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    ///
    /// The body is read as text first so undecodable payloads surface as
    /// [`ApiError::Decode`] rather than a transport error.
    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> ApiResult<()> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
