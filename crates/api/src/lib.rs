//! Typed bindings for the GatchaLife REST backend.
//!
//! One module per backend resource, all sharing a single [`ApiClient`]:
//!
//! - [`client`] — the HTTP client wrapper (base URL, request ids, response
//!   handling).
//! - [`error`] — the transport/status/decode error taxonomy ([`ApiError`]).
//! - [`models`] — wire-format records exactly as the backend serializes them.
//! - [`services`] — request functions grouped by resource.
//!
//! This crate performs no caching and no retries; the query crate layers
//! caching on top.

pub mod client;
pub mod error;
pub mod models;
pub mod services;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
