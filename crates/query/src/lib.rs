//! Keyed query cache over the GatchaLife REST API.
//!
//! The building blocks:
//!
//! - [`QueryKey`] — ordered segment key naming one cached read.
//! - [`QueryCache`] — type-erased value store with staleness tracking and a
//!   broadcast [`QueryEvent`] channel.
//! - [`QueryCoalescer`] — per-key guard so concurrent reads share one
//!   request.
//! - [`QueryClient`] — ties the three to an
//!   [`ApiClient`](gatcha_api::ApiClient); reads via
//!   [`fetch`](QueryClient::fetch), writes via
//!   [`mutate`](QueryClient::mutate).
//! - [`QueryState`] — what a read hands back: shared data, error, loading
//!   and enablement flags.
//!
//! The per-resource modules ([`series`], [`characters`], [`catalog`],
//! [`gamification`], [`ticktick`]) give every backend operation a cached
//! accessor with a fixed key, and every write a declared invalidation set.

pub mod cache;
pub mod characters;
pub mod catalog;
pub mod client;
pub mod coalesce;
pub mod gamification;
pub mod key;
pub mod series;
pub mod state;
pub mod ticktick;

pub use cache::{QueryCache, QueryEvent};
pub use client::QueryClient;
pub use coalesce::QueryCoalescer;
pub use key::{QueryKey, Segment};
pub use state::QueryState;
