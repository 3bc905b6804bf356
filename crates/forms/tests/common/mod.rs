//! Shared helpers for submission tests against the mock backend.

#![allow(dead_code)]

use gatcha_api::ApiClient;
use gatcha_core::ApiConfig;
use gatcha_mock_backend::{serve, MockDb, SharedDb};
use gatcha_query::QueryClient;

/// Spawn a seeded mock backend and return a query client pointed at it,
/// plus the backend's state handle for direct verification.
pub async fn spawn_client() -> (QueryClient, SharedDb) {
    let db = MockDb::seeded().shared();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener addr");
    tokio::spawn(serve(listener, db.clone()));

    let api = ApiClient::new(ApiConfig::new(format!("http://{addr}")));
    (QueryClient::new(api), db)
}
