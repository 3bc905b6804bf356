//! Shared helpers for client-against-mock integration tests.
//!
//! Each test spawns its own mock backend on an ephemeral port so tests stay
//! independent and can run in parallel.

#![allow(dead_code)]

use gatcha_api::ApiClient;
use gatcha_core::ApiConfig;
use gatcha_mock_backend::{serve, MockDb, SharedDb};

/// Spawn a mock backend over the standard seeded fixture and return a
/// client pointed at it.
pub async fn spawn_backend() -> ApiClient {
    spawn_backend_with(MockDb::seeded().shared()).await
}

/// Spawn a mock backend over caller-prepared state.
pub async fn spawn_backend_with(db: SharedDb) -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener addr");
    tokio::spawn(serve(listener, db));
    ApiClient::new(ApiConfig::new(format!("http://{addr}")))
}
