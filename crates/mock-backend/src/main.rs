//! `gatcha-mock-backend` -- standalone mock GatchaLife server.
//!
//! Binds the seeded in-memory fixture and serves the full backend surface,
//! for manual poking with `curl` or for pointing a client at a stable local
//! endpoint (`GATCHA_API_BASE_URL=http://127.0.0.1:8000`).
//!
//! # Environment variables
//!
//! | Variable | Required | Default | Description                 |
//! |----------|----------|---------|-----------------------------|
//! | `PORT`   | no       | `8000`  | TCP port to listen on       |
//! | `HOST`   | no       | `127.0.0.1` | Address to bind         |

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gatcha_mock_backend::MockDb;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gatcha_mock_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(8000);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    gatcha_mock_backend::serve(listener, MockDb::seeded().shared()).await
}
