//! Failure-path coverage for the HTTP client itself.
//!
//! The mock backend is too well behaved to produce transport failures or
//! malformed bodies, so these tests answer with canned byte-for-byte HTTP
//! responses from a raw TCP listener.

use assert_matches::assert_matches;
use gatcha_api::services::series;
use gatcha_api::{ApiClient, ApiError};
use gatcha_core::ApiConfig;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Serve the same canned response to every connection.
async fn canned_server(response: &'static str) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener addr");
    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            let mut head = [0u8; 1024];
            let _ = stream.read(&mut head).await;
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });
    addr
}

fn client_for(addr: SocketAddr) -> ApiClient {
    ApiClient::new(ApiConfig::new(format!("http://{addr}")))
}

#[tokio::test]
async fn unreachable_backend_surfaces_as_request_error() {
    // Bind then drop to get a port with nothing listening on it.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener addr");
    drop(listener);

    let error = series::list(&client_for(addr)).await.unwrap_err();
    assert_matches!(error, ApiError::Request(_));
    assert_eq!(error.status(), None);
}

#[tokio::test]
async fn error_statuses_carry_the_raw_body() {
    let addr = canned_server(
        "HTTP/1.1 500 Internal Server Error\r\n\
         content-type: text/plain\r\n\
         content-length: 8\r\n\
         connection: close\r\n\
         \r\n\
         db ached",
    )
    .await;

    let error = series::list(&client_for(addr)).await.unwrap_err();
    assert_matches!(error, ApiError::Status { status: 500, ref body } if body == "db ached");
    assert_eq!(error.status(), Some(500));
    assert_eq!(
        error.to_string(),
        "GatchaLife API error (500): db ached"
    );
}

#[tokio::test]
async fn undecodable_success_bodies_surface_as_decode_errors() {
    let addr = canned_server(
        "HTTP/1.1 200 OK\r\n\
         content-type: application/json\r\n\
         content-length: 8\r\n\
         connection: close\r\n\
         \r\n\
         not json",
    )
    .await;

    let error = series::list(&client_for(addr)).await.unwrap_err();
    assert_matches!(error, ApiError::Decode(_));
}

#[tokio::test]
async fn shape_mismatches_surface_as_decode_errors() {
    // Valid JSON, wrong shape: an object where a list is expected.
    let addr = canned_server(
        "HTTP/1.1 200 OK\r\n\
         content-type: application/json\r\n\
         content-length: 13\r\n\
         connection: close\r\n\
         \r\n\
         {\"series\":[]}",
    )
    .await;

    let error = series::list(&client_for(addr)).await.unwrap_err();
    assert_matches!(error, ApiError::Decode(_));
}
