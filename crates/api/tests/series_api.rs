//! Integration tests for the series endpoints.

mod common;

use assert_matches::assert_matches;
use gatcha_api::models::SeriesPayload;
use gatcha_api::services::series;
use gatcha_api::ApiError;

#[tokio::test]
async fn list_returns_seeded_series() {
    let api = common::spawn_backend().await;

    let all = series::list(&api).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Starfall Academy");
}

#[tokio::test]
async fn create_retrieve_update_delete_round_trip() {
    let api = common::spawn_backend().await;

    let created = series::create(
        &api,
        &SeriesPayload {
            name: "Iron Chorus".into(),
            description: "Mecha opera ensemble.".into(),
            unlock_level: 5,
        },
    )
    .await
    .unwrap();
    assert_eq!(created.id, 3);

    let fetched = series::retrieve(&api, created.id).await.unwrap();
    assert_eq!(fetched, created);

    let updated = series::update(
        &api,
        created.id,
        &SeriesPayload {
            name: "Iron Chorus".into(),
            description: "Mecha opera ensemble, rebooted.".into(),
            unlock_level: 4,
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.unlock_level, 4);

    series::delete(&api, created.id).await.unwrap();
    let missing = series::retrieve(&api, created.id).await.unwrap_err();
    assert_eq!(missing.status(), Some(404));
}

#[tokio::test]
async fn missing_series_surfaces_status_error_with_body() {
    let api = common::spawn_backend().await;

    let err = series::retrieve(&api, 999).await.unwrap_err();
    assert_matches!(err, ApiError::Status { status: 404, ref body } => {
        assert!(body.contains("Not found."), "unexpected body: {body}");
    });
}
