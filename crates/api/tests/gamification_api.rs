//! Integration tests for the player, quest, collection, and roll endpoints.

mod common;

use assert_matches::assert_matches;
use gatcha_api::services::gamification;
use gatcha_api::ApiError;
use gatcha_mock_backend::MockDb;

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

#[tokio::test]
async fn player_list_holds_the_single_profile() {
    let api = common::spawn_backend().await;

    let players = gamification::player_list(&api).await.unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].level, 3);
    assert_eq!(players[0].gatcha_coins, 450);
}

#[tokio::test]
async fn player_update_echoes_server_owned_state() {
    let api = common::spawn_backend().await;

    let mut player = gamification::player_retrieve(&api, 1).await.unwrap();
    player.gatcha_coins = 999_999;

    // Progression fields are read-only; the answer is the stored state.
    let echoed = gamification::player_update(&api, 1, &player).await.unwrap();
    assert_eq!(echoed.gatcha_coins, 450);
}

// ---------------------------------------------------------------------------
// Quests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn claim_pays_out_once() {
    let api = common::spawn_backend().await;

    let outcome = gamification::claim_quest(&api, 1).await.unwrap();
    assert_eq!(outcome.status, "claimed");

    let player = gamification::player_retrieve(&api, 1).await.unwrap();
    assert_eq!(player.xp, 145);
    assert_eq!(player.gatcha_coins, 460);

    let err = gamification::claim_quest(&api, 1).await.unwrap_err();
    assert_matches!(err, ApiError::Status { status: 400, ref body } => {
        assert!(body.contains("Cannot claim reward"), "unexpected body: {body}");
    });
}

#[tokio::test]
async fn incomplete_quests_cannot_be_claimed() {
    let api = common::spawn_backend().await;

    let quests = gamification::quest_list(&api).await.unwrap();
    let incomplete = quests.iter().find(|q| !q.completed).unwrap();

    let err = gamification::claim_quest(&api, incomplete.id)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
}

// ---------------------------------------------------------------------------
// Rolls
// ---------------------------------------------------------------------------

#[tokio::test]
async fn roll_spends_coins_and_drops_a_card() {
    let api = common::spawn_backend().await;

    let outcome = gamification::roll(&api).await.unwrap();
    assert!(outcome.is_new);
    assert_eq!(outcome.remaining_coins, 350);
    assert_eq!(outcome.drop.count, 1);

    let collection = gamification::collection_list(&api).await.unwrap();
    assert_eq!(collection.len(), 2);
}

#[tokio::test]
async fn duplicate_rolls_bump_the_copy_count() {
    let api = common::spawn_backend().await;

    gamification::roll(&api).await.unwrap();
    let second = gamification::roll(&api).await.unwrap();
    assert!(!second.is_new);
    assert_eq!(second.drop.count, 3);
}

#[tokio::test]
async fn rolling_without_coins_is_rejected() {
    let mut db = MockDb::seeded();
    if let Some(player) = db.player.as_mut() {
        player.gatcha_coins = 40;
    }
    let api = common::spawn_backend_with(db.shared()).await;

    let err = gamification::roll(&api).await.unwrap_err();
    assert_matches!(err, ApiError::Status { status: 400, ref body } => {
        assert!(body.contains("Not enough coins"), "unexpected body: {body}");
    });
}

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reroll_returns_the_card_with_a_fresh_image() {
    let api = common::spawn_backend().await;

    let before = gamification::collection_retrieve(&api, 1).await.unwrap();
    let rerolled = gamification::reroll_image(&api, 1).await.unwrap();
    assert_eq!(rerolled.id, before.id);
    assert_ne!(rerolled.card.image_url, before.card.image_url);
}
