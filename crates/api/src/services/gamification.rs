//! `/gamification/` endpoints: player, quests, collection, and rolls.

use gatcha_core::DbId;

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{ClaimOutcome, Player, PlayerQuest, RollOutcome, UserCard};

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// GET /gamification/player/
///
/// The backend provisions one player per account, so the list usually holds
/// a single entry.
pub async fn player_list(api: &ApiClient) -> ApiResult<Vec<Player>> {
    api.get_json("/gamification/player/").await
}

/// GET /gamification/player/{id}/
pub async fn player_retrieve(api: &ApiClient, id: DbId) -> ApiResult<Player> {
    api.get_json(&format!("/gamification/player/{id}/")).await
}

/// PATCH /gamification/player/{id}/
///
/// Level, XP, and coins are read-only server-side; the backend echoes the
/// authoritative state back.
pub async fn player_update(api: &ApiClient, id: DbId, player: &Player) -> ApiResult<Player> {
    let player: Player = api
        .patch_json(&format!("/gamification/player/{id}/"), player)
        .await?;
    tracing::info!(player_id = player.id, "Player updated");
    Ok(player)
}

// ---------------------------------------------------------------------------
// Quests
// ---------------------------------------------------------------------------

/// GET /gamification/quests/
pub async fn quest_list(api: &ApiClient) -> ApiResult<Vec<PlayerQuest>> {
    api.get_json("/gamification/quests/").await
}

/// GET /gamification/quests/{id}/
pub async fn quest_retrieve(api: &ApiClient, id: DbId) -> ApiResult<PlayerQuest> {
    api.get_json(&format!("/gamification/quests/{id}/")).await
}

/// POST /gamification/quests/{id}/claim/
///
/// Claims the reward for a completed quest. The backend answers 400 with
/// `{"error": "Cannot claim reward"}` when the quest is incomplete or
/// already claimed.
pub async fn claim_quest(api: &ApiClient, id: DbId) -> ApiResult<ClaimOutcome> {
    let outcome: ClaimOutcome = api
        .post_action(&format!("/gamification/quests/{id}/claim/"))
        .await?;
    tracing::info!(quest_id = id, status = %outcome.status, "Quest claimed");
    Ok(outcome)
}

// ---------------------------------------------------------------------------
// Collection + rolls
// ---------------------------------------------------------------------------

/// GET /gamification/collection/
pub async fn collection_list(api: &ApiClient) -> ApiResult<Vec<UserCard>> {
    api.get_json("/gamification/collection/").await
}

/// GET /gamification/collection/{id}/
pub async fn collection_retrieve(api: &ApiClient, id: DbId) -> ApiResult<UserCard> {
    api.get_json(&format!("/gamification/collection/{id}/"))
        .await
}

/// POST /gamification/collection/{id}/reroll_image/
///
/// Regenerates the card's image and returns the updated card.
pub async fn reroll_image(api: &ApiClient, id: DbId) -> ApiResult<UserCard> {
    let card: UserCard = api
        .post_action(&format!("/gamification/collection/{id}/reroll_image/"))
        .await?;
    tracing::info!(user_card_id = id, "Card image rerolled");
    Ok(card)
}

/// POST /gamification/gatcha/roll/
///
/// Spends coins for one roll. The backend answers 400 with
/// `{"error": "Not enough coins"}` when the player cannot afford it.
pub async fn roll(api: &ApiClient) -> ApiResult<RollOutcome> {
    let outcome: RollOutcome = api.post_action("/gamification/gatcha/roll/").await?;
    tracing::info!(
        user_card_id = outcome.drop.id,
        is_new = outcome.is_new,
        remaining_coins = outcome.remaining_coins,
        "Gatcha rolled"
    );
    Ok(outcome)
}
