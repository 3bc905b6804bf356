//! Cached accessors for player state, quests, the collection, and rolls.

use serde::de::Error as _;

use gatcha_api::models::{Player, PlayerQuest, RollOutcome, UserCard};
use gatcha_api::services::gamification;
use gatcha_api::{ApiError, ApiResult};
use gatcha_core::DbId;

use crate::client::QueryClient;
use crate::key::QueryKey;
use crate::state::{selected_id, QueryState};

pub fn player_key() -> QueryKey {
    QueryKey::new("player")
}

pub fn quests_key() -> QueryKey {
    QueryKey::new("quests")
}

pub fn collection_key() -> QueryKey {
    QueryKey::new("collection")
}

pub fn card_key(id: DbId) -> QueryKey {
    QueryKey::new("card").with_id(id)
}

// ---- reads ----------------------------------------------------------------

/// The player profile. The backend lists one player per account; an empty
/// roster is a contract violation and surfaces as a decode error.
pub async fn player(client: &QueryClient) -> QueryState<Player> {
    client
        .fetch(player_key(), |api| async move {
            let players = gamification::player_list(&api).await?;
            players
                .into_iter()
                .next()
                .ok_or_else(|| ApiError::Decode(serde_json::Error::custom("player roster is empty")))
        })
        .await
}

pub async fn quest_list(client: &QueryClient) -> QueryState<Vec<PlayerQuest>> {
    client
        .fetch(quests_key(), |api| async move {
            gamification::quest_list(&api).await
        })
        .await
}

pub async fn collection(client: &QueryClient) -> QueryState<Vec<UserCard>> {
    client
        .fetch(collection_key(), |api| async move {
            gamification::collection_list(&api).await
        })
        .await
}

/// One owned card, disabled while no card is selected (`None` or `0`).
pub async fn card_details(client: &QueryClient, id: Option<DbId>) -> QueryState<UserCard> {
    let Some(id) = selected_id(id) else {
        return QueryState::disabled();
    };
    client
        .fetch(card_key(id), |api| async move {
            gamification::collection_retrieve(&api, id).await
        })
        .await
}

// ---- mutations and their invalidation sets --------------------------------

pub fn update_player_invalidates() -> Vec<QueryKey> {
    vec![player_key()]
}

pub fn claim_quest_invalidates() -> Vec<QueryKey> {
    vec![quests_key(), player_key()]
}

pub fn roll_invalidates() -> Vec<QueryKey> {
    vec![collection_key(), player_key()]
}

/// The reroll writes the returned card into `card/{id}` directly; only the
/// collection list goes through invalidate-and-refetch.
pub fn reroll_invalidates() -> Vec<QueryKey> {
    vec![collection_key()]
}

pub async fn update_player(client: &QueryClient, id: DbId, player: &Player) -> ApiResult<Player> {
    client
        .mutate(
            |api| async move { gamification::player_update(&api, id, player).await },
            |_| update_player_invalidates(),
        )
        .await
}

pub async fn claim_quest(
    client: &QueryClient,
    id: DbId,
) -> ApiResult<gatcha_api::models::ClaimOutcome> {
    client
        .mutate(
            |api| async move { gamification::claim_quest(&api, id).await },
            |_| claim_quest_invalidates(),
        )
        .await
}

pub async fn roll_gatcha(client: &QueryClient) -> ApiResult<RollOutcome> {
    client
        .mutate(
            |api| async move { gamification::roll(&api).await },
            |_| roll_invalidates(),
        )
        .await
}

/// Regenerate a card's image. The response is the updated card, so it lands
/// in the `card/{id}` slot without a refetch.
pub async fn reroll_card_image(client: &QueryClient, id: DbId) -> ApiResult<UserCard> {
    let card = gamification::reroll_image(client.api(), id).await?;
    client.set_query_data(card_key(id), card.clone()).await;
    for key in reroll_invalidates() {
        client.invalidate(&key).await;
    }
    Ok(card)
}
