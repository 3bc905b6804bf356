//! Player, quest, collection, and gatcha-roll handlers.

use axum::extract::{Path, State};
use axum::Json;

use gatcha_api::models::{ClaimOutcome, Player, PlayerQuest, RollOutcome, UserCard};
use gatcha_core::{progression, DbId};

use crate::error::{MockError, MockResult};
use crate::state::{next_key, SharedDb};

/// Coin price of one gatcha roll.
const ROLL_COST: i64 = 100;

/// Credit XP and coins, applying level-ups with XP carry-over. Returns the
/// number of levels gained.
pub(crate) fn apply_progression(player: &mut Player, xp: i64, coins: i64) -> i64 {
    player.xp += xp;
    player.gatcha_coins += coins;
    let mut levels_gained = 0;
    while player.xp >= progression::xp_to_next(player.level) {
        player.xp -= progression::xp_to_next(player.level);
        player.level += 1;
        player.gatcha_coins += progression::LEVEL_UP_COIN_BONUS;
        levels_gained += 1;
    }
    levels_gained
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

pub async fn list_players(State(db): State<SharedDb>) -> Json<Vec<Player>> {
    let db = db.read().await;
    Json(db.player.clone().into_iter().collect())
}

pub async fn get_player(
    State(db): State<SharedDb>,
    Path(id): Path<DbId>,
) -> MockResult<Json<Player>> {
    let db = db.read().await;
    db.player
        .clone()
        .filter(|player| player.id == id)
        .map(Json)
        .ok_or(MockError::NotFound)
}

/// Progression fields are server-owned, so the payload is discarded and the
/// authoritative state echoed back.
pub async fn update_player(
    State(db): State<SharedDb>,
    Path(id): Path<DbId>,
    Json(_payload): Json<serde_json::Value>,
) -> MockResult<Json<Player>> {
    let db = db.read().await;
    db.player
        .clone()
        .filter(|player| player.id == id)
        .map(Json)
        .ok_or(MockError::NotFound)
}

// ---------------------------------------------------------------------------
// Quests
// ---------------------------------------------------------------------------

pub async fn list_quests(State(db): State<SharedDb>) -> Json<Vec<PlayerQuest>> {
    let db = db.read().await;
    Json(db.quests.values().cloned().collect())
}

pub async fn get_quest(
    State(db): State<SharedDb>,
    Path(id): Path<DbId>,
) -> MockResult<Json<PlayerQuest>> {
    let db = db.read().await;
    db.quests
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(MockError::NotFound)
}

pub async fn claim_quest(
    State(db): State<SharedDb>,
    Path(id): Path<DbId>,
) -> MockResult<Json<ClaimOutcome>> {
    let mut db = db.write().await;
    let (xp, coins) = {
        let quest = db.quests.get_mut(&id).ok_or(MockError::NotFound)?;
        if !quest.completed || quest.claimed {
            return Err(MockError::BadRequest("Cannot claim reward".into()));
        }
        quest.claimed = true;
        (quest.quest.xp_reward, quest.quest.currency_reward)
    };
    if let Some(player) = db.player.as_mut() {
        apply_progression(player, xp, coins);
    }
    Ok(Json(ClaimOutcome {
        status: "claimed".into(),
    }))
}

// ---------------------------------------------------------------------------
// Collection + rolls
// ---------------------------------------------------------------------------

pub async fn list_collection(State(db): State<SharedDb>) -> Json<Vec<UserCard>> {
    let db = db.read().await;
    Json(db.user_cards.values().cloned().collect())
}

pub async fn get_user_card(
    State(db): State<SharedDb>,
    Path(id): Path<DbId>,
) -> MockResult<Json<UserCard>> {
    let db = db.read().await;
    db.user_cards
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(MockError::NotFound)
}

/// POST /gamification/collection/{id}/reroll_image/
///
/// Swaps in a fresh image URL so callers can observe the regenerated card.
pub async fn reroll_image(
    State(db): State<SharedDb>,
    Path(id): Path<DbId>,
) -> MockResult<Json<UserCard>> {
    let mut db = db.write().await;
    if !db.user_cards.contains_key(&id) {
        return Err(MockError::NotFound);
    }
    let url = db.next_reroll_url();

    let user_card = db.user_cards.get_mut(&id).ok_or(MockError::NotFound)?;
    user_card.card.image_url = Some(url.clone());
    user_card.card.thumbnail_url = Some(url.clone());
    let updated = user_card.clone();
    let card_id = updated.card.id;

    // Keep the card table in step with the embedded copy.
    if let Some(card) = db.cards.get_mut(&card_id) {
        card.image_url = Some(url.clone());
        card.thumbnail_url = Some(url);
    }
    Ok(Json(updated))
}

/// POST /gamification/gatcha/roll/
///
/// Deterministic drop order: the lowest-id card the player does not own yet,
/// falling back to bumping the count on the first owned card.
pub async fn roll(State(db): State<SharedDb>) -> MockResult<Json<RollOutcome>> {
    let mut db = db.write().await;

    let coins = db
        .player
        .as_ref()
        .map(|player| player.gatcha_coins)
        .ok_or(MockError::NotFound)?;
    if coins < ROLL_COST {
        return Err(MockError::BadRequest("Not enough coins".into()));
    }

    let owned: Vec<DbId> = db.user_cards.values().map(|uc| uc.card.id).collect();
    let unowned = db
        .cards
        .values()
        .find(|card| !owned.contains(&card.id))
        .cloned();

    let (drop, is_new) = match unowned {
        Some(card) => {
            let id = next_key(&db.user_cards);
            let user_card = UserCard {
                id,
                card,
                count: 1,
                obtained_at: chrono::Utc::now(),
            };
            db.user_cards.insert(id, user_card.clone());
            (user_card, true)
        }
        None => {
            let user_card = db
                .user_cards
                .values_mut()
                .next()
                .ok_or_else(|| MockError::BadRequest("No cards available".into()))?;
            user_card.count += 1;
            (user_card.clone(), false)
        }
    };

    let remaining_coins = {
        let player = db.player.as_mut().ok_or(MockError::NotFound)?;
        player.gatcha_coins -= ROLL_COST;
        player.gatcha_coins
    };

    Ok(Json(RollOutcome {
        drop,
        is_new,
        remaining_coins,
    }))
}
