//! Task-tracker integration handlers.
//!
//! The manual-task reward runs the real pipeline's arithmetic with the
//! random parts pinned (fixed base, no crit, no streak) so tests can assert
//! exact coin and XP amounts.

use axum::extract::State;
use axum::Json;

use gatcha_api::models::{ManualTaskOutcome, ManualTaskPayload, TaskActivity, TaskReward};

use crate::error::{MockError, MockResult};
use crate::handlers::gamification::apply_progression;
use crate::state::SharedDb;

/// Midpoint of the live pipeline's random 15..=25 base roll.
const BASE_COINS: i64 = 20;
/// Fraction of the coin total credited as XP.
const XP_RATE: f64 = 0.5;
/// How many entries the stats panel keeps.
const RECENT_ACTIVITY_CAP: usize = 10;

/// Difficulty tier from the task's tags, strongest tag wins.
fn difficulty_from_tags(tags: &[String]) -> (&'static str, f64) {
    let has = |tier: &str| tags.iter().any(|tag| tag.eq_ignore_ascii_case(tier));
    if has("extreme") {
        ("extreme", 3.0)
    } else if has("hard") {
        ("hard", 2.0)
    } else if has("medium") {
        ("medium", 1.5)
    } else {
        ("easy", 1.0)
    }
}

pub async fn stats(State(db): State<SharedDb>) -> Json<gatcha_api::models::TaskStats> {
    let db = db.read().await;
    Json(db.task_stats.clone())
}

pub async fn history(State(db): State<SharedDb>) -> Json<serde_json::Value> {
    let db = db.read().await;
    let entries: Vec<serde_json::Value> = db
        .task_stats
        .recent_activity
        .iter()
        .map(|activity| {
            serde_json::json!({
                "id": activity.id,
                "title": activity.title,
                "project": activity.project,
                "processed_at": activity.processed_at,
            })
        })
        .collect();
    Json(serde_json::Value::Array(entries))
}

pub async fn progression(State(db): State<SharedDb>) -> Json<serde_json::Value> {
    let db = db.read().await;
    Json(serde_json::json!({
        "rewarded_total": db.task_stats.rewarded_total,
        "daily": [
            {"date": "2025-11-01", "coins": 120, "xp": 60},
            {"date": "2025-11-02", "coins": 45, "xp": 22},
        ],
    }))
}

pub async fn manual_task(
    State(db): State<SharedDb>,
    Json(payload): Json<ManualTaskPayload>,
) -> MockResult<Json<ManualTaskOutcome>> {
    if payload.title.trim().is_empty() {
        return Err(MockError::BadRequest("title is required".into()));
    }

    let (difficulty, difficulty_multiplier) = difficulty_from_tags(&payload.tags);
    let total_coins = (BASE_COINS as f64 * difficulty_multiplier).round() as i64;
    let xp_gain = (total_coins as f64 * XP_RATE).round() as i64;

    let mut db = db.write().await;
    let (levels_gained, new_level, current_xp, current_currency) = {
        let player = db.player.as_mut().ok_or(MockError::NotFound)?;
        let levels = apply_progression(player, xp_gain, total_coins);
        (levels, player.level, player.xp, player.gatcha_coins)
    };

    db.task_stats.total_completed_all_time += 1;
    db.task_stats.rewarded_total += 1;
    db.task_stats.rewarded_today += 1;
    let task_id = format!("manual-{}", db.task_stats.rewarded_total);
    db.task_stats.recent_activity.insert(
        0,
        TaskActivity {
            id: task_id.clone(),
            title: payload.title.clone(),
            project: None,
            processed_at: chrono::Utc::now(),
        },
    );
    db.task_stats.recent_activity.truncate(RECENT_ACTIVITY_CAP);

    Ok(Json(ManualTaskOutcome {
        status: "success".into(),
        message: None,
        task_id: Some(task_id),
        task_name: Some(payload.title),
        reward_details: Some(TaskReward {
            base: BASE_COINS,
            difficulty: difficulty.into(),
            difficulty_multiplier,
            daily_bonus: 0,
            streak_bonus: 1.0,
            is_crit: false,
            crit_multiplier: 1.0,
            total_coins,
            xp_gain,
        }),
        levels_gained: Some(levels_gained),
        new_level: Some(new_level),
        current_xp: Some(current_xp),
        current_currency: Some(current_currency),
    }))
}

pub async fn webhook_probe() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "active"}))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strongest_difficulty_tag_wins() {
        let tags = vec!["work".into(), "hard".into(), "extreme".into()];
        assert_eq!(difficulty_from_tags(&tags), ("extreme", 3.0));
    }

    #[test]
    fn untagged_tasks_are_easy() {
        assert_eq!(difficulty_from_tags(&[]), ("easy", 1.0));
    }

    #[test]
    fn tags_match_case_insensitively() {
        let tags = vec!["HARD".into()];
        assert_eq!(difficulty_from_tags(&tags), ("hard", 2.0));
    }
}
