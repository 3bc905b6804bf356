//! Task-reward records from the TickTick integration.
//!
//! The reward pipeline (streaks, crits, daily bonuses) runs server-side;
//! the client only reads the stats panel and submits manual completions.

use gatcha_core::Timestamp;
use serde::{Deserialize, Serialize};

/// Aggregate task stats for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    pub total_completed_all_time: i64,
    pub rewarded_total: i64,
    pub rewarded_today: i64,
    #[serde(default)]
    pub recent_activity: Vec<TaskActivity>,
}

/// One recently rewarded task. Task ids come from the external tracker and
/// are opaque strings, not backend primary keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskActivity {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub project: Option<String>,
    pub processed_at: Timestamp,
}

/// Payload for rewarding a task completed outside the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualTaskPayload {
    pub title: String,
    /// Difficulty tags the reward pipeline scans (`hard`, `extreme`, …).
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Reward breakdown for one processed task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskReward {
    pub base: i64,
    pub difficulty: String,
    pub difficulty_multiplier: f64,
    pub daily_bonus: i64,
    pub streak_bonus: f64,
    pub is_crit: bool,
    pub crit_multiplier: f64,
    pub total_coins: i64,
    pub xp_gain: i64,
}

/// Result of submitting a task for reward.
///
/// `status` is `"success"` when rewarded; `"already_processed"` answers carry
/// only a `message`, so everything else is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualTaskOutcome {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub task_name: Option<String>,
    #[serde(default)]
    pub reward_details: Option<TaskReward>,
    #[serde(default)]
    pub levels_gained: Option<i64>,
    #[serde(default)]
    pub new_level: Option<i64>,
    #[serde(default)]
    pub current_xp: Option<i64>,
    #[serde(default)]
    pub current_currency: Option<i64>,
}

impl ManualTaskOutcome {
    /// Whether the task was rewarded by this submission (as opposed to
    /// having been processed before).
    pub fn rewarded(&self) -> bool {
        self.status == "success"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_processed_outcome_decodes_without_reward_fields() {
        let json = serde_json::json!({
            "status": "already_processed",
            "message": "Task 42 has already been rewarded",
        });
        let outcome: ManualTaskOutcome = serde_json::from_value(json).unwrap();
        assert!(!outcome.rewarded());
        assert!(outcome.reward_details.is_none());
    }
}
