//! Cached accessors for the task-tracker integration.

use gatcha_api::models::{ManualTaskOutcome, ManualTaskPayload, TaskStats};
use gatcha_api::services::ticktick;
use gatcha_api::ApiResult;

use crate::client::QueryClient;
use crate::gamification::{player_key, quests_key};
use crate::key::QueryKey;
use crate::state::QueryState;

pub fn stats_key() -> QueryKey {
    QueryKey::new("ticktick").with_name("stats")
}

pub fn history_key() -> QueryKey {
    QueryKey::new("ticktick").with_name("history")
}

pub fn progression_key() -> QueryKey {
    QueryKey::new("ticktick").with_name("progression")
}

pub async fn ticktick_stats(client: &QueryClient) -> QueryState<TaskStats> {
    client
        .fetch(stats_key(), |api| async move { ticktick::stats(&api).await })
        .await
}

pub async fn ticktick_history(client: &QueryClient) -> QueryState<serde_json::Value> {
    client
        .fetch(history_key(), |api| async move {
            ticktick::history(&api).await
        })
        .await
}

pub async fn ticktick_progression(client: &QueryClient) -> QueryState<serde_json::Value> {
    client
        .fetch(progression_key(), |api| async move {
            ticktick::progression(&api).await
        })
        .await
}

// ---- mutations and their invalidation sets --------------------------------

/// Rewarding a task moves coins, XP, and quest progress, so all three
/// panels refresh.
pub fn manual_task_invalidates() -> Vec<QueryKey> {
    vec![stats_key(), player_key(), quests_key()]
}

pub async fn submit_manual_task(
    client: &QueryClient,
    payload: &ManualTaskPayload,
) -> ApiResult<ManualTaskOutcome> {
    client
        .mutate(
            |api| async move { ticktick::manual_task(&api, payload).await },
            |_| manual_task_invalidates(),
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewards_refresh_stats_wallet_and_quests() {
        assert_eq!(
            manual_task_invalidates(),
            vec![stats_key(), player_key(), quests_key()]
        );
    }

    #[test]
    fn ticktick_keys_share_a_prefix() {
        let prefix = QueryKey::new("ticktick");
        assert!(stats_key().starts_with(&prefix));
        assert!(history_key().starts_with(&prefix));
        assert!(progression_key().starts_with(&prefix));
    }
}
