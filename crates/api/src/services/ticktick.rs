//! `/ticktick/` endpoints.
//!
//! `history` and `progression` have no stable schema on the backend side,
//! so they surface as raw [`serde_json::Value`] rather than an invented
//! shape.

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{ManualTaskOutcome, ManualTaskPayload, TaskStats};

/// GET /ticktick/stats/
pub async fn stats(api: &ApiClient) -> ApiResult<TaskStats> {
    api.get_json("/ticktick/stats/").await
}

/// GET /ticktick/history/
pub async fn history(api: &ApiClient) -> ApiResult<serde_json::Value> {
    api.get_json("/ticktick/history/").await
}

/// GET /ticktick/progression/
pub async fn progression(api: &ApiClient) -> ApiResult<serde_json::Value> {
    api.get_json("/ticktick/progression/").await
}

/// POST /ticktick/manual_task/
pub async fn manual_task(
    api: &ApiClient,
    payload: &ManualTaskPayload,
) -> ApiResult<ManualTaskOutcome> {
    let outcome: ManualTaskOutcome = api.post_json("/ticktick/manual_task/", payload).await?;
    tracing::info!(
        title = %payload.title,
        status = %outcome.status,
        "Manual task submitted"
    );
    Ok(outcome)
}

/// GET /ticktick/webhook/
///
/// Health probe for the task-tracker webhook; the interesting POST side is
/// called by the automation platform, not by this client.
pub async fn webhook_probe(api: &ApiClient) -> ApiResult<serde_json::Value> {
    api.get_json("/ticktick/webhook/").await
}
