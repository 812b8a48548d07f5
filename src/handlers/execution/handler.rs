//! Execution handler implementations

use axum::{Json, extract::State};
use validator::Validate;

use crate::{error::AppResult, services::ExecutionService, state::AppState};

use super::{
    request::{RunRequest, SubmitRequest},
    response::{RunResponse, SubmitResponse},
};

/// Execute a single submission and return its normalized result
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<SubmitRequest>,
) -> AppResult<Json<SubmitResponse>> {
    payload.validate()?;

    let stdin = payload.stdin.unwrap_or_default();
    let result = ExecutionService::submit(
        state.gateway(),
        &payload.language,
        &payload.source_code,
        &stdin,
    )
    .await?;

    Ok(Json(SubmitResponse {
        success: true,
        result,
    }))
}

/// Evaluate a submission against the fixture battery
pub async fn run_battery(
    State(state): State<AppState>,
    Json(payload): Json<RunRequest>,
) -> AppResult<Json<RunResponse>> {
    payload.validate()?;

    let report = ExecutionService::run_battery(
        state.gateway(),
        state.fixtures(),
        &payload.language,
        &payload.code,
    )
    .await;

    Ok(Json(RunResponse {
        success: true,
        report,
    }))
}
