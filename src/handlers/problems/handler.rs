//! Problem handler implementations

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    catalog::starter_template,
    constants::languages,
    error::AppResult,
    services::ProblemService,
    state::AppState,
};

use super::response::{ProblemDetailResponse, ProblemsListResponse};

/// List all problems in the catalog
pub async fn list_problems(State(state): State<AppState>) -> AppResult<Json<ProblemsListResponse>> {
    let problems = ProblemService::list_problems(state.problems());
    let total = problems.len();

    Ok(Json(ProblemsListResponse {
        success: true,
        problems,
        total,
    }))
}

/// Get a specific problem, with per-language starter templates
pub async fn get_problem(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<ProblemDetailResponse>> {
    let problem = ProblemService::get_problem(state.problems(), id)?;

    let templates = languages::ALL
        .iter()
        .map(|&tag| (tag.to_string(), starter_template(tag).to_string()))
        .collect();

    Ok(Json(ProblemDetailResponse {
        success: true,
        problem,
        templates,
    }))
}
