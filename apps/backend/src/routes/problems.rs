//! Problem bank endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::{ProblemDetail, ProblemListResponse, ProblemSummary};
use crate::AppState;

/// GET /api/problems
pub async fn list(State(state): State<AppState>) -> Result<Json<ProblemListResponse>> {
    let problems = state
        .problems
        .list()
        .iter()
        .map(|entry| ProblemSummary {
            id: entry.id.clone(),
            original_formula: entry.problem.original_formula.clone(),
            target_variable: entry.problem.target_variable.clone(),
            symbols: entry.problem.symbols.clone(),
        })
        .collect();

    Ok(Json(ProblemListResponse { problems }))
}

/// GET /api/problems/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProblemDetail>> {
    let entry = state
        .problems
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("problem {}", id)))?;

    Ok(Json(ProblemDetail {
        id: entry.id.clone(),
        problem: entry.problem.clone(),
    }))
}
