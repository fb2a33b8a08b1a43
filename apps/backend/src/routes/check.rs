//! Equivalence check endpoint

use axum::Json;

use crate::error::{ApiError, Result};
use crate::models::{CheckRequest, CheckResponse};
use equation_core::check_equivalence;

/// POST /api/check
///
/// Judges a submitted formula against the reference rearrangement.
/// Malformed formula text is not an error: the normalizer degrades to a
/// whitespace-stripped comparison, so the learner still gets a verdict.
pub async fn check(Json(payload): Json<CheckRequest>) -> Result<Json<CheckResponse>> {
    if payload.reference_formula.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "reference_formula must not be empty".to_string(),
        ));
    }
    if payload.user_formula.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "user_formula must not be empty".to_string(),
        ));
    }

    let result = check_equivalence(&payload.reference_formula, &payload.user_formula);

    tracing::debug!(
        target_variable = %payload.target_variable,
        user_normalized = %result.user_normalized,
        is_correct = result.is_correct,
        "judged submission"
    );

    let explanation = if result.is_correct {
        format!(
            "{} is a correct rearrangement for {}",
            result.user_normalized, payload.target_variable
        )
    } else {
        format!(
            "{} is not the expected rearrangement for {}",
            result.user_normalized, payload.target_variable
        )
    };

    Ok(Json(CheckResponse {
        is_correct: result.is_correct,
        explanation,
    }))
}
