//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from equation-core
pub use equation_core::types::Problem;

/// Body of POST /api/check: the wire contract with the drill UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRequest {
    /// The precomputed correct rearrangement for the problem.
    pub reference_formula: String,
    /// Variable the learner was asked to isolate.
    pub target_variable: String,
    /// Serialized formula the learner submitted.
    pub user_formula: String,
}

/// Response of POST /api/check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResponse {
    pub is_correct: bool,
    pub explanation: String,
}

/// Problem as listed; the correct answer is withheld from listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemSummary {
    pub id: String,
    pub original_formula: String,
    pub target_variable: String,
    pub symbols: Vec<String>,
}

/// Full problem, including the reference answer the UI hands back to
/// the judge on submit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetail {
    pub id: String,
    #[serde(flatten)]
    pub problem: Problem,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemListResponse {
    pub problems: Vec<ProblemSummary>,
}
