//! Common test utilities for integration tests.

use std::sync::Arc;

use axum::Router;

use formula_drill_backend::services::problems::ProblemBank;
use formula_drill_backend::{build_router, AppState};

/// Build the application router against the built-in problem bank.
pub fn test_app() -> Router {
    let state = AppState {
        problems: Arc::new(ProblemBank::builtin()),
    };
    build_router(state)
}
