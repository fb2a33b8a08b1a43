//! Equivalence checking between a reference rearrangement and a
//! submitted formula.
//!
//! Both formulas are reduced to canonical text and compared for exact
//! equality. This recognizes reordered multiplicative factors and
//! structurally equivalent sqrt/fraction/paren nesting, but NOT
//! additive commutativity, distributivity, or other identities —
//! `a + b` and `b + a` are judged unequal on purpose; the intended
//! grading strictness is pinned by test below.

use serde::{Deserialize, Serialize};

use crate::normalize::normalize_formula;

/// Judgement of a submitted formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    Incorrect,
    /// The judge could not be reached. Distinct from `Incorrect`; the
    /// caller may retry.
    Unverified,
}

/// Result of comparing a submitted formula to the reference answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Whether the submission is equivalent to the reference.
    pub is_correct: bool,
    /// Canonical form of the reference answer (for display).
    pub reference_normalized: String,
    /// Canonical form of the submission (for display).
    pub user_normalized: String,
}

impl CheckResult {
    pub fn verdict(&self) -> Verdict {
        if self.is_correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }
}

/// Compare a submitted formula to the reference rearrangement.
pub fn check_equivalence(reference: &str, user: &str) -> CheckResult {
    let reference_normalized = normalize_formula(reference);
    let user_normalized = normalize_formula(user);
    CheckResult {
        is_correct: reference_normalized == user_normalized,
        reference_normalized,
        user_normalized,
    }
}
