//! Built-in problem bank.
//!
//! Problems are static data: the formula as taught, the variable to
//! isolate, the reference rearrangement handed to the equivalence
//! checker, and the palette tokens the UI may offer.

use equation_core::types::Problem;

/// A bank entry: a problem with its stable id.
#[derive(Debug, Clone)]
pub struct ProblemEntry {
    pub id: String,
    pub problem: Problem,
}

/// Fixed set of rearrangement exercises served by the API.
#[derive(Debug, Clone)]
pub struct ProblemBank {
    entries: Vec<ProblemEntry>,
}

impl ProblemBank {
    /// The built-in physics formula set.
    pub fn builtin() -> Self {
        let entries = vec![
            entry(
                "weight-mass",
                "Fz = m * g",
                "m",
                "m = Fz / g",
                &["Fz", "m", "g", "*", "fraction"],
            ),
            entry(
                "ohms-law-resistance",
                "U = R * I",
                "R",
                "R = U / I",
                &["U", "R", "I", "*", "fraction"],
            ),
            entry(
                "speed-distance",
                "v = s / t",
                "s",
                "s = v * t",
                &["v", "s", "t", "*", "fraction"],
            ),
            entry(
                "mass-energy-speed",
                "E = m * c * c",
                "c",
                "c = sqrt(E / m)",
                &["E", "m", "c", "*", "fraction", "sqrt"],
            ),
            entry(
                "kinetic-energy-mass",
                "Ek = ( m * v * v ) / 2",
                "m",
                "m = ( 2 * Ek ) / ( v * v )",
                &["Ek", "m", "v", "2", "*", "(", ")", "fraction"],
            ),
            entry(
                "power-current",
                "P = U * I",
                "I",
                "I = P / U",
                &["P", "U", "I", "*", "fraction"],
            ),
        ];
        Self { entries }
    }

    pub fn list(&self) -> &[ProblemEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&ProblemEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

fn entry(
    id: &str,
    original_formula: &str,
    target_variable: &str,
    correct_answer: &str,
    symbols: &[&str],
) -> ProblemEntry {
    ProblemEntry {
        id: id.to_string(),
        problem: Problem {
            original_formula: original_formula.to_string(),
            target_variable: target_variable.to_string(),
            correct_answer: correct_answer.to_string(),
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_bank_is_non_empty() {
        assert!(!ProblemBank::builtin().list().is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let bank = ProblemBank::builtin();
        let ids: HashSet<_> = bank.list().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), bank.list().len());
    }

    #[test]
    fn lookup_by_id() {
        let bank = ProblemBank::builtin();
        let entry = bank.get("weight-mass").unwrap();
        assert_eq!(entry.problem.target_variable, "m");
        assert!(bank.get("no-such-problem").is_none());
    }

    #[test]
    fn every_answer_isolates_the_target_variable() {
        for entry in ProblemBank::builtin().list() {
            let prefix = format!("{} =", entry.problem.target_variable);
            assert!(
                entry.problem.correct_answer.starts_with(&prefix),
                "{} has answer {}",
                entry.id,
                entry.problem.correct_answer
            );
        }
    }
}
