//! Canonicalization of serialized formula text for comparison.
//!
//! Works directly on the serializer's output grammar rather than on the
//! tree, so the same canonical form applies to text arriving from the
//! judge's wire contract. Recognized rewrites: whitespace removal,
//! recursive normalization inside parentheses and `sqrt(...)`, splitting
//! on the top-level division, and lexicographic ordering of top-level
//! multiplicative factors. Additive term order is deliberately left
//! alone (see `checking`).

/// Canonicalize one side of a formula.
pub fn normalize_side(text: &str) -> String {
    normalize_expr(&strip_whitespace(text))
}

/// Canonicalize a full `lhs = rhs` formula.
///
/// The left-hand side (the target variable) is only whitespace-stripped;
/// the right-hand side is fully normalized. Input without exactly one
/// `=` degrades to whitespace-stripped passthrough so comparison always
/// has some string to work with.
pub fn normalize_formula(formula: &str) -> String {
    if formula.chars().filter(|&c| c == '=').count() != 1 {
        return strip_whitespace(formula);
    }
    // Exactly one '=' at this point.
    let (lhs, rhs) = formula.split_once('=').unwrap_or((formula, ""));
    format!("{}={}", strip_whitespace(lhs), normalize_side(rhs))
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn normalize_expr(s: &str) -> String {
    if let Some(inner) = unwrap_group(s, "sqrt(") {
        return format!("sqrt({})", normalize_expr(inner));
    }
    if let Some(inner) = unwrap_group(s, "(") {
        return format!("({})", normalize_expr(inner));
    }
    if let Some((numerator, denominator)) = split_first_top_level(s, '/') {
        return format!(
            "{}/{}",
            normalize_expr(numerator),
            normalize_expr(denominator)
        );
    }
    let factors = split_all_top_level(s, '*');
    if factors.len() > 1 {
        let mut factors: Vec<String> =
            factors.into_iter().map(normalize_expr).collect();
        factors.sort();
        return factors.join("*");
    }
    s.to_string()
}

/// Interior of `s` when it is exactly `<prefix>...)` and the paren
/// opened by the prefix matches the final character. Returns `None` for
/// unbalanced input, which leaves the string as-is downstream.
fn unwrap_group<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let inner = s.strip_prefix(prefix)?.strip_suffix(')')?;
    let mut depth = 0i32;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return None;
                }
            }
            _ => {}
        }
    }
    (depth == 0).then_some(inner)
}

/// Split at the first occurrence of `op` at parenthesis depth 0.
fn split_first_top_level(s: &str, op: char) -> Option<(&str, &str)> {
    let mut depth = 0i32;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            c if c == op && depth == 0 => return Some((&s[..i], &s[i + 1..])),
            _ => {}
        }
    }
    None
}

/// Split on every occurrence of `op` at parenthesis depth 0.
fn split_all_top_level(s: &str, op: char) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            c if c == op && depth == 0 => {
                segments.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&s[start..]);
    segments
}
