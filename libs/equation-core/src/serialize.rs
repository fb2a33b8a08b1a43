//! Serialization of a side container to the textual formula grammar.
//!
//! The output grammar is the wire contract with the equivalence judge:
//! tokens joined by single spaces, `sqrt(...)`, `a / b`, `^2`,
//! parentheses. Serialization is total; incomplete trees serialize with
//! single-space placeholders, which makes it usable for previews.

use crate::types::{tokens, Equation, Item, SideContainer};

/// Serialize a container, joining its items with single spaces.
/// An empty container yields the empty string.
pub fn serialize(container: &SideContainer) -> String {
    container
        .items
        .iter()
        .map(serialize_item)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Serialize both sides, joined by ` = `.
pub fn serialize_equation(equation: &Equation) -> String {
    format!(
        "{} = {}",
        serialize(&equation.left),
        serialize(&equation.right)
    )
}

fn serialize_item(item: &Item) -> String {
    match item {
        Item::Leaf { token, .. } if token == tokens::SQUARE => "^2".to_string(),
        Item::Leaf { token, .. } => token.clone(),
        Item::Sqrt { content, .. } => {
            if content.is_empty() {
                "sqrt( )".to_string()
            } else {
                format!("sqrt({})", serialize(content))
            }
        }
        Item::Fraction {
            numerator,
            denominator,
            ..
        } => format!(
            "{} / {}",
            serialize_fraction_side(numerator),
            serialize_fraction_side(denominator)
        ),
    }
}

// A fraction side is parenthesized only when it holds more than one
// item; an empty side emits a single space so the division still has
// two operands.
fn serialize_fraction_side(side: &SideContainer) -> String {
    match side.len() {
        0 => " ".to_string(),
        1 => serialize(side),
        _ => format!("( {} )", serialize(side)),
    }
}
