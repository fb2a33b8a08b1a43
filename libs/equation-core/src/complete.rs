//! Completeness check gating the submit action.

use crate::types::{Item, SideContainer};

/// Whether `container` denotes a syntactically complete expression.
///
/// A container is complete iff it is non-empty and every composite item
/// in it has non-empty, complete children. Leaves impose no further
/// constraint. The check is evaluated on each root side independently;
/// submission requires both sides to pass.
pub fn is_complete(container: &SideContainer) -> bool {
    !container.is_empty()
        && container.items.iter().all(|item| match item {
            Item::Leaf { .. } => true,
            Item::Sqrt { content, .. } => is_complete(content),
            Item::Fraction {
                numerator,
                denominator,
                ..
            } => is_complete(numerator) && is_complete(denominator),
        })
}
