//! Core equation-expression engine for the formula rearrangement drill.
//!
//! Provides:
//! - Expression tree model (leaves, square roots, fractions)
//! - Path addressing and pure insert/remove/move mutations
//! - Serialization to the textual formula grammar
//! - Completeness checking (gates the submit action)
//! - Text normalization and equivalence checking
//!
//! Everything here is synchronous and side-effect-free; mutations
//! return new trees instead of editing in place.

pub mod checking;
pub mod complete;
pub mod error;
pub mod normalize;
pub mod serialize;
pub mod tree;
pub mod types;

pub use checking::{check_equivalence, CheckResult, Verdict};
pub use complete::is_complete;
pub use error::{PathError, Result};
pub use normalize::{normalize_formula, normalize_side};
pub use serialize::{serialize, serialize_equation};
pub use tree::{insert, move_item, remove_at, resolve_container, resolve_item, PathStep};
pub use types::{ChildSlot, Equation, Item, Problem, SideContainer};
