//! Core types for the formula rearrangement drill.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reserved leaf tokens.
///
/// The drag palette offers these alongside plain variable and operator
/// tokens. `FRACTION` and `SQRT` are placeholders the UI swaps for a
/// composite node on drop (see [`Item::from_token`]); `SQUARE` stays a
/// leaf and serializes as the `^2` operator.
pub mod tokens {
    pub const FRACTION: &str = "fraction";
    pub const SQRT: &str = "sqrt";
    pub const SQUARE: &str = "square";
}

/// One side of an equation, or one nested slot of a composite item:
/// an ordered run of items in left-to-right reading order.
///
/// An empty container represents an unfilled slot. Emptiness is never
/// recursive: a fraction with an empty numerator is an *incomplete*
/// item inside a non-empty container, not an empty container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SideContainer {
    pub items: Vec<Item>,
}

impl SideContainer {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Item> for SideContainer {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Named child slot of a composite item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildSlot {
    Content,
    Numerator,
    Denominator,
}

impl ChildSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Numerator => "numerator",
            Self::Denominator => "denominator",
        }
    }
}

impl std::fmt::Display for ChildSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A draggable element placed in a side container.
///
/// Every item carries a unique opaque id, stable across moves, so the
/// UI can diff renders and name "this exact occurrence" of a token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    /// Atomic token: a variable/number name, an operator (`+ - * ( )`),
    /// or a reserved trigger token.
    Leaf { id: Uuid, token: String },
    /// Square root with one nested slot (the radicand).
    Sqrt { id: Uuid, content: SideContainer },
    /// Fraction with two nested slots.
    Fraction {
        id: Uuid,
        numerator: SideContainer,
        denominator: SideContainer,
    },
}

impl Item {
    /// New leaf carrying `token`.
    pub fn leaf(token: impl Into<String>) -> Self {
        Self::Leaf {
            id: Uuid::new_v4(),
            token: token.into(),
        }
    }

    /// New square root with an empty radicand.
    pub fn sqrt() -> Self {
        Self::Sqrt {
            id: Uuid::new_v4(),
            content: SideContainer::new(),
        }
    }

    /// New fraction with empty numerator and denominator.
    pub fn fraction() -> Self {
        Self::Fraction {
            id: Uuid::new_v4(),
            numerator: SideContainer::new(),
            denominator: SideContainer::new(),
        }
    }

    /// Build the item a palette token stands for: trigger tokens become
    /// empty composite nodes, everything else a plain leaf.
    pub fn from_token(token: &str) -> Self {
        match token {
            tokens::FRACTION => Self::fraction(),
            tokens::SQRT => Self::sqrt(),
            _ => Self::leaf(token),
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Self::Leaf { id, .. } | Self::Sqrt { id, .. } | Self::Fraction { id, .. } => *id,
        }
    }

    /// The child container behind `slot`, if this item has one.
    pub fn child(&self, slot: ChildSlot) -> Option<&SideContainer> {
        match (self, slot) {
            (Self::Sqrt { content, .. }, ChildSlot::Content) => Some(content),
            (Self::Fraction { numerator, .. }, ChildSlot::Numerator) => Some(numerator),
            (Self::Fraction { denominator, .. }, ChildSlot::Denominator) => Some(denominator),
            _ => None,
        }
    }
}

/// The two root containers the learner is filling in.
///
/// A fresh equation is dealt empty with each problem; it is reset to
/// empty on retry or when advancing to the next problem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equation {
    pub left: SideContainer,
    pub right: SideContainer,
}

impl Equation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard everything the learner has placed.
    pub fn reset(&mut self) {
        self.left = SideContainer::new();
        self.right = SideContainer::new();
    }
}

/// A rearrangement exercise. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// The formula as given, e.g. `Fz = m * g`.
    pub original_formula: String,
    /// Variable the learner must isolate.
    pub target_variable: String,
    /// Canonical correct rearrangement, e.g. `m = Fz / g`.
    pub correct_answer: String,
    /// Tokens the palette may offer for this problem.
    pub symbols: Vec<String>,
}
