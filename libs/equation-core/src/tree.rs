//! Path addressing and the pure mutation engine.
//!
//! Every edit takes the current root by reference and returns a fresh
//! root; the input tree is never touched, so a failed mutation leaves
//! the caller holding the prior state unchanged. Paths are ephemeral:
//! indices shift on insert/remove, so the UI derives a fresh path from
//! the current tree before each call.

use serde::{Deserialize, Serialize};

use crate::error::{PathError, Result};
use crate::types::{ChildSlot, Item, SideContainer};

/// One step of a path.
///
/// A path alternates steps starting from a root container: `Index`
/// selects an item in the current container, `Child` descends into a
/// named slot of the item just selected. A *container path* is empty
/// (the root itself) or ends on a `Child` step; an *item path* ends on
/// an `Index` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStep {
    Index(usize),
    Child(ChildSlot),
}

/// Resolve a container path against `root`.
pub fn resolve_container<'a>(
    root: &'a SideContainer,
    path: &[PathStep],
) -> Result<&'a SideContainer> {
    let mut current = root;
    let mut steps = path.iter();
    while let Some(step) = steps.next() {
        let index = match *step {
            PathStep::Index(i) => i,
            PathStep::Child(_) => return Err(PathError::MalformedPath),
        };
        let item = current
            .items
            .get(index)
            .ok_or(PathError::IndexOutOfBounds {
                index,
                len: current.len(),
            })?;
        let slot = match steps.next() {
            Some(PathStep::Child(slot)) => *slot,
            _ => return Err(PathError::MalformedPath),
        };
        current = descend(item, slot)?;
    }
    Ok(current)
}

/// Resolve an item path (container path plus a terminal index).
pub fn resolve_item<'a>(root: &'a SideContainer, path: &[PathStep]) -> Result<&'a Item> {
    let (container_path, index) = split_item_path(path)?;
    let container = resolve_container(root, container_path)?;
    container
        .items
        .get(index)
        .ok_or(PathError::IndexOutOfBounds {
            index,
            len: container.len(),
        })
}

/// Insert `item` at `index` (clamped to `[0, len]`) in the container
/// addressed by `path`. Returns the new root.
pub fn insert(
    root: &SideContainer,
    path: &[PathStep],
    index: usize,
    item: Item,
) -> Result<SideContainer> {
    let mut next = root.clone();
    let target = resolve_container_mut(&mut next, path)?;
    let index = index.min(target.len());
    target.items.insert(index, item);
    Ok(next)
}

/// Remove the item at `index` in the container addressed by
/// `container_path`. Returns the new root and the removed item.
pub fn remove_at(
    root: &SideContainer,
    container_path: &[PathStep],
    index: usize,
) -> Result<(SideContainer, Item)> {
    let mut next = root.clone();
    let target = resolve_container_mut(&mut next, container_path)?;
    if index >= target.len() {
        return Err(PathError::IndexOutOfBounds {
            index,
            len: target.len(),
        });
    }
    let removed = target.items.remove(index);
    Ok((next, removed))
}

/// Move the item at `source_path` into the container addressed by
/// `dest_container_path` at `dest_index`.
///
/// Removal happens first; `dest_index` is interpreted against the tree
/// *after* removal. Moving item 0 to index 2 within a 3-item container
/// therefore yields `[1, 2, 0]`. If removing the source invalidates the
/// destination path (e.g. the destination lies inside the moved item),
/// the whole move fails and the prior tree stands.
pub fn move_item(
    root: &SideContainer,
    source_path: &[PathStep],
    dest_container_path: &[PathStep],
    dest_index: usize,
) -> Result<SideContainer> {
    let (container_path, index) = split_item_path(source_path)?;
    let (without, item) = remove_at(root, container_path, index)?;
    insert(&without, dest_container_path, dest_index, item)
}

fn split_item_path(path: &[PathStep]) -> Result<(&[PathStep], usize)> {
    match path.split_last() {
        Some((PathStep::Index(index), container_path)) => Ok((container_path, *index)),
        _ => Err(PathError::NotAnItemPath),
    }
}

fn descend(item: &Item, slot: ChildSlot) -> Result<&SideContainer> {
    match item {
        Item::Leaf { token, .. } => Err(PathError::DescendIntoLeaf {
            token: token.clone(),
        }),
        _ => item.child(slot).ok_or(PathError::MissingSlot { slot }),
    }
}

fn resolve_container_mut<'a>(
    root: &'a mut SideContainer,
    path: &[PathStep],
) -> Result<&'a mut SideContainer> {
    let mut current = root;
    let mut steps = path.iter();
    while let Some(step) = steps.next() {
        let index = match *step {
            PathStep::Index(i) => i,
            PathStep::Child(_) => return Err(PathError::MalformedPath),
        };
        let len = current.len();
        let item = current
            .items
            .get_mut(index)
            .ok_or(PathError::IndexOutOfBounds { index, len })?;
        let slot = match steps.next() {
            Some(PathStep::Child(slot)) => *slot,
            _ => return Err(PathError::MalformedPath),
        };
        current = descend_mut(item, slot)?;
    }
    Ok(current)
}

fn descend_mut(item: &mut Item, slot: ChildSlot) -> Result<&mut SideContainer> {
    match (item, slot) {
        (Item::Sqrt { content, .. }, ChildSlot::Content) => Ok(content),
        (Item::Fraction { numerator, .. }, ChildSlot::Numerator) => Ok(numerator),
        (Item::Fraction { denominator, .. }, ChildSlot::Denominator) => Ok(denominator),
        (Item::Leaf { token, .. }, _) => Err(PathError::DescendIntoLeaf {
            token: token.clone(),
        }),
        _ => Err(PathError::MissingSlot { slot }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ROOT: &[PathStep] = &[];

    fn tokens_of(container: &SideContainer) -> Vec<String> {
        container
            .items
            .iter()
            .map(|item| match item {
                Item::Leaf { token, .. } => token.clone(),
                Item::Sqrt { .. } => "<sqrt>".to_string(),
                Item::Fraction { .. } => "<fraction>".to_string(),
            })
            .collect()
    }

    fn abc() -> SideContainer {
        ["a", "b", "c"].into_iter().map(Item::leaf).collect()
    }

    #[test]
    fn insert_at_root() {
        let root = SideContainer::new();
        let root = insert(&root, ROOT, 0, Item::leaf("m")).unwrap();
        let root = insert(&root, ROOT, 0, Item::leaf("g")).unwrap();
        assert_eq!(tokens_of(&root), vec!["g", "m"]);
    }

    #[test]
    fn insert_index_is_clamped() {
        let root = abc();
        let root = insert(&root, ROOT, 99, Item::leaf("d")).unwrap();
        assert_eq!(tokens_of(&root), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn insert_does_not_mutate_old_root() {
        let root = abc();
        let snapshot = root.clone();
        let _ = insert(&root, ROOT, 1, Item::leaf("x")).unwrap();
        assert_eq!(root, snapshot);
    }

    #[test]
    fn insert_into_fraction_slot() {
        let root: SideContainer = [Item::fraction()].into_iter().collect();
        let num = &[PathStep::Index(0), PathStep::Child(ChildSlot::Numerator)];
        let den = &[PathStep::Index(0), PathStep::Child(ChildSlot::Denominator)];
        let root = insert(&root, num, 0, Item::leaf("Fz")).unwrap();
        let root = insert(&root, den, 0, Item::leaf("g")).unwrap();
        assert_eq!(tokens_of(resolve_container(&root, num).unwrap()), vec!["Fz"]);
        assert_eq!(tokens_of(resolve_container(&root, den).unwrap()), vec!["g"]);
    }

    #[test]
    fn insert_into_nested_sqrt() {
        let root: SideContainer = [Item::fraction()].into_iter().collect();
        let num = &[PathStep::Index(0), PathStep::Child(ChildSlot::Numerator)];
        let root = insert(&root, num, 0, Item::sqrt()).unwrap();
        let radicand = &[
            PathStep::Index(0),
            PathStep::Child(ChildSlot::Numerator),
            PathStep::Index(0),
            PathStep::Child(ChildSlot::Content),
        ];
        let root = insert(&root, radicand, 0, Item::leaf("E")).unwrap();
        assert_eq!(
            tokens_of(resolve_container(&root, radicand).unwrap()),
            vec!["E"]
        );
    }

    #[test]
    fn remove_returns_item() {
        let root = abc();
        let (root, removed) = remove_at(&root, ROOT, 1).unwrap();
        assert_eq!(tokens_of(&root), vec!["a", "c"]);
        assert!(matches!(removed, Item::Leaf { token, .. } if token == "b"));
    }

    #[test]
    fn remove_out_of_bounds_fails_and_preserves_tree() {
        let root = abc();
        let err = remove_at(&root, ROOT, 3).unwrap_err();
        assert_eq!(err, PathError::IndexOutOfBounds { index: 3, len: 3 });
        assert_eq!(tokens_of(&root), vec!["a", "b", "c"]);
    }

    #[test]
    fn move_within_same_container_removes_first() {
        // The ordering law: [a, b, c] with a moved to index 2 becomes
        // [b, c, a], because the index targets the post-removal state.
        let root = abc();
        let root = move_item(&root, &[PathStep::Index(0)], ROOT, 2).unwrap();
        assert_eq!(tokens_of(&root), vec!["b", "c", "a"]);
    }

    #[test]
    fn move_keeps_item_identity() {
        let root = abc();
        let id = root.items[0].id();
        let root = move_item(&root, &[PathStep::Index(0)], ROOT, 2).unwrap();
        assert_eq!(root.items[2].id(), id);
    }

    #[test]
    fn move_from_root_into_fraction() {
        let mut root = abc();
        root.items.push(Item::fraction());
        let den = &[PathStep::Index(2), PathStep::Child(ChildSlot::Denominator)];
        // Removing item 0 shifts the fraction from index 3 to 2, so the
        // destination path is written against the post-removal tree.
        let root = move_item(&root, &[PathStep::Index(0)], den, 0).unwrap();
        assert_eq!(tokens_of(&root), vec!["b", "c", "<fraction>"]);
        assert_eq!(tokens_of(resolve_container(&root, den).unwrap()), vec!["a"]);
    }

    #[test]
    fn move_into_itself_fails() {
        let root: SideContainer = [Item::sqrt()].into_iter().collect();
        let inside = &[PathStep::Index(0), PathStep::Child(ChildSlot::Content)];
        let err = move_item(&root, &[PathStep::Index(0)], inside, 0).unwrap_err();
        assert_eq!(err, PathError::IndexOutOfBounds { index: 0, len: 0 });
    }

    #[test]
    fn descend_into_leaf_fails() {
        let root = abc();
        let path = &[PathStep::Index(0), PathStep::Child(ChildSlot::Content)];
        let err = resolve_container(&root, path).unwrap_err();
        assert!(matches!(err, PathError::DescendIntoLeaf { token } if token == "a"));
    }

    #[test]
    fn wrong_slot_on_sqrt_fails() {
        let root: SideContainer = [Item::sqrt()].into_iter().collect();
        let path = &[PathStep::Index(0), PathStep::Child(ChildSlot::Numerator)];
        let err = resolve_container(&root, path).unwrap_err();
        assert_eq!(
            err,
            PathError::MissingSlot {
                slot: ChildSlot::Numerator
            }
        );
    }

    #[test]
    fn container_path_ending_in_index_is_malformed() {
        let root = abc();
        let err = resolve_container(&root, &[PathStep::Index(0)]).unwrap_err();
        assert_eq!(err, PathError::MalformedPath);
    }

    #[test]
    fn item_path_must_end_in_index() {
        let root: SideContainer = [Item::sqrt()].into_iter().collect();
        let path = &[PathStep::Index(0), PathStep::Child(ChildSlot::Content)];
        let err = resolve_item(&root, path).unwrap_err();
        assert_eq!(err, PathError::NotAnItemPath);
    }

    #[test]
    fn resolve_item_finds_nested_leaf() {
        let root: SideContainer = [Item::fraction()].into_iter().collect();
        let num = &[PathStep::Index(0), PathStep::Child(ChildSlot::Numerator)];
        let root = insert(&root, num, 0, Item::leaf("v")).unwrap();
        let path = &[
            PathStep::Index(0),
            PathStep::Child(ChildSlot::Numerator),
            PathStep::Index(0),
        ];
        let item = resolve_item(&root, path).unwrap();
        assert!(matches!(item, Item::Leaf { token, .. } if token == "v"));
    }
}
