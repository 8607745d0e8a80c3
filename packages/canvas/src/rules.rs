//! # Placement Rules
//!
//! Pure decisions about where a dragged element may land. Nothing here
//! touches the tree; the mutator applies whatever these functions accept.
//!
//! ## Matrix
//!
//! ```text
//! dragged \ target   canvas  row  col  div  leaf
//! row                  ✓
//! col                        ✓
//! div                  ✓     ✓    ✓    ✓
//! leaf                       ✓
//! ```

use crate::kind::{ElementKind, TargetKind};
use crate::tree::{CanvasTree, DropTarget};
use serde::{Deserialize, Serialize};
use std::fmt;

// Columns: Root, Row, Column, Div, Leaf (see `TargetKind::index`)
const MATRIX: [[bool; 5]; 4] = [
    // row
    [true, false, false, false, false],
    // column
    [false, true, false, false, false],
    // div
    [true, true, true, true, false],
    // leaf control
    [false, true, false, false, false],
];

fn dragged_index(kind: &ElementKind) -> usize {
    match kind {
        ElementKind::Row => 0,
        ElementKind::Column => 1,
        ElementKind::Div => 2,
        ElementKind::Leaf(_) => 3,
    }
}

/// Whether `dragged` may be placed directly inside a `target`
pub fn can_place(dragged: &ElementKind, target: TargetKind) -> bool {
    MATRIX[dragged_index(dragged)][target.index()]
}

/// How a rejected hover target is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resolution {
    /// Only the element under the pointer is considered
    #[default]
    Immediate,
    /// Walk up to the closest container that accepts the item
    NearestAncestor,
}

/// Why a drop was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    UnknownTarget(String),
    Illegal {
        dragged: ElementKind,
        target: TargetKind,
    },
    /// Dropping an element onto itself
    SelfDrop,
    /// Dropping an element into its own subtree
    IntoDescendant,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::UnknownTarget(id) => write!(f, "unknown drop target {}", id),
            Rejection::Illegal { dragged, target } => {
                write!(f, "cannot directly drop {} into {}", dragged, target)
            }
            Rejection::SelfDrop => f.write_str("cannot drop an element onto itself"),
            Rejection::IntoDescendant => {
                f.write_str("cannot drop an element into its own descendant")
            }
        }
    }
}

/// Pick the container that receives a drop hovering over `target`
///
/// `moving` is the ID of the dragged canvas node, `None` for palette items.
pub fn resolve_target(
    tree: &CanvasTree,
    dragged: &ElementKind,
    moving: Option<&str>,
    target: &DropTarget,
    resolution: Resolution,
) -> Result<DropTarget, Rejection> {
    let immediate = check(tree, dragged, moving, target);
    match (immediate, resolution) {
        (Ok(()), _) => Ok(target.clone()),
        (Err(rejection), Resolution::Immediate) => Err(rejection),
        (Err(rejection @ Rejection::UnknownTarget(_)), Resolution::NearestAncestor) => {
            Err(rejection)
        }
        (Err(rejection), Resolution::NearestAncestor) => tree
            .ancestors(target.as_id())
            .into_iter()
            .find(|ancestor| check(tree, dragged, moving, ancestor).is_ok())
            .ok_or(rejection),
    }
}

fn check(
    tree: &CanvasTree,
    dragged: &ElementKind,
    moving: Option<&str>,
    target: &DropTarget,
) -> Result<(), Rejection> {
    let target_kind = tree
        .target_kind(target)
        .ok_or_else(|| Rejection::UnknownTarget(target.as_id().to_string()))?;

    if let Some(node_id) = moving {
        if target.as_id() == node_id {
            return Err(Rejection::SelfDrop);
        }
        if tree.would_create_cycle(node_id, target) {
            return Err(Rejection::IntoDescendant);
        }
    }

    if can_place(dragged, target_kind) {
        Ok(())
    } else {
        Err(Rejection::Illegal {
            dragged: dragged.clone(),
            target: target_kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_accepts_rows_and_divs_only() {
        assert!(can_place(&ElementKind::Row, TargetKind::Root));
        assert!(can_place(&ElementKind::Div, TargetKind::Root));
        assert!(!can_place(&ElementKind::Column, TargetKind::Root));
        assert!(!can_place(&ElementKind::parse("button"), TargetKind::Root));
    }

    #[test]
    fn test_leaf_controls_go_into_rows_only() {
        let button = ElementKind::parse("button");
        assert!(can_place(&button, TargetKind::Row));
        assert!(!can_place(&button, TargetKind::Column));
        assert!(!can_place(&button, TargetKind::Div));
    }

    #[test]
    fn test_leaf_never_accepts() {
        for dragged in ["row", "col", "div", "text"] {
            assert!(
                !can_place(&ElementKind::parse(dragged), TargetKind::Leaf),
                "{} must not land in a leaf",
                dragged
            );
        }
    }

    #[test]
    fn test_resolve_unknown_target() {
        let tree = CanvasTree::new();
        let result = resolve_target(
            &tree,
            &ElementKind::Div,
            None,
            &DropTarget::node("ghost"),
            Resolution::NearestAncestor,
        );
        assert_eq!(result, Err(Rejection::UnknownTarget("ghost".to_string())));
    }

    #[test]
    fn test_resolution_config_names() {
        let r: Resolution = serde_json::from_str("\"nearestAncestor\"").unwrap();
        assert_eq!(r, Resolution::NearestAncestor);
        assert_eq!(Resolution::default(), Resolution::Immediate);
    }
}
