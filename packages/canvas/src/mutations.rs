//! # Canvas Mutations
//!
//! Structural operations on the canvas tree. Every mutation is validated
//! before it is applied and is committed immediately; there is no rollback.
//!
//! ## Mutation Semantics
//!
//! ### Insert
//! - Appends (or inserts at an index) into the parent
//! - Clears the parent's empty-state placeholder
//!
//! ### Move
//! - Detaches from the old parent, then inserts like `Insert`
//! - Fails if the node would end up inside itself
//!
//! ### Remove
//! - Removes the node and all descendants
//! - An emptied root or row gets its placeholder back

use crate::node::{self, CanvasNode, Child};
use crate::tree::{placeholder_text, CanvasTree, DropTarget};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where in the parent's children a node lands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    #[default]
    Append,
    Index(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    /// Insert a detached node under a container
    InsertElement {
        parent: DropTarget,
        #[serde(default)]
        position: Position,
        element: CanvasNode,
    },

    /// Move an existing node to a new container
    MoveElement {
        node_id: String,
        new_parent: DropTarget,
        #[serde(default)]
        position: Position,
    },

    /// Remove a node and its subtree
    RemoveNode { node_id: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Parent not found: {0}")]
    ParentNotFound(String),

    #[error("Would create cycle")]
    CycleDetected,

    #[error("Duplicate node id: {0}")]
    DuplicateId(String),

    #[error("Invalid structure: {0}")]
    InvalidStructure(String),
}

impl Mutation {
    /// Apply mutation to the tree with validation
    ///
    /// Returns the removed subtree for `RemoveNode`.
    pub fn apply(&self, tree: &mut CanvasTree) -> Result<Option<CanvasNode>, MutationError> {
        self.validate(tree)?;

        match self {
            Mutation::InsertElement {
                parent,
                position,
                element,
            } => {
                insert(tree, element.clone(), parent, *position)?;
                Ok(None)
            }
            Mutation::MoveElement {
                node_id,
                new_parent,
                position,
            } => {
                relocate(tree, node_id, new_parent, *position)?;
                Ok(None)
            }
            Mutation::RemoveNode { node_id } => remove(tree, node_id).map(Some),
        }
    }

    /// Validate without applying
    pub fn validate(&self, tree: &CanvasTree) -> Result<(), MutationError> {
        match self {
            Mutation::InsertElement {
                parent, element, ..
            } => {
                check_parent(tree, parent)?;
                let mut ids = Vec::new();
                element.collect_ids(&mut ids);
                if let Some(dup) = ids.into_iter().find(|id| tree.find(id).is_some()) {
                    return Err(MutationError::DuplicateId(dup));
                }
                Ok(())
            }
            Mutation::MoveElement {
                node_id,
                new_parent,
                ..
            } => {
                tree.find(node_id)
                    .ok_or_else(|| MutationError::NodeNotFound(node_id.clone()))?;
                check_parent(tree, new_parent)?;
                if tree.would_create_cycle(node_id, new_parent) {
                    return Err(MutationError::CycleDetected);
                }
                Ok(())
            }
            Mutation::RemoveNode { node_id } => {
                tree.find(node_id)
                    .ok_or_else(|| MutationError::NodeNotFound(node_id.clone()))?;
                Ok(())
            }
        }
    }
}

fn check_parent(tree: &CanvasTree, parent: &DropTarget) -> Result<(), MutationError> {
    match parent {
        DropTarget::Root => Ok(()),
        DropTarget::Node(id) => {
            let node = tree
                .find(id)
                .ok_or_else(|| MutationError::ParentNotFound(id.clone()))?;
            if node.kind.is_container() {
                Ok(())
            } else {
                Err(MutationError::InvalidStructure(format!(
                    "{} element cannot have children",
                    node.kind
                )))
            }
        }
    }
}

/// Insert a detached node under `parent`, clearing its placeholder
pub fn insert(
    tree: &mut CanvasTree,
    node: CanvasNode,
    parent: &DropTarget,
    position: Position,
) -> Result<(), MutationError> {
    check_parent(tree, parent)?;
    let children = tree
        .children_of_mut(parent)
        .ok_or_else(|| MutationError::ParentNotFound(parent.as_id().to_string()))?;

    node::clear_placeholders(children);
    match position {
        Position::Append => children.push(Child::Node(node)),
        Position::Index(index) => {
            let index = index.min(children.len());
            children.insert(index, Child::Node(node));
        }
    }
    Ok(())
}

/// Detach a node from its parent and return it
///
/// If the parent shows a placeholder when empty and has just become empty,
/// the placeholder is put back.
pub fn remove(tree: &mut CanvasTree, node_id: &str) -> Result<CanvasNode, MutationError> {
    let parent = tree
        .parent_of(node_id)
        .ok_or_else(|| MutationError::NodeNotFound(node_id.to_string()))?;
    let parent_kind = tree.target_kind(&parent);
    let children = tree
        .children_of_mut(&parent)
        .ok_or_else(|| MutationError::ParentNotFound(parent.as_id().to_string()))?;

    let pos = children
        .iter()
        .position(|c| c.as_node().map(|n| n.id == node_id).unwrap_or(false))
        .ok_or_else(|| MutationError::NodeNotFound(node_id.to_string()))?;

    let removed = match children.remove(pos) {
        Child::Node(node) => node,
        Child::Placeholder { .. } => {
            return Err(MutationError::InvalidStructure(
                "placeholder cannot be removed directly".to_string(),
            ))
        }
    };

    if let Some(text) = parent_kind.and_then(placeholder_text) {
        node::restore_placeholder(children, text);
    }

    Ok(removed)
}

/// Move an existing node under a new parent
pub fn relocate(
    tree: &mut CanvasTree,
    node_id: &str,
    new_parent: &DropTarget,
    position: Position,
) -> Result<(), MutationError> {
    if tree.would_create_cycle(node_id, new_parent) {
        return Err(MutationError::CycleDetected);
    }
    check_parent(tree, new_parent)?;

    let node = remove(tree, node_id)?;
    insert(tree, node, new_parent, position)
}
