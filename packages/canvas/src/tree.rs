//! # Canvas Tree
//!
//! The live layout being built. The canvas surface is the root container;
//! it owns the top-level nodes, each of which owns its children.
//!
//! Empty placeholder-bearing containers (the root and rows) always hold
//! exactly one placeholder child, and never a placeholder next to real
//! children.

use crate::kind::TargetKind;
use crate::node::{self, CanvasNode, Child};
use serde::{Deserialize, Serialize};
use std::fmt;

/// DOM id of the canvas surface
pub const ROOT_ID: &str = "canvas-area";

pub const ROOT_PLACEHOLDER: &str = "Drag and drop controls here to build your layout.";
pub const ROW_PLACEHOLDER: &str = "New Row (drop columns or other elements here)";

/// A container that can receive a drop: the canvas itself or a node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DropTarget {
    Root,
    Node(String),
}

impl DropTarget {
    pub fn node(id: impl Into<String>) -> Self {
        DropTarget::Node(id.into())
    }

    pub fn as_id(&self) -> &str {
        match self {
            DropTarget::Root => ROOT_ID,
            DropTarget::Node(id) => id,
        }
    }
}

impl From<String> for DropTarget {
    fn from(s: String) -> Self {
        if s == ROOT_ID {
            DropTarget::Root
        } else {
            DropTarget::Node(s)
        }
    }
}

impl From<&str> for DropTarget {
    fn from(s: &str) -> Self {
        DropTarget::from(s.to_string())
    }
}

impl From<DropTarget> for String {
    fn from(target: DropTarget) -> Self {
        target.as_id().to_string()
    }
}

impl fmt::Display for DropTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_id())
    }
}

/// Placeholder text shown by an empty container of this kind, if any
pub fn placeholder_text(kind: TargetKind) -> Option<&'static str> {
    match kind {
        TargetKind::Root => Some(ROOT_PLACEHOLDER),
        TargetKind::Row => Some(ROW_PLACEHOLDER),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasTree {
    pub children: Vec<Child>,
}

impl CanvasTree {
    /// Empty canvas showing its placeholder
    pub fn new() -> Self {
        Self {
            children: vec![Child::placeholder(ROOT_PLACEHOLDER)],
        }
    }

    /// Top-level nodes in order
    pub fn nodes(&self) -> impl Iterator<Item = &CanvasNode> {
        self.children.iter().filter_map(Child::as_node)
    }

    pub fn is_empty(&self) -> bool {
        !node::has_nodes(&self.children)
    }

    pub fn find(&self, id: &str) -> Option<&CanvasNode> {
        self.nodes().find_map(|n| n.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut CanvasNode> {
        self.children
            .iter_mut()
            .filter_map(Child::as_node_mut)
            .find_map(|n| n.find_mut(id))
    }

    pub fn contains(&self, target: &DropTarget) -> bool {
        match target {
            DropTarget::Root => true,
            DropTarget::Node(id) => self.find(id).is_some(),
        }
    }

    /// Kind of a drop target, `None` if the node does not exist
    pub fn target_kind(&self, target: &DropTarget) -> Option<TargetKind> {
        match target {
            DropTarget::Root => Some(TargetKind::Root),
            DropTarget::Node(id) => self.find(id).map(|n| n.kind.target_kind()),
        }
    }

    pub fn children_of(&self, target: &DropTarget) -> Option<&[Child]> {
        match target {
            DropTarget::Root => Some(&self.children),
            DropTarget::Node(id) => self.find(id).map(|n| n.children.as_slice()),
        }
    }

    pub fn children_of_mut(&mut self, target: &DropTarget) -> Option<&mut Vec<Child>> {
        match target {
            DropTarget::Root => Some(&mut self.children),
            DropTarget::Node(id) => self.find_mut(id).map(|n| &mut n.children),
        }
    }

    /// Container currently holding `id`
    pub fn parent_of(&self, id: &str) -> Option<DropTarget> {
        if self.nodes().any(|n| n.id == id) {
            return Some(DropTarget::Root);
        }
        self.nodes().find_map(|n| parent_within(n, id))
    }

    /// Chain of containers from the node's parent up to the root
    pub fn ancestors(&self, id: &str) -> Vec<DropTarget> {
        let mut chain = Vec::new();
        let mut current = id.to_string();
        while let Some(parent) = self.parent_of(&current) {
            chain.push(parent.clone());
            match parent {
                DropTarget::Root => break,
                DropTarget::Node(parent_id) => current = parent_id,
            }
        }
        chain
    }

    /// True if putting `node_id` under `target` would nest it in itself
    pub fn would_create_cycle(&self, node_id: &str, target: &DropTarget) -> bool {
        match target {
            DropTarget::Root => false,
            DropTarget::Node(target_id) => self
                .find(node_id)
                .map(|n| n.contains(target_id))
                .unwrap_or(false),
        }
    }

    /// Total number of real nodes on the canvas
    pub fn node_count(&self) -> usize {
        self.nodes().map(CanvasNode::subtree_len).sum()
    }

    /// Indented text rendering, one line per child slot
    pub fn outline(&self) -> String {
        let mut out = format!("#{}\n", ROOT_ID);
        write_children(&self.children, 1, &mut out);
        out
    }
}

impl Default for CanvasTree {
    fn default() -> Self {
        Self::new()
    }
}

fn parent_within(node: &CanvasNode, id: &str) -> Option<DropTarget> {
    if node.nodes().any(|n| n.id == id) {
        return Some(DropTarget::Node(node.id.clone()));
    }
    node.nodes().find_map(|n| parent_within(n, id))
}

fn write_children(children: &[Child], depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    for child in children {
        match child {
            Child::Placeholder { text } => {
                out.push_str(&format!("{}({})\n", indent, text));
            }
            Child::Node(node) => {
                out.push_str(&format!("{}{} #{}", indent, node.kind, node.id));
                if let Some(content) = &node.content {
                    out.push_str(&format!(" \"{}\"", content));
                }
                out.push('\n');
                write_children(&node.children, depth + 1, out);
            }
        }
    }
}
