//! # Element Registry
//!
//! Hands out canvas element IDs and builds fresh nodes from palette kinds.
//! Every node currently on the canvas is registered here; deleting a node
//! releases its whole subtree.

use crate::kind::{ElementKind, Origin};
use crate::node::{CanvasNode, Child};
use crate::tree::ROW_PLACEHOLDER;
use std::collections::HashSet;
use tesseract_common::IdGenerator;

#[derive(Debug, Default)]
pub struct ElementRegistry {
    ids: IdGenerator,
    live: HashSet<String>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            ids: IdGenerator::new(prefix),
            live: HashSet::new(),
        }
    }

    /// Build a new node for a palette template
    ///
    /// The node gets a fresh ID, the default text for its kind, a delete
    /// affordance, and (for rows) the empty-row placeholder.
    pub fn create_from_palette_kind(&mut self, kind: ElementKind) -> CanvasNode {
        let id = self.ids.new_id();
        let mut node = CanvasNode::new(id.clone(), kind, Origin::Palette);
        node.deletable = true;
        if node.kind.has_placeholder() {
            node.children.push(Child::placeholder(ROW_PLACEHOLDER));
        }
        self.live.insert(id);
        node
    }

    /// Forget every ID in a removed subtree
    pub fn release(&mut self, node: &CanvasNode) -> usize {
        let mut ids = Vec::new();
        node.collect_ids(&mut ids);
        ids.iter().filter(|id| self.live.remove(id.as_str())).count()
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.live.contains(id)
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
