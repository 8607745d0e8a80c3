use crate::kind::{ElementKind, Origin};
use serde::{Deserialize, Serialize};

/// Child slot of a container: a real element or the empty-state placeholder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Child {
    Node(CanvasNode),
    Placeholder { text: String },
}

impl Child {
    pub fn placeholder(text: impl Into<String>) -> Self {
        Child::Placeholder { text: text.into() }
    }

    pub fn as_node(&self) -> Option<&CanvasNode> {
        match self {
            Child::Node(node) => Some(node),
            Child::Placeholder { .. } => None,
        }
    }

    pub fn as_node_mut(&mut self) -> Option<&mut CanvasNode> {
        match self {
            Child::Node(node) => Some(node),
            Child::Placeholder { .. } => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Child::Placeholder { .. })
    }
}

/// Element on the layout canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasNode {
    pub id: String,
    pub kind: ElementKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Carries a delete affordance
    #[serde(default)]
    pub deletable: bool,
    pub origin: Origin,
    #[serde(default)]
    pub children: Vec<Child>,
}

impl CanvasNode {
    pub fn new(id: impl Into<String>, kind: ElementKind, origin: Origin) -> Self {
        Self {
            id: id.into(),
            content: kind.default_content(),
            kind,
            deletable: false,
            origin,
            children: Vec::new(),
        }
    }

    /// Real (non-placeholder) children in order
    pub fn nodes(&self) -> impl Iterator<Item = &CanvasNode> {
        self.children.iter().filter_map(Child::as_node)
    }

    pub fn node_ids(&self) -> Vec<&str> {
        self.nodes().map(|n| n.id.as_str()).collect()
    }

    pub fn placeholder_count(&self) -> usize {
        placeholder_count(&self.children)
    }

    pub fn find(&self, id: &str) -> Option<&CanvasNode> {
        if self.id == id {
            return Some(self);
        }
        self.nodes().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut CanvasNode> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .iter_mut()
            .filter_map(Child::as_node_mut)
            .find_map(|child| child.find_mut(id))
    }

    /// True if `id` is this node or one of its descendants
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Number of nodes in this subtree, including self
    pub fn subtree_len(&self) -> usize {
        1 + self.nodes().map(CanvasNode::subtree_len).sum::<usize>()
    }

    /// Collect every ID in this subtree, depth first
    pub fn collect_ids(&self, out: &mut Vec<String>) {
        out.push(self.id.clone());
        for child in self.nodes() {
            child.collect_ids(out);
        }
    }
}

pub(crate) fn placeholder_count(children: &[Child]) -> usize {
    children.iter().filter(|c| c.is_placeholder()).count()
}

pub(crate) fn has_nodes(children: &[Child]) -> bool {
    children.iter().any(|c| !c.is_placeholder())
}

/// Drop every placeholder, returning how many were removed
pub(crate) fn clear_placeholders(children: &mut Vec<Child>) -> usize {
    let before = children.len();
    children.retain(|c| !c.is_placeholder());
    before - children.len()
}

/// Make an empty container show exactly one placeholder
pub(crate) fn restore_placeholder(children: &mut Vec<Child>, text: &str) -> bool {
    if has_nodes(children) || placeholder_count(children) == 1 {
        return false;
    }
    children.clear();
    children.push(Child::placeholder(text));
    true
}
