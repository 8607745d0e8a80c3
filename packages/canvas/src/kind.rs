//! Element kinds carried by palette items and canvas nodes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic tag of a canvas element
///
/// Wire names follow the palette's `data-type` attribute: `row`, `col`,
/// `div` (older markup uses `div-element`). Anything else is a leaf control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElementKind {
    Row,
    Column,
    Div,
    Leaf(String),
}

impl ElementKind {
    pub fn parse(name: &str) -> Self {
        match name {
            "row" => ElementKind::Row,
            "col" | "column" => ElementKind::Column,
            "div" | "div-element" => ElementKind::Div,
            other => ElementKind::Leaf(other.to_string()),
        }
    }

    pub fn wire_name(&self) -> &str {
        match self {
            ElementKind::Row => "row",
            ElementKind::Column => "col",
            ElementKind::Div => "div",
            ElementKind::Leaf(name) => name,
        }
    }

    /// Whether nodes of this kind can hold children at all
    pub fn is_container(&self) -> bool {
        !matches!(self, ElementKind::Leaf(_))
    }

    /// Whether an empty node of this kind shows a placeholder child
    pub fn has_placeholder(&self) -> bool {
        matches!(self, ElementKind::Row)
    }

    /// Text a freshly created node starts with
    pub fn default_content(&self) -> Option<String> {
        match self {
            ElementKind::Row => None,
            ElementKind::Column => Some("New Column".to_string()),
            ElementKind::Div => Some("New Div".to_string()),
            ElementKind::Leaf(name) => Some(format!("Element: {}", name)),
        }
    }

    pub fn target_kind(&self) -> TargetKind {
        match self {
            ElementKind::Row => TargetKind::Row,
            ElementKind::Column => TargetKind::Column,
            ElementKind::Div => TargetKind::Div,
            ElementKind::Leaf(_) => TargetKind::Leaf,
        }
    }
}

impl From<String> for ElementKind {
    fn from(s: String) -> Self {
        ElementKind::parse(&s)
    }
}

impl From<&str> for ElementKind {
    fn from(s: &str) -> Self {
        ElementKind::parse(s)
    }
}

impl From<ElementKind> for String {
    fn from(kind: ElementKind) -> Self {
        kind.wire_name().to_string()
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Kind of a drop target, including the canvas surface itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Root,
    Row,
    Column,
    Div,
    Leaf,
}

impl TargetKind {
    pub const ALL: [TargetKind; 5] = [
        TargetKind::Root,
        TargetKind::Row,
        TargetKind::Column,
        TargetKind::Div,
        TargetKind::Leaf,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            TargetKind::Root => 0,
            TargetKind::Row => 1,
            TargetKind::Column => 2,
            TargetKind::Div => 3,
            TargetKind::Leaf => 4,
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetKind::Root => "canvas",
            TargetKind::Row => "row",
            TargetKind::Column => "col",
            TargetKind::Div => "div",
            TargetKind::Leaf => "leaf",
        };
        f.write_str(name)
    }
}

/// Where a dragged item came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Palette,
    Canvas,
}
