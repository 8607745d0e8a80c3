//! # Canvas Controller
//!
//! Ties the drag session, placement rules and mutations together into the
//! handlers a view calls on drag start/over/leave/drop/end and on delete.
//!
//! ```text
//! drag_start ─► DragSession::begin
//! drag_over  ─► rules::resolve_target ─► DropEffect + highlight
//! drop       ─► rules::resolve_target ─► Mutation::apply ─► DragSession::end
//! drag_end   ─► DragSession::end
//! ```

use crate::drag::{ActiveDrag, DragSession};
use crate::errors::CanvasError;
use crate::kind::{ElementKind, Origin};
use crate::mutations::{Mutation, Position};
use crate::node::CanvasNode;
use crate::registry::ElementRegistry;
use crate::rules::{self, Rejection, Resolution};
use crate::tree::{CanvasTree, DropTarget};
use serde::{Deserialize, Serialize};
use tesseract_common::DEFAULT_ID_PREFIX;

/// Cursor feedback for the item under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropEffect {
    Copy,
    Move,
    None,
}

/// Result of a drop
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// A palette template became a new node
    Created { id: String, parent: DropTarget },
    /// An existing node changed parent
    Moved { id: String, parent: DropTarget },
    /// The drop was refused; the tree is unchanged
    Rejected(Rejection),
    /// Nothing was being dragged
    Ignored,
}

impl DropOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, DropOutcome::Created { .. } | DropOutcome::Moved { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasOptions {
    pub resolution: Resolution,
    pub id_prefix: String,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct Canvas {
    tree: CanvasTree,
    registry: ElementRegistry,
    session: DragSession,
    resolution: Resolution,
    highlight: Option<DropTarget>,
    dragging: Option<String>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::with_options(CanvasOptions::default())
    }

    pub fn with_options(options: CanvasOptions) -> Self {
        Self {
            tree: CanvasTree::new(),
            registry: ElementRegistry::with_prefix(options.id_prefix),
            session: DragSession::new(),
            resolution: options.resolution,
            highlight: None,
            dragging: None,
        }
    }

    pub fn tree(&self) -> &CanvasTree {
        &self.tree
    }

    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Drop target currently showing the "drop allowed" highlight
    pub fn highlighted(&self) -> Option<&DropTarget> {
        self.highlight.as_ref()
    }

    /// Whether the canvas node carries the dragging style
    pub fn is_dragging(&self, id: &str) -> bool {
        self.dragging.as_deref() == Some(id)
    }

    /// Start dragging a template from the palette
    pub fn drag_start_palette(&mut self, kind: ElementKind) -> Result<(), CanvasError> {
        self.session.begin(None, kind, Origin::Palette)?;
        tracing::debug!("drag start from palette: {:?}", self.session.current());
        Ok(())
    }

    /// Start dragging an existing canvas node
    pub fn drag_start_node(&mut self, id: &str) -> Result<(), CanvasError> {
        let kind = self
            .tree
            .find(id)
            .map(|n| n.kind.clone())
            .ok_or_else(|| CanvasError::NodeNotFound(id.to_string()))?;

        self.session.begin(Some(id.to_string()), kind, Origin::Canvas)?;
        self.dragging = Some(id.to_string());
        tracing::debug!("drag start on canvas element {}", id);
        Ok(())
    }

    /// Pointer is over `target`; decide whether a drop would be accepted
    pub fn drag_over(&mut self, target: &DropTarget) -> DropEffect {
        let Some(active) = self.session.current() else {
            return DropEffect::None;
        };

        match self.resolve(active, target) {
            Ok(resolved) => {
                let effect = if active.is_from_palette() {
                    DropEffect::Copy
                } else {
                    DropEffect::Move
                };
                self.highlight = Some(resolved);
                effect
            }
            Err(_) => {
                self.highlight = None;
                DropEffect::None
            }
        }
    }

    /// Pointer left `target`
    pub fn drag_leave(&mut self, target: &DropTarget) {
        if self.highlight.as_ref() == Some(target) {
            self.highlight = None;
        }
    }

    /// Finish a drag over `target`
    ///
    /// A rejected drop leaves both the tree and the session alone; the view's
    /// drag-end handler clears the session afterwards.
    pub fn drop(&mut self, target: &DropTarget) -> Result<DropOutcome, CanvasError> {
        self.highlight = None;

        let Some(active) = self.session.current().cloned() else {
            return Ok(DropOutcome::Ignored);
        };

        let parent = match self.resolve(&active, target) {
            Ok(parent) => parent,
            Err(rejection) => {
                tracing::warn!("Drop rejected on {}: {}", target, rejection);
                return Ok(DropOutcome::Rejected(rejection));
            }
        };

        let outcome = match &active.node_id {
            None => {
                let node = self.registry.create_from_palette_kind(active.kind.clone());
                let id = node.id.clone();
                let mutation = Mutation::InsertElement {
                    parent: parent.clone(),
                    position: Position::Append,
                    element: node,
                };
                if let Err(err) = mutation.apply(&mut self.tree) {
                    if let Mutation::InsertElement { element, .. } = &mutation {
                        self.registry.release(element);
                    }
                    return Err(err.into());
                }
                tracing::info!("Created {} #{} in {}", active.kind, id, parent);
                DropOutcome::Created { id, parent }
            }
            Some(id) => {
                let mutation = Mutation::MoveElement {
                    node_id: id.clone(),
                    new_parent: parent.clone(),
                    position: Position::Append,
                };
                mutation.apply(&mut self.tree)?;
                tracing::info!("Moved #{} into {}", id, parent);
                DropOutcome::Moved {
                    id: id.clone(),
                    parent,
                }
            }
        };

        self.session.end();
        self.dragging = None;
        Ok(outcome)
    }

    /// Drag finished or was cancelled
    pub fn drag_end(&mut self) -> Option<ActiveDrag> {
        self.highlight = None;
        self.dragging = None;
        self.session.end()
    }

    /// Delete a node and its subtree
    pub fn delete(&mut self, id: &str) -> Result<CanvasNode, CanvasError> {
        let removed = Mutation::RemoveNode {
            node_id: id.to_string(),
        }
        .apply(&mut self.tree)?
        .ok_or_else(|| CanvasError::NodeNotFound(id.to_string()))?;

        self.registry.release(&removed);

        let dragged_removed = self
            .session
            .current()
            .and_then(|a| a.node_id.as_deref())
            .map(|dragged| removed.contains(dragged))
            .unwrap_or(false);
        if dragged_removed {
            self.drag_end();
        }
        let highlight_removed =
            matches!(&self.highlight, Some(DropTarget::Node(hl)) if removed.contains(hl));
        if highlight_removed {
            self.highlight = None;
        }

        tracing::info!("Element deleted: {}", id);
        Ok(removed)
    }

    /// Serialize the whole canvas tree
    pub fn to_json(&self) -> Result<String, CanvasError> {
        Ok(serde_json::to_string_pretty(&self.tree)?)
    }

    fn resolve(&self, active: &ActiveDrag, target: &DropTarget) -> Result<DropTarget, Rejection> {
        rules::resolve_target(
            &self.tree,
            &active.kind,
            active.node_id.as_deref(),
            target,
            self.resolution,
        )
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_over_without_session() {
        let mut canvas = Canvas::new();
        assert_eq!(canvas.drag_over(&DropTarget::Root), DropEffect::None);
        assert!(canvas.highlighted().is_none());
    }

    #[test]
    fn test_palette_drag_is_copy_canvas_drag_is_move() {
        let mut canvas = Canvas::new();
        canvas.drag_start_palette(ElementKind::Div).unwrap();
        assert_eq!(canvas.drag_over(&DropTarget::Root), DropEffect::Copy);
        assert_eq!(canvas.highlighted(), Some(&DropTarget::Root));
        canvas.drop(&DropTarget::Root).unwrap();

        canvas.drag_start_node("canvas-el-0").unwrap();
        assert!(canvas.is_dragging("canvas-el-0"));
        assert_eq!(canvas.drag_over(&DropTarget::Root), DropEffect::Move);
    }

    #[test]
    fn test_drag_leave_clears_highlight() {
        let mut canvas = Canvas::new();
        canvas.drag_start_palette(ElementKind::Row).unwrap();
        canvas.drag_over(&DropTarget::Root);
        canvas.drag_leave(&DropTarget::node("elsewhere"));
        assert!(canvas.highlighted().is_some());
        canvas.drag_leave(&DropTarget::Root);
        assert!(canvas.highlighted().is_none());
    }

    #[test]
    fn test_rejected_drop_keeps_session_until_drag_end() {
        let mut canvas = Canvas::new();
        canvas.drag_start_palette(ElementKind::Column).unwrap();

        let outcome = canvas.drop(&DropTarget::Root).unwrap();
        assert!(matches!(outcome, DropOutcome::Rejected(_)));
        assert!(canvas.session().is_active());
        assert!(canvas.tree().is_empty());

        assert!(canvas.drag_end().is_some());
        assert!(!canvas.session().is_active());
    }

    #[test]
    fn test_drop_without_session_is_ignored() {
        let mut canvas = Canvas::new();
        assert_eq!(canvas.drop(&DropTarget::Root).unwrap(), DropOutcome::Ignored);
    }

    #[test]
    fn test_drag_start_unknown_node() {
        let mut canvas = Canvas::new();
        assert!(matches!(
            canvas.drag_start_node("nope"),
            Err(CanvasError::NodeNotFound(_))
        ));
        assert!(!canvas.session().is_active());
    }

    #[test]
    fn test_deleting_dragged_node_ends_session() {
        let mut canvas = Canvas::new();
        canvas.drag_start_palette(ElementKind::Div).unwrap();
        canvas.drop(&DropTarget::Root).unwrap();

        canvas.drag_start_node("canvas-el-0").unwrap();
        canvas.delete("canvas-el-0").unwrap();

        assert!(!canvas.session().is_active());
        assert!(!canvas.is_dragging("canvas-el-0"));
        assert_eq!(canvas.registry().len(), 0);
    }
}
