//! Serializable canvas interactions, used to replay recorded sessions and
//! to drive the canvas from the browser bindings.

use crate::canvas::{Canvas, DropEffect, DropOutcome};
use crate::errors::CanvasError;
use crate::kind::ElementKind;
use crate::tree::DropTarget;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CanvasAction {
    DragStartPalette { kind: ElementKind },
    DragStart { id: String },
    DragOver { target: DropTarget },
    DragLeave { target: DropTarget },
    Drop { target: DropTarget },
    DragEnd,
    Delete { id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    Started,
    Effect(DropEffect),
    Left,
    Dropped(DropOutcome),
    Ended,
    Deleted(String),
}

impl Canvas {
    pub fn dispatch(&mut self, action: &CanvasAction) -> Result<ActionResult, CanvasError> {
        match action {
            CanvasAction::DragStartPalette { kind } => {
                self.drag_start_palette(kind.clone())?;
                Ok(ActionResult::Started)
            }
            CanvasAction::DragStart { id } => {
                self.drag_start_node(id)?;
                Ok(ActionResult::Started)
            }
            CanvasAction::DragOver { target } => Ok(ActionResult::Effect(self.drag_over(target))),
            CanvasAction::DragLeave { target } => {
                self.drag_leave(target);
                Ok(ActionResult::Left)
            }
            CanvasAction::Drop { target } => Ok(ActionResult::Dropped(self.drop(target)?)),
            CanvasAction::DragEnd => {
                self.drag_end();
                Ok(ActionResult::Ended)
            }
            CanvasAction::Delete { id } => {
                let removed = self.delete(id)?;
                Ok(ActionResult::Deleted(removed.id))
            }
        }
    }

    /// Run a whole script, stopping at the first error
    pub fn replay(&mut self, actions: &[CanvasAction]) -> Result<Vec<ActionResult>, CanvasError> {
        actions.iter().map(|a| self.dispatch(a)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let script = r#"[
            { "action": "drag_start_palette", "kind": "row" },
            { "action": "drag_over", "target": "canvas-area" },
            { "action": "drop", "target": "canvas-area" },
            { "action": "drag_end" }
        ]"#;
        let actions: Vec<CanvasAction> = serde_json::from_str(script).unwrap();
        assert_eq!(actions.len(), 4);
        assert_eq!(
            actions[0],
            CanvasAction::DragStartPalette {
                kind: ElementKind::Row
            }
        );
        assert_eq!(
            actions[2],
            CanvasAction::Drop {
                target: DropTarget::Root
            }
        );
    }

    #[test]
    fn test_replay_builds_tree() {
        let mut canvas = Canvas::new();
        let results = canvas
            .replay(&[
                CanvasAction::DragStartPalette {
                    kind: ElementKind::Row,
                },
                CanvasAction::DragOver {
                    target: DropTarget::Root,
                },
                CanvasAction::Drop {
                    target: DropTarget::Root,
                },
                CanvasAction::DragEnd,
            ])
            .unwrap();

        assert_eq!(results[1], ActionResult::Effect(DropEffect::Copy));
        assert!(matches!(&results[2], ActionResult::Dropped(o) if o.is_accepted()));
        assert_eq!(canvas.tree().node_count(), 1);
    }
}
