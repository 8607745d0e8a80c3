//! # Tesseract Canvas
//!
//! Layout-canvas core for the Tesseract Studio page builder: the tree of
//! rows, columns, divs and leaf controls, and the drag-and-drop rules that
//! decide what may be nested where.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ view: DOM drag events, CSS classes          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ canvas: drop controller                     │
//! │  - DragSession (one active drag)            │
//! │  - rules (placement matrix, target lookup)  │
//! │  - mutations (insert / move / remove)       │
//! │  - ElementRegistry (ids, palette templates) │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ CanvasTree: nodes + placeholders            │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tesseract_canvas::{Canvas, DropTarget, ElementKind};
//!
//! let mut canvas = Canvas::new();
//!
//! canvas.drag_start_palette(ElementKind::Row).unwrap();
//! let outcome = canvas.drop(&DropTarget::Root).unwrap();
//! assert!(outcome.is_accepted());
//!
//! canvas.drag_start_palette(ElementKind::Column).unwrap();
//! canvas.drop(&DropTarget::node("canvas-el-0")).unwrap();
//!
//! let row = canvas.tree().find("canvas-el-0").unwrap();
//! assert_eq!(row.node_ids(), vec!["canvas-el-1"]);
//! assert_eq!(row.placeholder_count(), 0);
//! ```

mod actions;
mod canvas;
mod drag;
mod errors;
mod kind;
mod mutations;
mod node;
mod registry;
mod rules;
mod tree;

pub use actions::{ActionResult, CanvasAction};
pub use canvas::{Canvas, CanvasOptions, DropEffect, DropOutcome};
pub use drag::{ActiveDrag, DragError, DragSession};
pub use errors::CanvasError;
pub use kind::{ElementKind, Origin, TargetKind};
pub use mutations::{insert, relocate, remove, Mutation, MutationError, Position};
pub use node::{CanvasNode, Child};
pub use registry::ElementRegistry;
pub use rules::{can_place, resolve_target, Rejection, Resolution};
pub use tree::{
    placeholder_text, CanvasTree, DropTarget, ROOT_ID, ROOT_PLACEHOLDER, ROW_PLACEHOLDER,
};
