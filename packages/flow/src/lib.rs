//! # Tesseract Flow
//!
//! State behind the page-flow editor: pages, the transitions between them,
//! and the intents sent to the server when the user edits the graph.
//!
//! ```rust
//! use std::sync::Arc;
//! use tesseract_common::RecordingSink;
//! use tesseract_flow::FlowEditor;
//!
//! let sink = Arc::new(RecordingSink::new());
//! let mut editor = FlowEditor::new("my-site", sink.clone());
//!
//! let home = editor.add_page().unwrap();
//! let about = editor.add_page().unwrap();
//! editor.connect(&home.id, &about.id).unwrap();
//!
//! assert_eq!(sink.names(), vec!["add_page", "add_page", "add_edge"]);
//! assert_eq!(editor.page_url(&about), "/p/my-site/page-2");
//! ```

mod actions;
mod editor;
mod errors;
mod intents;
mod model;
mod node_drag;

pub use actions::FlowAction;
pub use editor::{FlowEditor, FlowStats, FlowUpdate, FALLBACK_PROJECT_SLUG, UPDATE_FLOW_EVENT};
pub use errors::FlowError;
pub use intents::FlowIntent;
pub use model::{Edge, Page, PageData, Point};
pub use node_drag::NodeDrag;
