//! # Tesseract Content
//!
//! Rich-text page content: the document tree, and the editor adapter that
//! autosaves it after a quiet period.
//!
//! ```rust
//! use std::sync::Arc;
//! use tesseract_common::RecordingSink;
//! use tesseract_content::ContentEditor;
//!
//! let sink = Arc::new(RecordingSink::new());
//! let mut editor = ContentEditor::mount(
//!     Some(r#"{"type":"doc","content":[{"type":"paragraph","content":[{"type":"text","text":"Hi"}]}]}"#),
//!     true,
//!     sink.clone(),
//!     std::time::Duration::from_millis(1000),
//! )
//! .unwrap();
//!
//! assert_eq!(editor.document().plain_text(), "Hi");
//! editor.save_now().unwrap();
//! assert_eq!(sink.names(), vec!["save_content"]);
//! ```

mod debounce;
mod doc;
mod editor;
mod errors;

pub use debounce::{Debouncer, DEFAULT_QUIET_PERIOD};
pub use doc::{DocNode, Mark, EMPTY_PLACEHOLDER};
pub use editor::{ContentEditor, SAVE_CONTENT_EVENT};
pub use errors::ContentError;
