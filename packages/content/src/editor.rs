//! # Content Editor
//!
//! State behind a rich-text editing surface. The document is read from the
//! mount attributes once; afterwards the editor owns it and the server only
//! toggles editability. Edits are saved back through a debounced
//! `save_content` event, and an explicit save flushes immediately.

use crate::debounce::{Debouncer, DEFAULT_QUIET_PERIOD};
use crate::doc::DocNode;
use crate::errors::ContentError;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tesseract_common::{EventSink, OutboundEvent};

pub const SAVE_CONTENT_EVENT: &str = "save_content";

#[derive(Serialize)]
struct SavePayload<'a> {
    content: &'a DocNode,
}

fn save_event(doc: &DocNode) -> Result<OutboundEvent, ContentError> {
    Ok(OutboundEvent::from_payload(
        SAVE_CONTENT_EVENT,
        &SavePayload { content: doc },
    )?)
}

pub struct ContentEditor {
    doc: DocNode,
    editable: bool,
    sink: Arc<dyn EventSink>,
    autosave: Debouncer,
}

impl std::fmt::Debug for ContentEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentEditor")
            .field("doc", &self.doc)
            .field("editable", &self.editable)
            .field("autosave", &self.autosave)
            .finish_non_exhaustive()
    }
}

impl ContentEditor {
    pub fn new(doc: DocNode, editable: bool, sink: Arc<dyn EventSink>) -> Self {
        Self::with_quiet_period(doc, editable, sink, DEFAULT_QUIET_PERIOD)
    }

    pub fn with_quiet_period(
        doc: DocNode,
        editable: bool,
        sink: Arc<dyn EventSink>,
        quiet: Duration,
    ) -> Self {
        Self {
            doc,
            editable,
            sink,
            autosave: Debouncer::new(quiet),
        }
    }

    /// Build the editor from the `content` and `editable` mount attributes
    pub fn mount(
        content: Option<&str>,
        editable: bool,
        sink: Arc<dyn EventSink>,
        quiet: Duration,
    ) -> Result<Self, ContentError> {
        let doc = DocNode::parse(content).map_err(|err| {
            tracing::warn!("Rejected content attribute: {}", err);
            ContentError::MalformedContent(err)
        })?;
        Ok(Self::with_quiet_period(doc, editable, sink, quiet))
    }

    pub fn document(&self) -> &DocNode {
        &self.doc
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn has_pending_save(&self) -> bool {
        self.autosave.is_pending()
    }

    /// The view re-rendered; only editability is taken from it
    pub fn update(&mut self, editable: bool) {
        if self.editable != editable {
            tracing::debug!("content editor editable = {}", editable);
        }
        self.editable = editable;
    }

    /// The user changed the document
    pub fn edit(&mut self, doc: DocNode) -> Result<(), ContentError> {
        if !self.editable {
            return Err(ContentError::ReadOnly);
        }
        if tokio::runtime::Handle::try_current().is_err() {
            return Err(ContentError::NoRuntime);
        }

        self.doc = doc;
        let event = save_event(&self.doc)?;
        let sink = self.sink.clone();
        self.autosave.schedule(move || {
            tracing::debug!("autosave firing");
            if let Err(err) = sink.push_event(event) {
                tracing::warn!("Autosave failed: {}", err);
            }
        });
        Ok(())
    }

    /// Save right away, dropping any pending autosave
    pub fn save_now(&mut self) -> Result<(), ContentError> {
        self.autosave.cancel();
        self.sink.push_event(save_event(&self.doc)?)?;
        tracing::info!("Content saved");
        Ok(())
    }

    /// Keyboard handler; Ctrl+S or Cmd+S saves. Returns whether the key was
    /// consumed.
    pub fn key_down(&mut self, key: &str, ctrl: bool, meta: bool) -> Result<bool, ContentError> {
        if (ctrl || meta) && key == "s" {
            self.save_now()?;
            return Ok(true);
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tesseract_common::RecordingSink;

    fn editor(editable: bool) -> (ContentEditor, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        (ContentEditor::new(DocNode::empty(), editable, sink.clone()), sink)
    }

    #[test]
    fn test_read_only_rejects_edits() {
        let (mut editor, sink) = editor(false);
        let result = editor.edit(DocNode::new("doc"));
        assert!(matches!(result, Err(ContentError::ReadOnly)));
        assert_eq!(editor.document(), &DocNode::empty());
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_edit_outside_runtime() {
        let (mut editor, _) = editor(true);
        assert!(matches!(
            editor.edit(DocNode::new("doc")),
            Err(ContentError::NoRuntime)
        ));
    }

    #[test]
    fn test_update_keeps_document() {
        let (mut editor, _) = editor(true);
        editor.update(false);
        assert!(!editor.is_editable());
        assert_eq!(editor.document(), &DocNode::empty());
    }

    #[test]
    fn test_ctrl_s_saves() {
        let (mut editor, sink) = editor(false);
        assert!(!editor.key_down("s", false, false).unwrap());
        assert!(editor.key_down("s", false, true).unwrap());
        assert_eq!(sink.names(), vec!["save_content"]);
        assert_eq!(sink.events()[0].payload["content"]["type"], "doc");
    }
}
