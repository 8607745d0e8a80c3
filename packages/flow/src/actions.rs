//! Scripted flow-editor interactions, used by the CLI replay command.
//!
//! Pages created during a replay get wall-clock ids, so actions refer to
//! pages by id, label or slug.

use crate::editor::FlowEditor;
use crate::errors::FlowError;
use crate::model::Point;
use serde::Deserialize;
use tesseract_common::InboundEvent;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FlowAction {
    AddPage {
        #[serde(default)]
        at: Option<Point>,
    },
    MovePage {
        page: String,
        x: f64,
        y: f64,
    },
    DeletePages {
        pages: Vec<String>,
    },
    Connect {
        source: String,
        target: String,
    },
    DeleteEdges {
        edges: Vec<String>,
    },
    /// Simulate a server push
    UpdateFlow {
        payload: serde_json::Value,
    },
}

impl FlowEditor {
    /// Find a page id by id, label or slug
    pub fn lookup(&self, key: &str) -> Result<String, FlowError> {
        self.pages()
            .iter()
            .find(|p| p.id == key)
            .or_else(|| self.pages().iter().find(|p| p.label == key || p.slug == key))
            .map(|p| p.id.clone())
            .ok_or_else(|| FlowError::PageNotFound(key.to_string()))
    }

    pub fn dispatch(&mut self, action: &FlowAction) -> Result<(), FlowError> {
        match action {
            FlowAction::AddPage { at } => {
                match at {
                    Some(point) => self.add_page_at(*point)?,
                    None => self.add_page()?,
                };
            }
            FlowAction::MovePage { page, x, y } => {
                let id = self.lookup(page)?;
                self.move_page(&id, *x, *y)?;
            }
            FlowAction::DeletePages { pages } => {
                let ids = pages
                    .iter()
                    .map(|p| self.lookup(p))
                    .collect::<Result<Vec<_>, _>>()?;
                self.delete_pages(&ids)?;
            }
            FlowAction::Connect { source, target } => {
                let source = self.lookup(source)?;
                let target = self.lookup(target)?;
                self.connect(&source, &target)?;
            }
            FlowAction::DeleteEdges { edges } => {
                self.delete_edges(edges)?;
            }
            FlowAction::UpdateFlow { payload } => {
                self.handle_event(&InboundEvent::new(
                    crate::editor::UPDATE_FLOW_EVENT,
                    payload.clone(),
                ))?;
            }
        }
        Ok(())
    }

    pub fn replay(&mut self, actions: &[FlowAction]) -> Result<(), FlowError> {
        actions.iter().try_for_each(|a| self.dispatch(a))
    }
}
