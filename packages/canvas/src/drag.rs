//! # Drag Session
//!
//! Records what is being dragged and where it came from. There is one
//! pointer, so at most one session is active; it is owned by the canvas
//! controller and handed to event handlers by reference.

use crate::kind::{ElementKind, Origin};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DragError {
    #[error("Invalid state: a drag of {0} is already in progress")]
    InvalidState(String),
}

/// The item currently under the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveDrag {
    /// Canvas node being moved; `None` for palette templates
    pub node_id: Option<String>,
    pub kind: ElementKind,
    pub origin: Origin,
}

impl ActiveDrag {
    pub fn is_from_palette(&self) -> bool {
        self.origin == Origin::Palette
    }

    fn describe(&self) -> String {
        match &self.node_id {
            Some(id) => format!("{} #{}", self.kind, id),
            None => format!("palette {}", self.kind),
        }
    }
}

#[derive(Debug, Default)]
pub struct DragSession {
    active: Option<ActiveDrag>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag; fails if one is already running
    pub fn begin(
        &mut self,
        node_id: Option<String>,
        kind: ElementKind,
        origin: Origin,
    ) -> Result<&ActiveDrag, DragError> {
        if let Some(active) = &self.active {
            return Err(DragError::InvalidState(active.describe()));
        }
        Ok(self.active.insert(ActiveDrag {
            node_id,
            kind,
            origin,
        }))
    }

    pub fn current(&self) -> Option<&ActiveDrag> {
        self.active.as_ref()
    }

    /// Clear the session, returning what was being dragged
    pub fn end(&mut self) -> Option<ActiveDrag> {
        self.active.take()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}
