//! Error types for the canvas

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("Drag error: {0}")]
    Drag(#[from] crate::drag::DragError),

    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
