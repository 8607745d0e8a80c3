//! Error types for the flow editor

use tesseract_common::CommonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("{0}")]
    Common(#[from] CommonError),

    #[error("Malformed {event} payload: {source}")]
    MalformedPayload {
        event: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Edge not found: {0}")]
    EdgeNotFound(String),
}
