use tesseract_common::CommonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("{0}")]
    Common(#[from] CommonError),

    #[error("Malformed content document: {0}")]
    MalformedContent(#[source] serde_json::Error),

    #[error("Editor is read-only")]
    ReadOnly,

    #[error("Autosave needs a tokio runtime")]
    NoRuntime,
}
