use thiserror::Error;

/// Common error type shared by the builder packages
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Payload error: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Event sink closed")]
    SinkClosed,
}
