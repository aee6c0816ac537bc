//! Crate-wide error type.

use thiserror::Error;

/// Every failure the graph builder, the store layer, and the service can
/// surface. The `Display` text is what HTTP callers see in a 500 body.
#[derive(Debug, Error)]
pub enum WnjGraphError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("background task failed: {0}")]
    Task(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, WnjGraphError>;
