use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReactorError {
    #[error("State vector index out of range: {index} (valid 0..{len})")]
    InvalidStateIndex { index: usize, len: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Snapshot mismatch: {0}")]
    SnapshotMismatch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ReactorResult<T> = Result<T, ReactorError>;
