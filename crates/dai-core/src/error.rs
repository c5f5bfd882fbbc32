//! Error type shared by the dai-core modules

use thiserror::Error;

/// Errors raised by dai-core
#[derive(Debug, Error)]
pub enum DaiError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type DaiResult<T> = Result<T, DaiError>;
