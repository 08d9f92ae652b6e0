use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by audio file operations.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed audio file {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(PathBuf),
}
