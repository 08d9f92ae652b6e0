use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the model store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("download of {repo_id} failed: {reason}")]
    Download { repo_id: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors returned by model bundles.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to load checkpoint {path}: {reason}")]
    Load { path: PathBuf, reason: String },

    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("synthesis failed: {0}")]
    Synthesis(String),

    #[error("conversion failed: {0}")]
    Conversion(String),
}
