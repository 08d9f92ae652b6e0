use openvoice_audio::AudioError;
use openvoice_models::{ModelError, StoreError};
use thiserror::Error;

/// Errors surfaced by a pipeline run.
///
/// There is no retry or degraded-mode path: every failure aborts the
/// run and surfaces to the caller unchanged.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("language {0} is not supported")]
    UnsupportedLanguage(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("audio error: {0}")]
    Audio(#[from] AudioError),
}
