//! Pipeline configuration.

use openvoice_models::{DEFAULT_REPO_ID, DevicePreference};
use std::path::PathBuf;

/// Explicit configuration passed into pipeline construction.
///
/// Replaces ambient install/temp directory lookups: callers state where
/// checkpoints live, where input files are selected from, and where
/// scratch files go.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Local checkpoint root; fetched from the registry when missing.
    pub checkpoint_root: PathBuf,
    /// Caller-controlled directory voice files are selected from.
    pub input_dir: PathBuf,
    /// Scratch directory for intermediate and output waveforms. May be
    /// shared by concurrent runs; files are namespaced per run.
    pub workspace_dir: PathBuf,
    /// Device preference, applied once per bundle construction.
    pub device_preference: DevicePreference,
    /// Registry repository the checkpoint snapshot is fetched from.
    pub repo_id: String,
}

impl PipelineConfig {
    pub fn new(
        checkpoint_root: impl Into<PathBuf>,
        input_dir: impl Into<PathBuf>,
        workspace_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            checkpoint_root: checkpoint_root.into(),
            input_dir: input_dir.into(),
            workspace_dir: workspace_dir.into(),
            device_preference: DevicePreference::default(),
            repo_id: DEFAULT_REPO_ID.to_string(),
        }
    }

    pub fn with_device_preference(mut self, preference: DevicePreference) -> Self {
        self.device_preference = preference;
        self
    }

    pub fn with_repo_id(mut self, repo_id: impl Into<String>) -> Self {
        self.repo_id = repo_id.into();
        self
    }
}
