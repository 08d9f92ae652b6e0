//! Model snapshot resolution.
//!
//! Resolves the local checkpoint root, fetching a full snapshot from
//! the model registry when the root is missing. A present directory is
//! trusted as-is and never re-validated or re-fetched; callers bear the
//! correctness risk of an interrupted earlier fetch.

use crate::StoreError;
use async_trait::async_trait;
use hf_hub::api::tokio::Api;
use std::path::Path;
use tracing::{debug, info};

/// Default registry repository holding the OpenVoice checkpoints.
pub const DEFAULT_REPO_ID: &str = "Alignment-Lab-AI/OpenVoice";

/// Fetches a complete snapshot of a registry repository.
#[async_trait]
pub trait SnapshotFetcher: Send + Sync {
    /// Downloads every file of `repo_id` into `dest` as real files,
    /// never symlinks into the download cache.
    async fn fetch(&self, repo_id: &str, dest: &Path) -> Result<(), StoreError>;
}

/// Snapshot fetcher backed by the Hugging Face hub.
#[derive(Debug, Default, Clone, Copy)]
pub struct HubFetcher;

fn download_error(repo_id: &str, e: impl std::fmt::Display) -> StoreError {
    StoreError::Download {
        repo_id: repo_id.to_string(),
        reason: e.to_string(),
    }
}

#[async_trait]
impl SnapshotFetcher for HubFetcher {
    async fn fetch(&self, repo_id: &str, dest: &Path) -> Result<(), StoreError> {
        let api = Api::new().map_err(|e| download_error(repo_id, e))?;
        let repo = api.model(repo_id.to_string());
        let repo_info = repo.info().await.map_err(|e| download_error(repo_id, e))?;

        info!(repo_id = %repo_id, files = repo_info.siblings.len(), "fetching model snapshot");
        for sibling in &repo_info.siblings {
            let cached = repo
                .get(&sibling.rfilename)
                .await
                .map_err(|e| download_error(repo_id, e))?;
            let target = dest.join(&sibling.rfilename);
            if let Some(parent) = target.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            // Copy out of the hub cache so the snapshot does not depend
            // on cache residency.
            tokio::fs::copy(&cached, &target).await?;
            debug!(file = %sibling.rfilename, "fetched");
        }
        Ok(())
    }
}

/// Resolves the local checkpoint root, fetching it when absent.
pub struct ModelStore<F = HubFetcher> {
    repo_id: String,
    fetcher: F,
}

impl ModelStore<HubFetcher> {
    /// Store for `repo_id` using the hub fetcher.
    pub fn new(repo_id: impl Into<String>) -> Self {
        Self::with_fetcher(repo_id, HubFetcher)
    }
}

impl Default for ModelStore<HubFetcher> {
    fn default() -> Self {
        Self::new(DEFAULT_REPO_ID)
    }
}

impl<F: SnapshotFetcher> ModelStore<F> {
    /// Store with a custom snapshot fetcher.
    pub fn with_fetcher(repo_id: impl Into<String>, fetcher: F) -> Self {
        Self {
            repo_id: repo_id.into(),
            fetcher,
        }
    }

    pub fn repo_id(&self) -> &str {
        &self.repo_id
    }

    /// Ensures `local_root` holds a checkpoint snapshot.
    ///
    /// Idempotent: an existing directory is trusted without
    /// re-validation. A fetch failure is fatal for the pipeline run.
    pub async fn resolve(&self, local_root: &Path) -> Result<(), StoreError> {
        if local_root.is_dir() {
            debug!(root = %local_root.display(), "checkpoint root present, skipping fetch");
            return Ok(());
        }
        info!(
            root = %local_root.display(),
            repo_id = %self.repo_id,
            "checkpoint root missing, fetching snapshot"
        );
        self.fetcher.fetch(&self.repo_id, local_root).await
    }
}
