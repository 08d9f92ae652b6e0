//! Checkpoint fetch command.

use clap::Args;
use openvoice_models::{DEFAULT_REPO_ID, ModelStore};
use std::path::PathBuf;

use crate::Cli;

/// Fetch the checkpoint snapshot
#[derive(Args)]
pub struct FetchCommand {
    /// Local checkpoint root
    #[arg(short, long)]
    root: PathBuf,

    /// Registry repository id
    #[arg(long, default_value = DEFAULT_REPO_ID)]
    repo: String,
}

impl FetchCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        if cli.verbose {
            tracing::debug!(repo = %self.repo, root = %self.root.display(), "resolving checkpoints");
        }
        let store = ModelStore::new(self.repo.clone());
        store.resolve(&self.root).await?;
        println!("checkpoints ready at {}", self.root.display());
        Ok(())
    }
}
