//! Input-directory listing command.

use clap::Args;
use openvoice_pipeline::input_choices;
use std::path::PathBuf;

use crate::Cli;

/// List selectable audio files
#[derive(Args)]
pub struct InputsCommand {
    /// Input directory to enumerate
    #[arg(short, long)]
    dir: PathBuf,
}

impl InputsCommand {
    pub async fn run(&self, _cli: &Cli) -> anyhow::Result<()> {
        let files = input_choices(&self.dir)?;
        if files.is_empty() {
            eprintln!("no audio files (wav/mp3/flac) in {}", self.dir.display());
            return Ok(());
        }
        for file in files {
            println!("{file}");
        }
        Ok(())
    }
}
