//! Request schema dump command.

use clap::{Args, ValueEnum};
use openvoice_pipeline::{StsRequest, TtsRequest};
use schemars::schema_for;

use crate::Cli;

#[derive(Clone, Copy, ValueEnum)]
enum PipelineKind {
    /// Text-to-speech with voice cloning
    Tts,
    /// Speech-to-speech voice conversion
    Sts,
}

/// Print the JSON schema of a pipeline request
#[derive(Args)]
pub struct SchemaCommand {
    /// Which pipeline request to describe
    #[arg(value_enum)]
    pipeline: PipelineKind,
}

impl SchemaCommand {
    pub async fn run(&self, _cli: &Cli) -> anyhow::Result<()> {
        let schema = match self.pipeline {
            PipelineKind::Tts => schema_for!(TtsRequest),
            PipelineKind::Sts => schema_for!(StsRequest),
        };
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }
}
