//! OpenVoice CLI - developer tooling around the voice pipelines.
//!
//! The pipelines themselves run against externally provided model
//! bundles; this tool covers what can run standalone: fetching the
//! checkpoint snapshot, listing selectable input files, and dumping the
//! request schemas a host consumes.

use clap::{Parser, Subcommand};

mod commands;

use commands::{FetchCommand, InputsCommand, SchemaCommand};

/// OpenVoice CLI.
#[derive(Parser)]
#[command(name = "openvoice")]
#[command(about = "OpenVoice checkpoint and input tooling")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the checkpoint snapshot into a local root
    Fetch(FetchCommand),
    /// List selectable audio files in an input directory
    Inputs(InputsCommand),
    /// Print the JSON schema of a pipeline request
    Schema(SchemaCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    match &cli.command {
        Commands::Fetch(cmd) => cmd.run(&cli).await,
        Commands::Inputs(cmd) => cmd.run(&cli).await,
        Commands::Schema(cmd) => cmd.run(&cli).await,
    }
}
