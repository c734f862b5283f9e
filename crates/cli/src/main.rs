use anyhow::Result;
use clap::Parser;

use ctest_runner::cli::{Cli, Commands};
use ctest_runner::commands::{list_command, run_command};

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { path, json } => list_command(&path, json),
        Commands::Run { path, json } => run_command(&path, json),
    }
}
