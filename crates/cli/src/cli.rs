use clap::{Parser, Subcommand};

/// A front end for native CTest unit-test executables
#[derive(Parser, Debug)]
#[command(name = "ctest-runner")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List test executables discovered under a path
    #[command(visible_alias = "l")]
    List {
        /// File or directory to scan for test executables
        path: String,

        /// Emit JSON instead of formatted output
        #[arg(short, long)]
        json: bool,
    },
    /// Run discovered test executables and report every contained case
    #[command(visible_alias = "r")]
    Run {
        /// File or directory to scan for test executables
        path: String,

        /// Emit the full result set as JSON instead of formatted output
        #[arg(short, long)]
        json: bool,
    },
}
