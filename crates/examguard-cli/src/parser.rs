//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Locate whitelisted third-party applications the way the exam client does.
#[derive(Parser)]
#[command(name = "examguard")]
#[command(about = "Resolve whitelisted applications to their executables")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}
