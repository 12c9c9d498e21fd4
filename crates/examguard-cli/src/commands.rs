//! Subcommand definitions.

use clap::{Args, Subcommand};
use examguard_core::ApplicationDescriptor;

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve an application and report the outcome
    Resolve(DescriptorArgs),
    /// List the candidate paths that would be searched, in order
    Candidates(DescriptorArgs),
}

/// A whitelist entry given on the command line or through the environment.
#[derive(Args, Debug, Clone)]
pub struct DescriptorArgs {
    /// Name shown to the user
    #[arg(long, env = "EXAMGUARD_DISPLAY_NAME")]
    pub display_name: String,

    /// File name of the main executable (e.g. calc.exe)
    #[arg(long, env = "EXAMGUARD_EXECUTABLE_NAME")]
    pub executable_name: String,

    /// Install-path hint, relative to the standard folders or absolute
    #[arg(long, env = "EXAMGUARD_EXECUTABLE_PATH")]
    pub executable_path: Option<String>,
}

impl From<DescriptorArgs> for ApplicationDescriptor {
    fn from(args: DescriptorArgs) -> Self {
        Self {
            display_name: args.display_name,
            executable_name: args.executable_name,
            executable_path: args.executable_path,
        }
    }
}
