//! CLI entry point - the composition root.
//!
//! This is the ONLY place where the system ports are wired into a factory.

use clap::Parser;
use examguard_apps::ApplicationFactory;
use examguard_cli::{Cli, Commands, handlers, logging};

fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads EXAMGUARD_* fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let factory = ApplicationFactory::system();
    tracing::debug!("Application factory initialized");

    match cli.command {
        Commands::Resolve(args) => {
            let kind = handlers::resolve::execute(&factory, args, cli.json)?;
            let code = handlers::resolve::exit_code(kind);
            if code != 0 {
                std::process::exit(code);
            }
        }
        Commands::Candidates(args) => {
            handlers::candidates::execute(&factory, args, cli.json)?;
        }
    }

    Ok(())
}
