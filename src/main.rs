//! fsprovider - file-backed resource provider
//!
//! Command line front end: loads resources from files and directories, and
//! prints the watch targets for a set of paths.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use fsprovider::cli::{Cli, Commands};
use fsprovider::commands;
use fsprovider::config::{ConfigLoader, ProviderConfig};
use fsprovider::error::{ProviderError, Result};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(explicit: Option<PathBuf>) -> Result<ProviderConfig> {
    let working_dir = std::env::current_dir().map_err(|e| ProviderError::IoError {
        message: format!("Failed to get current directory: {e}"),
    })?;

    ConfigLoader::new(working_dir).with_explicit(explicit).load()
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Load(args) => commands::load::run(load_config(cli.config)?, args),
        Commands::Targets(args) => commands::targets::run(load_config(cli.config)?, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
