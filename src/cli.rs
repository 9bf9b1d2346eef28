//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

/// fsprovider - file-backed resource provider
///
/// Load declarative resources from files and directory trees, and compute
/// the directories a watcher has to observe.
#[derive(Parser, Debug)]
#[command(
    name = "fsprovider",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Load declarative resources from a filesystem tree",
    long_about = "fsprovider loads YAML resources from explicit files and recursively from \
                  directories (hidden entries are skipped), and reports which directories and \
                  files have to be watched for changes.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  fsprovider load ./conf\n    \
                  fsprovider load ./conf ./extra/route.yaml --output all.yaml\n    \
                  fsprovider targets ./conf --show-skipped"
)]
pub struct Cli {
    /// Configuration file (defaults to ./fsprovider.yaml when present)
    #[arg(long, short = 'c', global = true, env = "FSPROVIDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load resources from files and directories
    Load(LoadArgs),

    /// Show the directories and files to watch
    Targets(TargetsArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the load command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Load a directory tree to stdout:\n    fsprovider load ./conf\n\n\
                  Load files and directories into a file:\n    fsprovider load ./conf ./route.yaml -o all.yaml\n\n\
                  Emit JSON:\n    fsprovider load ./conf --format json\n\n\
                  Report every broken file instead of stopping at the first:\n    fsprovider load ./conf --keep-going")]
pub struct LoadArgs {
    /// Files and directories to load (defaults to `paths` from the configuration)
    pub paths: Vec<PathBuf>,

    /// Write resources to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Keep loading after a failure and report all failures at the end
    #[arg(long)]
    pub keep_going: bool,
}

/// Arguments for the targets command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show watch targets:\n    fsprovider targets ./conf ./route.yaml\n\n\
                  Include paths that could not be inspected:\n    fsprovider targets ./conf --show-skipped\n\n\
                  Machine readable:\n    fsprovider targets ./conf --json")]
pub struct TargetsArgs {
    /// Files and directories to watch (defaults to `paths` from the configuration)
    pub paths: Vec<PathBuf>,

    /// Also list paths that could not be inspected
    #[arg(long)]
    pub show_skipped: bool,

    /// Print the watch plan as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
