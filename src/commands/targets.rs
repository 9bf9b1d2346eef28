//! Targets command implementation

use crate::cli::TargetsArgs;
use crate::config::ProviderConfig;
use crate::error::{ProviderError, Result};
use crate::ui;
use crate::watch::WatchPlan;

pub fn run(config: ProviderConfig, args: TargetsArgs) -> Result<()> {
    let config = config.merge(ProviderConfig {
        paths: args.paths,
        ..ProviderConfig::default()
    });

    if config.paths.is_empty() {
        return Err(ProviderError::NoInputPaths);
    }

    let plan = WatchPlan::from_paths(&config.paths);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        ui::print_watch_plan(&plan, args.show_skipped);
    }

    Ok(())
}
