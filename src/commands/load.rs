//! Load command implementation

use std::fs;
use std::io::Write;

use tracing::warn;

use crate::cli::LoadArgs;
use crate::config::{OutputFormat, ProviderConfig};
use crate::error::{self, ProviderError, Result};
use crate::loader::{BulkResourceLoader, LoadPolicy};
use crate::paths::{classify, validate_output_path};
use crate::resource::{ResourceBundle, ResourceObject};
use crate::ui;

pub fn run(config: ProviderConfig, args: LoadArgs) -> Result<()> {
    let config = config.merge(ProviderConfig {
        paths: args.paths,
        output: args.output,
        format: args.format,
        policy: args.keep_going.then_some(LoadPolicy::CollectAll),
    });

    if config.paths.is_empty() {
        return Err(ProviderError::NoInputPaths);
    }

    // Fail before doing any work when the output cannot be written.
    let output = config
        .output
        .as_deref()
        .map(validate_output_path)
        .transpose()?;

    let classification = classify(&config.paths);
    for skipped in &classification.skipped {
        warn!(
            path = %skipped.path.display(),
            reason = %skipped.reason,
            "ignoring path that cannot be inspected"
        );
    }

    let report = BulkResourceLoader::new().load_with_policy(
        &classification.files,
        &classification.dirs,
        config.policy(),
    )?;

    let rendered = render(&report.bundles, config.format())?;
    match output {
        Some(path) => fs::write(&path, rendered)
            .map_err(|e| error::file_write_failed(path.display().to_string(), e.to_string()))?,
        None => std::io::stdout().lock().write_all(rendered.as_bytes())?,
    }

    ui::print_load_summary(&report);

    if !report.is_complete() {
        ui::print_failures(&report.failures);
        return Err(ProviderError::LoadIncomplete {
            count: report.failures.len(),
        });
    }

    Ok(())
}

/// Serialize every object of every bundle, in load order
fn render(bundles: &[ResourceBundle], format: OutputFormat) -> Result<String> {
    let objects: Vec<&ResourceObject> = bundles.iter().flat_map(|b| b.objects.iter()).collect();

    match format {
        OutputFormat::Yaml => {
            let documents = objects
                .iter()
                .map(serde_yaml::to_string)
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(documents.join("---\n"))
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&objects)?;
            json.push('\n');
            Ok(json)
        }
    }
}
