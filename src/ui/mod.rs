//! Terminal output for load reports and watch plans
//!
//! Summaries go to stderr so that stdout carries only the loaded resources.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use console::Style;

use crate::loader::{LoadFailure, LoadReport};
use crate::paths::SkipRecord;
use crate::watch::WatchPlan;

/// Print a one-line summary of a load, followed by kind counts
pub fn print_load_summary(report: &LoadReport) {
    let mut kinds: BTreeMap<String, usize> = BTreeMap::new();
    for bundle in &report.bundles {
        for (kind, count) in bundle.kinds() {
            *kinds.entry(kind).or_insert(0) += count;
        }
    }

    eprintln!(
        "{} {} object(s) from {} file(s)",
        Style::new().bold().green().apply_to("Loaded"),
        report.object_count(),
        report.bundles.len()
    );
    for (kind, count) in kinds {
        eprintln!("  {} {}", Style::new().cyan().apply_to(format!("{kind}:")), count);
    }
}

/// Print every failure recorded in a report
pub fn print_failures(failures: &[LoadFailure]) {
    for failure in failures {
        eprintln!(
            "{} {}: {}",
            Style::new().bold().red().apply_to("Failed"),
            failure.path.display(),
            failure.error
        );
    }
}

/// Print a watch plan as labelled sections
pub fn print_watch_plan(plan: &WatchPlan, show_skipped: bool) {
    print_section("Directories:", &plan.dirs);
    print_section("Files:", &plan.files);
    print_section("Watch directories:", &plan.watch_dirs);
    if show_skipped {
        print_skipped(&plan.skipped);
    }
}

fn print_section(title: &str, paths: &BTreeSet<PathBuf>) {
    println!("{}", Style::new().bold().apply_to(title));
    if paths.is_empty() {
        println!("  {}", Style::new().dim().apply_to("(none)"));
    }
    for path in paths {
        println!("  {}", path.display());
    }
}

fn print_skipped(skipped: &[SkipRecord]) {
    println!("{}", Style::new().bold().yellow().apply_to("Skipped:"));
    if skipped.is_empty() {
        println!("  {}", Style::new().dim().apply_to("(none)"));
    }
    for record in skipped {
        println!("  {record}");
    }
}
