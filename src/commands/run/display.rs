//! Display and formatting utilities for run output.

use crate::sweep::{AggregatedResult, PreviewResult};
use std::path::Path;

/// Print the result of a real sweep.
pub fn print_sweep_report(result: &AggregatedResult, home: &Path, trash_dir: &Path) {
    println!("Sweep complete.");
    println!(
        "Moved to trash ({}): {} item(s)",
        make_relative(trash_dir, home),
        result.trashed_count()
    );

    for outcome in &result.outcomes {
        if outcome.is_empty() {
            continue;
        }
        println!();
        println!(
            "{} ({}):",
            outcome.label,
            make_relative(&outcome.directory, home)
        );
        if outcome.trashed.is_empty() {
            println!("  (nothing moved)");
        }
        for item in &outcome.trashed {
            println!(
                "  - {} ({})",
                item.file_name(),
                format_age_hours(item.age_hours)
            );
        }
    }

    let errors = result.error_count();
    if errors > 0 {
        println!();
        println!("Errors ({}):", errors);
        for failure in result.failures() {
            println!("  ! {}: {}", failure.file_name(), failure.reason);
        }
    }
}

/// Print what a sweep would do right now.
pub fn print_preview(preview: &PreviewResult, home: &Path) {
    if preview.total_count() == 0 {
        println!("Dry run: nothing to clean.");
        return;
    }

    println!(
        "Dry run: {} item(s) would be moved to the trash.",
        preview.total_count()
    );

    for group in &preview.groups {
        if group.entries.is_empty() {
            continue;
        }
        println!();
        println!(
            "{} ({}) - {} of {}:",
            group.label,
            make_relative(&group.directory, home),
            group.entries.len(),
            group.found
        );
        for entry in &group.entries {
            let suffix = if entry.record.is_directory() { "/" } else { "" };
            println!(
                "  - {}{} ({} day(s), {})",
                entry.record.file_name(),
                suffix,
                entry.age_days,
                format_age_hours(entry.age_hours)
            );
        }
    }

    println!();
    println!("Dry-run mode: no changes made.");
}

/// Render an age in hours, e.g. `"80h"`.
pub fn format_age_hours(hours: i64) -> String {
    format!("{}h", hours)
}

/// Show `path` as `~/...` when it lies under `home`.
pub fn make_relative(path: &Path, home: &Path) -> String {
    path.strip_prefix(home)
        .map(|p| format!("~/{}", p.display()))
        .unwrap_or_else(|_| path.display().to_string())
}
