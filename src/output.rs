//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Run
//!
//! ```text
//! Found 3 images. Renaming...
//! Renamed: a.jpg -> 1.jpg
//! Renamed: b.png -> 2.jpg
//! Renamed: c.webp -> 3.jpg
//! Done!
//! ```
//!
//! ## Check (dry run)
//!
//! ```text
//! Found 3 images.
//! Would rename: a.jpg -> 1.jpg
//! Would rename: b.png -> 2.jpg
//! Would rename: c.webp -> 3.jpg
//! ```
//!
//! ## Missing directory
//!
//! ```text
//! Folder 'resources' does not exist. Please create it and add images.
//! ```
//!
//! # Architecture
//!
//! `format_*` functions return `Vec<String>` and do no I/O, so tests can
//! assert on exact lines. `print_*` wrappers write them to stdout.

use crate::types::{Outcome, RenameRecord, Report};
use std::path::Path;

/// Notice for a target directory that does not exist.
pub fn format_missing(directory: &Path) -> String {
    format!(
        "Folder '{}' does not exist. Please create it and add images.",
        directory.display()
    )
}

/// Count line. Only a real run announces renaming.
fn found_line(report: &Report) -> String {
    if report.dry_run {
        format!("Found {} images.", report.found)
    } else {
        format!("Found {} images. Renaming...", report.found)
    }
}

/// One `original -> final` line.
fn rename_line(record: &RenameRecord, dry_run: bool) -> String {
    let verb = if dry_run { "Would rename" } else { "Renamed" };
    format!("{verb}: {} -> {}", record.original, record.renamed)
}

/// Format a report: count, one line per file in sort order, completion notice.
pub fn format_report(report: &Report) -> Vec<String> {
    let mut lines = vec![found_line(report)];
    lines.extend(
        report
            .renames
            .iter()
            .map(|r| rename_line(r, report.dry_run)),
    );
    if !report.dry_run {
        lines.push("Done!".to_string());
    }
    lines
}

/// Format any outcome as human-readable lines.
pub fn format_outcome(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Missing { directory } => vec![format_missing(directory)],
        Outcome::Completed(report) => format_report(report),
    }
}

pub fn print_outcome(outcome: &Outcome) {
    for line in format_outcome(outcome) {
        println!("{}", line);
    }
}
