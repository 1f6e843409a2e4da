//! Result types shared by the renamer, the output formatter, and `--json`.

use serde::Serialize;
use std::path::PathBuf;

/// One file's journey from its original name to its final name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameRecord {
    /// Original file name. Lossy for names that are not valid UTF-8.
    pub original: String,
    /// Final sequential name, e.g. `3.jpg`.
    pub renamed: String,
}

/// What a run found and did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub directory: PathBuf,
    /// Number of recognized images found.
    pub found: usize,
    /// One record per image, in sort order.
    pub renames: Vec<RenameRecord>,
    /// True when the mapping was only planned, not applied.
    pub dry_run: bool,
}

/// Outcome of a renamer run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The target directory does not exist; nothing was touched.
    Missing { directory: PathBuf },
    /// The directory was scanned and (unless dry run) renamed.
    Completed(Report),
}
