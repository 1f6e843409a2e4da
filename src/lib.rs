//! # renumber
//!
//! Renames the images in one directory to a contiguous numeric sequence,
//! `1.jpg, 2.jpg, …, N.jpg`, forcing every file onto a single extension.
//! Pages that load `resources/<n>.jpg` in a loop can then find every image
//! without knowing the original names.
//!
//! ```no_run
//! use renumber::{config::RenamerConfig, output, rename};
//! use std::path::Path;
//!
//! let outcome = rename::normalize(Path::new("resources"), &RenamerConfig::default())?;
//! output::print_outcome(&outcome);
//! # Ok::<(), renumber::rename::RenameError>(())
//! ```
//!
//! # Pipeline
//!
//! ```text
//! exists?  →  list + filter  →  sort  →  plan + pre-flight  →  phase A  →  phase B  →  report
//! ```
//!
//! A missing directory short-circuits to [`types::Outcome::Missing`]. It is
//! an expected state (nothing set up yet), not an error.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `renumber.toml` loading, validation, and the `gen-config` template |
//! | [`naming`] | Extension recognition and temporary/final name construction |
//! | [`scan`] | Non-recursive listing, image filtering, byte-order sort |
//! | [`rename`] | Rename plan, collision pre-flight, two-phase rename |
//! | [`types`] | Report types shared by the renamer, output, and `--json` |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Byte-Order Sort
//!
//! Files are numbered by the byte order of their original names. It is
//! total and needs no locale, and it keeps an already renumbered set stable
//! for `1.jpg..9.jpg`. Past nine files `10.jpg` sorts before `2.jpg`, so a
//! second run over a large set reshuffles it; the set of names stays
//! `1.jpg..N.jpg` either way.
//!
//! ## Extension Is Renamed, Not Converted
//!
//! A PNG renamed to `3.jpg` is still a PNG. Browsers sniff image content, so
//! the uniform extension only simplifies the names that reference them.
//!
//! ## No Rollback
//!
//! When a rename fails midway the run stops and leaves files where they are.
//! A rollback would be one more sequence of renames that can fail the same
//! way. The pre-flight check rules out the failures that can be predicted
//! from the listing; the error message reports the rest.

pub mod config;
pub mod naming;
pub mod output;
pub mod rename;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
