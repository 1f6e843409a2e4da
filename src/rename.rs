//! Two-phase sequential rename.
//!
//! Renaming straight from the sorted names to `1.jpg, 2.jpg, …` can clobber a
//! file whose current name is a later target (`1.jpg` sorting second would be
//! overwritten by whatever becomes `1.jpg` first). So every file moves twice:
//!
//! ```text
//! Phase A (temporary)   a.jpg → __temp_1.jpg   b.png → __temp_2.jpg
//! Phase B (final)       __temp_1.jpg → 1.jpg   __temp_2.jpg → 2.jpg
//! ```
//!
//! After phase A no file holds a final name, so phase B cannot collide.
//!
//! ## Pre-flight
//!
//! Before touching anything, [`RenamePlan::check_collisions`] checks every
//! temporary and final name against the directory listing. A name held by an
//! entry outside the rename set (a subdirectory called `2.jpg`), or a
//! temporary name held by an image that is only moved *after* that name is
//! written, aborts the run with nothing renamed.
//!
//! ## Partial failure
//!
//! A failing rename call stops the run. Files already moved keep their
//! temporary (or final) names; there is no rollback. The error names the
//! phase and both paths so the leftover state can be read off the message.

use crate::config::RenamerConfig;
use crate::naming;
use crate::scan::{self, ImageEntry, ScanError};
use crate::types::{Outcome, RenameRecord, Report};
use log::{debug, info, warn};
use std::collections::{BTreeSet, HashMap};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenameError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Name {name} in {} is taken by an entry that would be overwritten", directory.display())]
    Collision { name: String, directory: PathBuf },
    #[error("Rename failed during {phase} phase: {} -> {}: {source}", from.display(), to.display())]
    Rename {
        phase: Phase,
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

/// The two rename passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Original names → temporary names.
    Temporary,
    /// Temporary names → final names.
    Final,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Temporary => write!(f, "temporary"),
            Phase::Final => write!(f, "final"),
        }
    }
}

/// One planned move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    /// 1-based position in sort order, also the final number.
    pub index: usize,
    pub original: OsString,
    pub temporary: String,
    pub renamed: String,
}

/// Ordered original → temporary → final mapping for one directory.
#[derive(Debug, Clone)]
pub struct RenamePlan {
    pub directory: PathBuf,
    pub entries: Vec<PlannedRename>,
}

impl RenamePlan {
    /// Build the mapping for `images`, which must already be in sort order.
    pub fn new(directory: &Path, images: &[ImageEntry], config: &RenamerConfig) -> Self {
        let entries = images
            .iter()
            .enumerate()
            .map(|(i, image)| {
                let index = i + 1;
                PlannedRename {
                    index,
                    original: image.file_name.clone(),
                    temporary: naming::temp_name(
                        &config.temp_prefix,
                        index,
                        &config.target_extension,
                    ),
                    renamed: naming::final_name(index, &config.target_extension),
                }
            })
            .collect();
        Self {
            directory: directory.to_path_buf(),
            entries,
        }
    }

    /// Refuse names whose current holder would be overwritten.
    ///
    /// `occupied` is every entry name in the directory. Temporary name `j`
    /// may be held by the image at position `i` only if `i <= j`: that image
    /// has moved out (or is moving onto itself) by the time `j` is written.
    /// Final names may be held by any image, since phase A empties them all.
    pub fn check_collisions(&self, occupied: &BTreeSet<OsString>) -> Result<(), RenameError> {
        let position: HashMap<&OsStr, usize> = self
            .entries
            .iter()
            .map(|e| (e.original.as_os_str(), e.index))
            .collect();

        for entry in &self.entries {
            let temporary = OsStr::new(&entry.temporary);
            if occupied.contains(temporary) {
                match position.get(temporary) {
                    Some(&holder) if holder <= entry.index => {}
                    _ => return Err(self.collision(&entry.temporary)),
                }
            }

            let renamed = OsStr::new(&entry.renamed);
            if occupied.contains(renamed) && !position.contains_key(renamed) {
                return Err(self.collision(&entry.renamed));
            }
        }
        Ok(())
    }

    fn collision(&self, name: &str) -> RenameError {
        RenameError::Collision {
            name: name.to_string(),
            directory: self.directory.clone(),
        }
    }

    /// Run both phases. Stops at the first failing rename.
    pub fn execute(&self) -> Result<Report, RenameError> {
        info!(
            "renaming {} images in {} to temporary names",
            self.entries.len(),
            self.directory.display()
        );
        for (done, entry) in self.entries.iter().enumerate() {
            self.rename(Phase::Temporary, &entry.original, OsStr::new(&entry.temporary))
                .inspect_err(|_| {
                    if done > 0 {
                        warn!("{done} files left under temporary names");
                    }
                })?;
        }

        info!("renaming temporary names to final names");
        for (done, entry) in self.entries.iter().enumerate() {
            self.rename(
                Phase::Final,
                OsStr::new(&entry.temporary),
                OsStr::new(&entry.renamed),
            )
            .inspect_err(|_| {
                warn!(
                    "{} files left under temporary names",
                    self.entries.len() - done
                );
            })?;
        }

        Ok(self.report(false))
    }

    fn rename(&self, phase: Phase, from: &OsStr, to: &OsStr) -> Result<(), RenameError> {
        let from = self.directory.join(from);
        let to = self.directory.join(to);
        debug!("{phase}: {} -> {}", from.display(), to.display());
        fs::rename(&from, &to).map_err(|source| RenameError::Rename {
            phase,
            from,
            to,
            source,
        })
    }

    /// Report for this plan, applied or not.
    pub fn report(&self, dry_run: bool) -> Report {
        Report {
            directory: self.directory.clone(),
            found: self.entries.len(),
            renames: self
                .entries
                .iter()
                .map(|e| RenameRecord {
                    original: e.original.to_string_lossy().to_string(),
                    renamed: e.renamed.clone(),
                })
                .collect(),
            dry_run,
        }
    }
}

/// Scan `directory` and build its collision-checked plan.
///
/// Returns `Ok(None)` when the directory does not exist.
pub fn plan(directory: &Path, config: &RenamerConfig) -> Result<Option<RenamePlan>, RenameError> {
    let Some(listing) = scan::scan(directory, &config.extensions)? else {
        return Ok(None);
    };
    let plan = RenamePlan::new(directory, &listing.images, config);
    plan.check_collisions(&listing.occupied)?;
    Ok(Some(plan))
}

/// Rename every recognized image in `directory` to `1.<ext> … N.<ext>`.
pub fn normalize(directory: &Path, config: &RenamerConfig) -> Result<Outcome, RenameError> {
    match plan(directory, config)? {
        Some(plan) => Ok(Outcome::Completed(plan.execute()?)),
        None => Ok(missing(directory)),
    }
}

/// Same as [`normalize`] without touching the filesystem.
pub fn check(directory: &Path, config: &RenamerConfig) -> Result<Outcome, RenameError> {
    match plan(directory, config)? {
        Some(plan) => Ok(Outcome::Completed(plan.report(true))),
        None => Ok(missing(directory)),
    }
}

fn missing(directory: &Path) -> Outcome {
    Outcome::Missing {
        directory: directory.to_path_buf(),
    }
}
