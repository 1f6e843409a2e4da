//! Shared test utilities for the renumber test suite.
//!
//! Fixture files carry their own original name as content, so after a run
//! `read_file(&dir, "2.jpg")` tells which file ended up as `2.jpg`.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_images(&["b.png", "a.jpg"]);
//! let dir = resources(&tmp);
//! normalize(&dir, &RenamerConfig::default()).unwrap();
//!
//! assert_eq!(dir_names(&dir), vec!["1.jpg", "2.jpg"]);
//! assert_eq!(read_file(&dir, "1.jpg"), "a.jpg");
//! ```

use std::path::{Path, PathBuf};
use tempfile::TempDir;

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp dir holding `resources/` with one file per name.
pub fn setup_images(names: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let dir = resources(&tmp);
    std::fs::create_dir(&dir).unwrap();
    for name in names {
        std::fs::write(dir.join(name), name).unwrap();
    }
    tmp
}

/// The `resources/` directory inside a fixture.
pub fn resources(tmp: &TempDir) -> PathBuf {
    tmp.path().join("resources")
}

// =========================================================================
// Directory inspection
// =========================================================================

/// All entry names in `dir`, sorted.
pub fn dir_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

/// Content of `dir/name`. Panics with the directory listing on miss.
pub fn read_file(dir: &Path, name: &str) -> String {
    std::fs::read_to_string(dir.join(name)).unwrap_or_else(|e| {
        panic!(
            "cannot read '{name}': {e}. Available: {:?}",
            dir_names(dir)
        )
    })
}
