//! Filename rules for the sequential naming scheme.
//!
//! Every recognized image ends up as `<n>.<ext>`, passing through a
//! temporary `<prefix><n>.<ext>` on the way:
//!
//! - `b.png` (2nd in sort order) → `__temp_2.jpg` → `2.jpg`
//! - `PHOTO.JPEG` (1st in sort order) → `__temp_1.jpg` → `1.jpg`
//!
//! Recognition looks only at the extension, the text after the last `.` of
//! the file name. Dotfiles like `.jpg` have no extension and are never images.

use std::ffi::OsStr;
use std::path::Path;

/// Image extensions recognized when no config overrides them.
pub const DEFAULT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp"];

/// Extension forced onto every renamed file when no config overrides it.
pub const DEFAULT_TARGET_EXTENSION: &str = "jpg";

/// Prefix of the intermediate names used between the two rename phases.
pub const DEFAULT_TEMP_PREFIX: &str = "__temp_";

/// Lowercased extension of a file name, if it has one.
pub fn extension_of(file_name: &OsStr) -> Option<String> {
    Path::new(file_name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
}

/// Whether `file_name` carries one of `extensions`, compared case-insensitively.
pub fn is_recognized(file_name: &OsStr, extensions: &[String]) -> bool {
    match extension_of(file_name) {
        Some(ext) => extensions.iter().any(|e| e.to_lowercase() == ext),
        None => false,
    }
}

/// Intermediate name for the file at 1-based `index`.
pub fn temp_name(prefix: &str, index: usize, extension: &str) -> String {
    format!("{prefix}{index}.{extension}")
}

/// Final name for the file at 1-based `index`.
pub fn final_name(index: usize, extension: &str) -> String {
    format!("{index}.{extension}")
}
