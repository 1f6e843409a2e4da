//! Renamer configuration.
//!
//! Everything has a default, so the tool runs with no config file at all.
//! A `renumber.toml` in the working directory (or the file passed with
//! `--config`) overrides just the keys it names:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! directory = "resources"                             # Directory to renumber
//! extensions = ["jpg", "jpeg", "png", "webp", "bmp"]  # Recognized images (case-insensitive)
//! target_extension = "jpg"                            # Extension of every renamed file
//! temp_prefix = "__temp_"                             # Prefix of intermediate names
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::naming::{DEFAULT_EXTENSIONS, DEFAULT_TARGET_EXTENSION, DEFAULT_TEMP_PREFIX};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "renumber.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Renamer configuration loaded from `renumber.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenamerConfig {
    /// Directory whose images are renumbered.
    pub directory: PathBuf,
    /// Extensions (without the dot) that mark a file as an image.
    pub extensions: Vec<String>,
    /// Extension given to every renamed file, whatever its original format.
    pub target_extension: String,
    /// Prefix of the intermediate names used between the two rename phases.
    pub temp_prefix: String,
}

impl Default for RenamerConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("resources"),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            target_extension: DEFAULT_TARGET_EXTENSION.to_string(),
            temp_prefix: DEFAULT_TEMP_PREFIX.to_string(),
        }
    }
}

impl RenamerConfig {
    /// Validate that the config cannot produce unsafe or ambiguous names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "extensions must not be empty".into(),
            ));
        }
        for ext in &self.extensions {
            if ext.is_empty() || ext.contains('.') || has_separator(ext) {
                return Err(ConfigError::Validation(format!(
                    "extensions entry {ext:?} must be a bare extension like \"jpg\""
                )));
            }
        }
        if self.target_extension.is_empty()
            || self.target_extension.contains('.')
            || has_separator(&self.target_extension)
        {
            return Err(ConfigError::Validation(
                "target_extension must be a bare extension like \"jpg\"".into(),
            ));
        }
        if self.temp_prefix.is_empty() || has_separator(&self.temp_prefix) {
            return Err(ConfigError::Validation(
                "temp_prefix must be non-empty and must not contain path separators".into(),
            ));
        }
        // Temporary names must never be mistaken for final ones.
        if self.temp_prefix.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Validation(
                "temp_prefix must not be purely numeric".into(),
            ));
        }
        Ok(())
    }
}

fn has_separator(s: &str) -> bool {
    s.contains('/') || s.contains('\\')
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Base layer that user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(RenamerConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, so an
///   `extensions` list in the overlay replaces the stock list.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value.
pub fn load_raw_file(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load `renumber.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `renumber.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(None);
    }
    load_raw_file(&config_path).map(Some)
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<RenamerConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: RenamerConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `renumber.toml` in the given directory, defaults if absent.
pub fn load_config(dir: &Path) -> Result<RenamerConfig, ConfigError> {
    resolve_config(load_raw_config(dir)?)
}

/// Load config from an explicit file. A missing file is an error here.
pub fn load_config_file(path: &Path) -> Result<RenamerConfig, ConfigError> {
    resolve_config(Some(load_raw_file(path)?))
}

/// Returns a fully-commented stock `renumber.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# renumber configuration
# ======================
# Every key is optional; delete what you don't need to change.
# Unknown keys are rejected.

# Directory whose images are renamed to 1.jpg, 2.jpg, ...
# Relative paths are resolved against the working directory.
directory = "resources"

# File extensions (without the dot) treated as images.
# Matching is case-insensitive: "jpg" also matches PHOTO.JPG.
# Files with any other extension are left alone.
extensions = ["jpg", "jpeg", "png", "webp", "bmp"]

# Extension given to every renamed file, regardless of its original format.
# Only the name changes; file contents are never converted.
target_extension = "jpg"

# Prefix of the intermediate names used while renaming.
# Files pass through <prefix><n>.<target_extension> before <n>.<target_extension>,
# so no file is overwritten when old and new numbering overlap.
temp_prefix = "__temp_"
"##
}
