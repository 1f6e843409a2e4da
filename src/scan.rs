//! Directory listing for the renamer.
//!
//! Lists the target directory once, non-recursively, and splits it into the
//! recognized images (sorted) and the full set of occupied names. Both come
//! from the same listing so later collision checks see exactly what the
//! image filter saw.
//!
//! ## Ordering
//!
//! Images are sorted by file name in byte order, so `B.png` sorts before
//! `a.jpg` and `10.jpg` before `2.jpg`. The 1-based position after sorting is
//! the number the image is renamed to.
//!
//! Anything that is not a regular file, or whose extension is not recognized,
//! is skipped without a diagnostic.

use crate::naming;
use log::{debug, trace};
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// A recognized image in the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub file_name: OsString,
    /// Lowercased original extension, e.g. `jpeg` for `PHOTO.JPEG`.
    pub extension: String,
}

/// One listing of the target directory.
#[derive(Debug, Default)]
pub struct Listing {
    /// Recognized images in byte order of their names.
    pub images: Vec<ImageEntry>,
    /// Every entry name in the directory, images or not.
    pub occupied: BTreeSet<OsString>,
}

/// List `dir` and pick out the images carrying one of `extensions`.
///
/// Returns `Ok(None)` when `dir` does not exist.
pub fn scan(dir: &Path, extensions: &[String]) -> Result<Option<Listing>, ScanError> {
    if !dir.exists() {
        debug!("{} does not exist", dir.display());
        return Ok(None);
    }
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let mut listing = Listing::default();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        listing.occupied.insert(file_name.clone());

        if !entry.path().is_file() {
            trace!("skipping non-file {:?}", file_name);
            continue;
        }
        if !naming::is_recognized(&file_name, extensions) {
            trace!("skipping unrecognized {:?}", file_name);
            continue;
        }
        // is_recognized guarantees an extension
        let extension = naming::extension_of(&file_name).unwrap_or_default();
        listing.images.push(ImageEntry {
            file_name,
            extension,
        });
    }

    listing.images.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    debug!(
        "{}: {} entries, {} images",
        dir.display(),
        listing.occupied.len(),
        listing.images.len()
    );
    Ok(Some(listing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::DEFAULT_EXTENSIONS;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn defaults() -> Vec<String> {
        DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
    }

    fn image_names(listing: &Listing) -> Vec<String> {
        listing
            .images
            .iter()
            .map(|i| i.file_name.to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn missing_directory_is_none() {
        let tmp = TempDir::new().unwrap();
        let result = scan(&tmp.path().join("resources"), &defaults()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn file_instead_of_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("resources");
        fs::write(&path, b"").unwrap();
        assert!(matches!(
            scan(&path, &defaults()),
            Err(ScanError::NotADirectory(_))
        ));
    }

    #[test]
    fn empty_directory_has_no_images() {
        let dir = setup_images(&[]);
        let listing = scan(&resources(&dir), &defaults()).unwrap().unwrap();
        assert!(listing.images.is_empty());
        assert!(listing.occupied.is_empty());
    }

    #[test]
    fn images_sorted_by_name() {
        let dir = setup_images(&["b.png", "a.jpg", "c.webp"]);
        let listing = scan(&resources(&dir), &defaults()).unwrap().unwrap();
        assert_eq!(image_names(&listing), vec!["a.jpg", "b.png", "c.webp"]);
    }

    #[test]
    fn sort_is_byte_order() {
        let dir = setup_images(&["a.jpg", "B.jpg", "10.jpg", "2.jpg", "_x.jpg"]);
        let listing = scan(&resources(&dir), &defaults()).unwrap().unwrap();
        assert_eq!(
            image_names(&listing),
            vec!["10.jpg", "2.jpg", "B.jpg", "_x.jpg", "a.jpg"]
        );
    }

    #[test]
    fn non_images_skipped_but_occupied() {
        let dir = setup_images(&["a.jpg", "notes.txt", "readme.md"]);
        let listing = scan(&resources(&dir), &defaults()).unwrap().unwrap();
        assert_eq!(image_names(&listing), vec!["a.jpg"]);
        assert_eq!(listing.occupied.len(), 3);
        assert!(listing.occupied.contains(&OsString::from("notes.txt")));
    }

    #[test]
    fn uppercase_extension_recognized() {
        let dir = setup_images(&["PHOTO.JPEG"]);
        let listing = scan(&resources(&dir), &defaults()).unwrap().unwrap();
        assert_eq!(image_names(&listing), vec!["PHOTO.JPEG"]);
        assert_eq!(listing.images[0].extension, "jpeg");
    }

    #[test]
    fn subdirectory_with_image_name_skipped() {
        let dir = setup_images(&["a.jpg"]);
        fs::create_dir(resources(&dir).join("nested.jpg")).unwrap();
        let listing = scan(&resources(&dir), &defaults()).unwrap().unwrap();
        assert_eq!(image_names(&listing), vec!["a.jpg"]);
        assert!(listing.occupied.contains(&OsString::from("nested.jpg")));
    }

    #[test]
    fn nested_images_not_scanned() {
        let dir = setup_images(&["a.jpg"]);
        let nested = resources(&dir).join("album");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("b.jpg"), b"b").unwrap();
        let listing = scan(&resources(&dir), &defaults()).unwrap().unwrap();
        assert_eq!(image_names(&listing), vec!["a.jpg"]);
    }

    #[test]
    fn custom_extensions() {
        let dir = setup_images(&["a.gif", "b.jpg"]);
        let exts = vec!["gif".to_string()];
        let listing = scan(&resources(&dir), &exts).unwrap().unwrap();
        assert_eq!(image_names(&listing), vec!["a.gif"]);
    }
}
