//! Expansion of a file or directory path into an ordered list of image paths.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{is_image_path, LoadError};

/// Return the image file paths found at `path`.
///
/// A single file resolves to itself when its extension is recognized. A
/// directory is walked recursively; matching files are sorted by their full
/// path string.
///
/// # Errors
///
/// Returns `LoadError::NotFound` if `path` does not exist.
/// Returns `LoadError::InvalidFormat` if `path` is a file with an unrecognized extension.
/// Returns `LoadError::NoImages` if a directory holds no recognized images.
/// Returns `LoadError::InvalidPath` if `path` is not valid UTF-8.
pub fn list_image_paths<P: AsRef<Path>>(path: P) -> Result<Vec<PathBuf>, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    if path.is_file() {
        return if is_image_path(path) {
            Ok(vec![path.to_path_buf()])
        } else {
            Err(LoadError::InvalidFormat(path.to_path_buf()))
        };
    }

    let mut paths = walk_images(path)?;
    sort_by_path_string(&mut paths);
    log::debug!("Resolved {} image(s) under {}", paths.len(), path.display());

    if paths.is_empty() {
        return Err(LoadError::NoImages(path.to_path_buf()));
    }
    Ok(paths)
}

/// Recursively collect files with a recognized extension below `root`.
///
/// Symlinked directories are not descended into; a symlink to a file is kept.
fn walk_images(root: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if root.to_str().is_none() {
        return Err(LoadError::InvalidPath(root.to_path_buf()));
    }

    let paths = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.into_path()),
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                log::warn!("Skipping unreadable entry {}: {}", path.display(), e);
                None
            }
        })
        .filter(|path| path.is_file() && is_image_path(path))
        .collect();
    Ok(paths)
}

/// Sort by the whole path string rather than component-wise.
///
/// `a-b/x.jpg` sorts before `a/x.jpg` because `-` precedes `/`.
fn sort_by_path_string(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        /// Property: A directory resolves to exactly its images, in string order.
        #[test]
        fn prop_directory_resolves_sorted_images(
            images in prop::collection::btree_set("[a-z]{1,6}/[a-z]{1,6}\\.(jpg|PNG|webp)", 1..8),
            others in prop::collection::btree_set("[a-z]{1,6}\\.(txt|gif|md)", 0..4),
        ) {
            let dir = tempfile::tempdir().unwrap();
            let mut expected = Vec::new();
            for rel in &images {
                let path = dir.path().join(rel);
                std::fs::create_dir_all(path.parent().unwrap()).unwrap();
                std::fs::write(&path, b"").unwrap();
                expected.push(path);
            }
            for rel in &others {
                std::fs::write(dir.path().join(rel), b"").unwrap();
            }
            expected.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

            let paths = list_image_paths(dir.path()).unwrap();
            prop_assert_eq!(&paths, &expected);

            let unique: BTreeSet<_> = paths.iter().collect();
            prop_assert_eq!(unique.len(), paths.len(), "No path should be listed twice");
        }
    }
}
