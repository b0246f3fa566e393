//! On-disk directory tree operations used to assemble the Slate project.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Directory never copied out of a checkout.
const GIT_DIR: &str = ".git";

fn copy_entries(src: &Path, dst: &Path, skip_git: bool) -> Result<usize> {
    if !src.is_dir() {
        return Err(Error::Filesystem {
            message: format!("Source directory not found: {}", src.display()),
        });
    }
    fs::create_dir_all(dst).map_err(|e| Error::Filesystem {
        message: format!("Failed to create directory '{}': {}", dst.display(), e),
    })?;

    let mut copied = 0;
    let walker = WalkDir::new(src)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| !(skip_git && entry.depth() == 1 && entry.file_name() == GIT_DIR));

    for entry in walker {
        let entry = entry?;
        let relative = entry.path().strip_prefix(src).map_err(|e| Error::Filesystem {
            message: format!("Unexpected path '{}': {}", entry.path().display(), e),
        })?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| Error::Filesystem {
                message: format!("Failed to create directory '{}': {}", target.display(), e),
            })?;
        } else {
            if target.is_file() {
                fs::remove_file(&target)?;
            }
            fs::copy(entry.path(), &target).map_err(|e| Error::Filesystem {
                message: format!(
                    "Failed to copy '{}' to '{}': {}",
                    entry.path().display(),
                    target.display(),
                    e
                ),
            })?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Recursively copy the contents of `src` into `dst`, skipping a top-level
/// `.git` directory. Returns the number of files copied.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<usize> {
    copy_entries(src, dst, true)
}

/// Merge-copy `src` over `dst`: every file in `src` replaces the file at the
/// same relative path in `dst`, other files in `dst` are kept.
pub fn copy_replace(src: &Path, dst: &Path) -> Result<usize> {
    copy_entries(src, dst, false)
}

/// Remove `dir` and everything below it. A missing directory is fine.
pub fn remove_tree(dir: &Path) -> Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::Filesystem {
            message: format!("Failed to remove '{}': {}", dir.display(), e),
        }),
    }
}

/// Replace `dst` with a fresh copy of `src`.
pub fn replace_tree(src: &Path, dst: &Path) -> Result<usize> {
    remove_tree(dst)?;
    copy_tree(src, dst)
}

/// Remove a file if it exists.
pub fn remove_file_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
