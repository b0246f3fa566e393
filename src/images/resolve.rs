//! Resolves reference paths against their document and classifies them
//! relative to the working directory.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::Result;
use crate::path::is_strict_descendant;

/// Where a resolved image lives relative to the working directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Inside,
    Outside,
}

/// A reference path after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Absolute path with symlinks of the existing prefix resolved.
    pub path: PathBuf,
    pub location: Location,
}

/// Resolve `path` to an absolute path without requiring it to exist.
///
/// Components are walked left to right; every prefix that exists on disk is
/// canonicalized, so symlinks are followed as far as the filesystem allows.
/// The remainder is appended with `.` dropped and `..` collapsed.
pub fn resolve_lenient(path: &Path) -> PathBuf {
    if let Ok(canonical) = fs::canonicalize(path) {
        return canonical;
    }

    let mut resolved = PathBuf::new();
    let mut exists = true;
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
                exists = resolved.exists();
            }
            other => {
                resolved.push(other.as_os_str());
                if exists {
                    match fs::canonicalize(&resolved) {
                        Ok(canonical) => resolved = canonical,
                        Err(_) => exists = false,
                    }
                }
            }
        }
    }
    resolved
}

/// Resolves reference paths for one working directory.
#[derive(Debug, Clone)]
pub struct Resolver {
    root: PathBuf,
}

impl Resolver {
    /// `working_dir` is canonicalized once up front so classification
    /// compares like with like. A relative `working_dir` needs the current
    /// directory.
    pub fn new(working_dir: &Path) -> Result<Self> {
        Ok(Self {
            root: resolve_lenient(&std::path::absolute(working_dir)?),
        })
    }

    /// The canonical working directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The resolved directory containing `document`.
    pub fn document_dir(&self, document: &Path) -> Result<PathBuf> {
        let parent = match document.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        Ok(resolve_lenient(&std::path::absolute(parent)?))
    }

    /// Resolve `raw` relative to the directory containing `document`.
    pub fn resolve(&self, raw: &str, document: &Path) -> Result<Resolved> {
        let path = resolve_lenient(&self.document_dir(document)?.join(raw));
        let location = if is_strict_descendant(&path, &self.root) {
            Location::Inside
        } else {
            Location::Outside
        };
        Ok(Resolved { path, location })
    }
}
