//! # Template Project Checkout
//!
//! The Slate backend builds on a template project fetched with git. The
//! checkout lives in a per-project cache directory and is updated in place
//! on later runs instead of being cloned again.
//!
//! ## Design
//!
//! Git access goes through the **`GitOperations`** trait so the rest of the
//! backend never shells out directly. The application uses
//! `DefaultGitOperations`, which wraps the system `git` command; tests
//! inject mocks that record calls and populate the checkout directory
//! without touching the network.

use std::path::{Path, PathBuf};

use log::info;

use crate::error::Result;
use crate::filesystem::remove_tree;

/// Trait for git operations - allows mocking in tests
pub trait GitOperations {
    /// Clones `url` into `target_dir`, which does not exist yet.
    fn clone_repo(&self, url: &str, target_dir: &Path) -> Result<()>;

    /// Brings an existing checkout up to date.
    fn pull(&self, repo_dir: &Path) -> Result<()>;

    /// Whether `dir` holds a checkout that can be pulled.
    fn is_checkout(&self, dir: &Path) -> bool {
        crate::git::is_checkout(dir)
    }
}

/// The default implementation of `GitOperations`, which uses the system's
/// `git` command.
pub struct DefaultGitOperations;

impl GitOperations for DefaultGitOperations {
    fn clone_repo(&self, url: &str, target_dir: &Path) -> Result<()> {
        crate::git::clone(url, target_dir)
    }

    fn pull(&self, repo_dir: &Path) -> Result<()> {
        crate::git::pull(repo_dir)
    }
}

/// What [`TemplateRepo::sync`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    Cloned,
    Updated,
}

/// A template project checked out at a fixed location.
pub struct TemplateRepo {
    url: String,
    checkout_dir: PathBuf,
    git_ops: Box<dyn GitOperations>,
}

impl TemplateRepo {
    pub fn new(url: impl Into<String>, checkout_dir: impl Into<PathBuf>) -> Self {
        Self::with_operations(url, checkout_dir, Box::new(DefaultGitOperations))
    }

    /// Creates a `TemplateRepo` with a custom `GitOperations`
    /// implementation.
    pub fn with_operations(
        url: impl Into<String>,
        checkout_dir: impl Into<PathBuf>,
        git_ops: Box<dyn GitOperations>,
    ) -> Self {
        Self {
            url: url.into(),
            checkout_dir: checkout_dir.into(),
            git_ops,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn checkout_dir(&self) -> &Path {
        &self.checkout_dir
    }

    /// Clone the template when there is no checkout yet, otherwise update
    /// the existing one. A leftover directory that is not a checkout is
    /// removed before cloning.
    pub fn sync(&self) -> Result<SyncAction> {
        if self.git_ops.is_checkout(&self.checkout_dir) {
            info!("Updating repository {}", self.url);
            self.git_ops.pull(&self.checkout_dir)?;
            return Ok(SyncAction::Updated);
        }

        remove_tree(&self.checkout_dir)?;
        info!("Cloning repository {}", self.url);
        self.git_ops.clone_repo(&self.url, &self.checkout_dir)?;
        Ok(SyncAction::Cloned)
    }
}
