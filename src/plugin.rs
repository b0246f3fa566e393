//! Plugin contracts between a documentation pipeline and this crate.
//!
//! The pipeline owns the project directory and a working directory it
//! fills with the project's Markdown sources. A [`Preprocessor`] rewrites
//! the working directory in place; a [`Backend`] turns it into output for
//! one of its targets.

use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::error::Result;
use crate::preprocessor::ApplyReport;

/// Information handed to every plugin.
#[derive(Debug, Clone)]
pub struct PluginContext {
    /// The project directory; relative paths in the configuration resolve
    /// against it.
    pub project_path: PathBuf,
    /// The directory holding the Markdown sources being processed.
    pub working_dir: PathBuf,
    pub config: ProjectConfig,
}

impl PluginContext {
    pub fn new(project_path: &Path, working_dir: &Path, config: ProjectConfig) -> Self {
        Self {
            project_path: project_path.to_path_buf(),
            working_dir: working_dir.to_path_buf(),
            config,
        }
    }
}

/// A step that rewrites the working directory before a backend runs.
pub trait Preprocessor {
    fn name(&self) -> &str;

    fn apply(&mut self) -> Result<ApplyReport>;
}

/// A preprocessor a backend needs to run after all others, with its
/// options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredPreprocessor {
    pub name: &'static str,
    pub options: Vec<(&'static str, &'static str)>,
}

/// Produces output from the working directory.
pub trait Backend {
    /// Target names accepted by [`Backend::make`].
    fn targets(&self) -> &'static [&'static str];

    /// Preprocessors the pipeline must run last for this backend.
    fn required_preprocessors_after(&self) -> Vec<RequiredPreprocessor> {
        Vec::new()
    }

    /// Build `target` and return the output directory.
    fn make(&mut self, target: &str) -> Result<PathBuf>;
}
