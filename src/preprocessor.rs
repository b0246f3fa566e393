//! # Image-Collecting Preprocessor
//!
//! The site generator can only serve images that live inside its source
//! tree. This preprocessor walks every Markdown document in the working
//! directory, copies images referenced from outside the working directory
//! into a staging directory inside it, and rewrites the references so they
//! point at the copies. References that already resolve inside the working
//! directory are only normalized to a relative form.
//!
//! ## Process
//!
//! 1.  **Enumerate**: every `*.md` file under the working directory,
//!     recursively, in a stable order.
//! 2.  **Rewrite**: scan, resolve, collect and rewrite each reference
//!     (see [`crate::images`]).
//! 3.  **Write back**: the full new text replaces the document.
//!
//! The staging directory is shared by all documents of a run. Running the
//! pass again over its own output changes nothing, since every reference
//! then resolves inside the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::images::{Mode, Rewriter, StagingDir};
use crate::plugin::{PluginContext, Preprocessor};

/// Extension of the documents the pass rewrites.
const MARKDOWN_EXTENSION: &str = "md";

/// Summary of one apply pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Markdown documents visited.
    pub documents: usize,
    /// Documents whose text changed and were written back.
    pub changed: usize,
    /// Local image references rewritten.
    pub rewritten: usize,
    /// Images copied into the staging directory.
    pub collected: usize,
}

/// All Markdown documents under `working_dir`, sorted by path.
pub fn markdown_files(working_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(working_dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry.path().extension().and_then(|e| e.to_str()) == Some(MARKDOWN_EXTENSION)
        {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Run the image-collecting pass over every document in `working_dir`,
/// copying outside images into `staging`.
///
/// The first failure aborts the pass; documents already rewritten stay
/// rewritten.
pub fn apply(working_dir: &Path, staging: &StagingDir) -> Result<ApplyReport> {
    let rewriter = Rewriter::new(working_dir, staging.clone(), Mode::Relocate)?;
    let mut report = ApplyReport::default();

    for document in markdown_files(working_dir)? {
        debug!("Looking for images in {}", document.display());
        let content =
            fs::read_to_string(&document).map_err(|e| Error::from(e).in_document(&document))?;
        let result = rewriter
            .rewrite(&content, &document)
            .map_err(|e| e.in_document(&document))?;

        report.documents += 1;
        report.rewritten += result.rewritten;
        report.collected += result.collected.len();

        if result.changed_from(&content) {
            fs::write(&document, &result.text)
                .map_err(|e| Error::from(e).in_document(&document))?;
            report.changed += 1;
        }
    }

    info!(
        "Preprocessor applied: {} documents, {} references rewritten, {} images collected",
        report.documents, report.rewritten, report.collected
    );
    Ok(report)
}

/// The image-collecting preprocessor as a pipeline plugin.
#[derive(Debug)]
pub struct SlatePreprocessor {
    working_dir: PathBuf,
    staging: StagingDir,
}

impl SlatePreprocessor {
    /// Stage collected images in a fresh `img_<uuid>` directory under the
    /// working directory.
    pub fn new(ctx: &PluginContext) -> Self {
        Self::with_staging(ctx, StagingDir::unique_in(&ctx.working_dir))
    }

    pub fn with_staging(ctx: &PluginContext, staging: StagingDir) -> Self {
        Self {
            working_dir: ctx.working_dir.clone(),
            staging,
        }
    }

    pub fn staging(&self) -> &StagingDir {
        &self.staging
    }
}

impl Preprocessor for SlatePreprocessor {
    fn name(&self) -> &str {
        "slate"
    }

    fn apply(&mut self) -> Result<ApplyReport> {
        apply(&self.working_dir, &self.staging)
    }
}
