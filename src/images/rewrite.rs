//! Produces replacement text for image references.

use std::path::Path;

use log::debug;

use super::collector::{CollectedImage, StagingDir};
use super::resolve::{resolve_lenient, Location, Resolver};
use super::scanner::{ImageRef, Scanner};
use crate::error::Result;
use crate::path::{relative_path, to_slash};

/// What the rewriter does with local references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Collect only images outside the working directory and point every
    /// reference at its file relative to the referencing document.
    Relocate,
    /// Collect every local image and point references at
    /// `<prefix>/<collected name>`. Used when the document is moved into a
    /// different tree whose asset directory is `prefix`.
    Bundle { prefix: String },
}

/// Result of rewriting one document.
#[derive(Debug, Clone, Default)]
pub struct Rewritten {
    pub text: String,
    /// Number of local references whose text was replaced.
    pub rewritten: usize,
    pub collected: Vec<CollectedImage>,
}

impl Rewritten {
    pub fn changed_from(&self, original: &str) -> bool {
        self.text != original
    }
}

/// Rewrites image references in documents of one working directory.
#[derive(Debug, Clone)]
pub struct Rewriter {
    scanner: Scanner,
    resolver: Resolver,
    staging: StagingDir,
    mode: Mode,
}

impl Rewriter {
    pub fn new(working_dir: &Path, staging: StagingDir, mode: Mode) -> Result<Self> {
        Ok(Self {
            scanner: Scanner::new()?,
            resolver: Resolver::new(working_dir)?,
            staging,
            mode,
        })
    }

    pub fn staging(&self) -> &StagingDir {
        &self.staging
    }

    /// Rewrite every local image reference in `text`, which was read from
    /// `document`. Remote references are copied through unchanged. Any
    /// collection failure aborts the document.
    pub fn rewrite(&self, text: &str, document: &Path) -> Result<Rewritten> {
        let mut rewritten = 0;
        let mut collected = Vec::new();

        let text = self.scanner.replace_all(text, |image| {
            if !image.is_local() {
                return Ok(image.text.to_string());
            }
            let (replacement, copy) = self.replace(image, document)?;
            rewritten += 1;
            collected.extend(copy);
            Ok(replacement)
        })?;

        Ok(Rewritten {
            text,
            rewritten,
            collected,
        })
    }

    fn replace(
        &self,
        image: &ImageRef<'_>,
        document: &Path,
    ) -> Result<(String, Option<CollectedImage>)> {
        let resolved = self.resolver.resolve(image.path, document)?;
        debug!(
            "Detected image: caption=\"{}\", path={}",
            image.caption,
            resolved.path.display()
        );

        let (target, copy) = match (&self.mode, resolved.location) {
            (Mode::Relocate, Location::Inside) => {
                debug!("Image inside source directory");
                let doc_dir = self.resolver.document_dir(document)?;
                (to_slash(&relative_path(&doc_dir, &resolved.path)), None)
            }
            (Mode::Relocate, Location::Outside) => {
                debug!("Image outside source directory");
                let copy = self.staging.collect(&resolved.path)?;
                let doc_dir = self.resolver.document_dir(document)?;
                let target = to_slash(&relative_path(&doc_dir, &resolve_lenient(&copy.destination)));
                (target, Some(copy))
            }
            (Mode::Bundle { prefix }, _) => {
                let copy = self.staging.collect(&resolved.path)?;
                let target = if prefix.is_empty() {
                    copy.name.clone()
                } else {
                    format!("{}/{}", prefix.trim_end_matches('/'), copy.name)
                };
                (target, Some(copy))
            }
        };

        let replacement = format!("![{}]({})", image.caption, target);
        debug!("Replacing with: {}", replacement);
        Ok((replacement, copy))
    }
}
