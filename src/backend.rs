//! # Slate Backend
//!
//! Assembles a Slate project from the template repository, the project's
//! shards and the preprocessed Markdown, and optionally builds it into a
//! static site.
//!
//! ## Process
//!
//! 1.  **Scratch project**: `<project>/.slate/_tmp` is recreated empty.
//! 2.  **Template**: the template repository is cloned into
//!     `<project>/.slate/slaterepo`, or pulled if already there, and copied
//!     into the scratch project.
//! 3.  **Shards**: each configured shard directory that exists under the
//!     project is merge-copied over the scratch project, in order.
//! 4.  **Content**: the template's sample `index.html.md` and
//!     `includes/_errors.md` are deleted; the flattened source (or, when
//!     no flattened file exists, the chapters in order) is written to
//!     `source/index.html.md.erb` with every local image copied into
//!     `source/images`, and the front matter is prepended.
//! 5.  **Output**: the `slate` target copies the scratch project to
//!     `<project>/<slug>.src`; the `site` target runs the build command in
//!     it and copies `build/` to `<project>/<slug>.slate`.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, info, warn};

use crate::builder;
use crate::chapters::Chapters;
use crate::config::SlateConfig;
use crate::error::{Error, Result};
use crate::filesystem::{copy_replace, copy_tree, remove_file_if_exists, remove_tree, replace_tree};
use crate::header;
use crate::images::{Mode, Rewriter, StagingDir};
use crate::plugin::{Backend, PluginContext, RequiredPreprocessor};
use crate::template::{GitOperations, TemplateRepo};

/// Name of the single-file source the `flatten` preprocessor produces.
pub const FLAT_SRC_FILE_NAME: &str = "__all__.md";

/// Target names accepted by [`SlateBackend`].
pub const TARGETS: &[&str] = &["slate", "site"];

/// Directory under the project holding the checkout and scratch project.
const STATE_DIR: &str = ".slate";

/// Asset directory of a Slate project, relative to `source/`.
const IMAGES_DIR: &str = "images";

/// What [`SlateBackend::make_target`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The assembled Slate project, ready for `bundle exec middleman`.
    Slate,
    /// The rendered static site.
    Site,
}

impl FromStr for Target {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "slate" => Ok(Target::Slate),
            "site" => Ok(Target::Site),
            other => Err(Error::UnsupportedTarget {
                target: other.to_string(),
                supported: TARGETS.join(", "),
            }),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Slate => write!(f, "slate"),
            Target::Site => write!(f, "site"),
        }
    }
}

/// Builds Slate projects and sites for one documentation project.
pub struct SlateBackend {
    project_path: PathBuf,
    working_dir: PathBuf,
    config: SlateConfig,
    chapters: Chapters,
    template: TemplateRepo,
    tmp_dir: PathBuf,
    site_dir: PathBuf,
    project_dir: PathBuf,
}

impl SlateBackend {
    pub fn new(ctx: &PluginContext) -> Self {
        let checkout = ctx.project_path.join(STATE_DIR).join("slaterepo");
        let template = TemplateRepo::new(ctx.config.slate().template_repo.clone(), checkout);
        Self::with_template(ctx, template)
    }

    /// Creates a backend whose template checkout goes through `git_ops`.
    pub fn with_git_operations(ctx: &PluginContext, git_ops: Box<dyn GitOperations>) -> Self {
        let checkout = ctx.project_path.join(STATE_DIR).join("slaterepo");
        let template = TemplateRepo::with_operations(
            ctx.config.slate().template_repo.clone(),
            checkout,
            git_ops,
        );
        Self::with_template(ctx, template)
    }

    fn with_template(ctx: &PluginContext, template: TemplateRepo) -> Self {
        let slug = ctx.config.slug();
        let backend = Self {
            project_path: ctx.project_path.clone(),
            working_dir: ctx.working_dir.clone(),
            config: ctx.config.slate().clone(),
            chapters: Chapters::new(&ctx.config.chapters, &ctx.working_dir),
            template,
            tmp_dir: ctx.project_path.join(STATE_DIR).join("_tmp"),
            site_dir: ctx.project_path.join(format!("{}.slate", slug)),
            project_dir: ctx.project_path.join(format!("{}.src", slug)),
        };
        debug!(
            "Backend inited: working_dir={}, tmp_dir={}, template={}",
            backend.working_dir.display(),
            backend.tmp_dir.display(),
            backend.template.url()
        );
        backend
    }

    /// Output directory of the `site` target.
    pub fn site_dir(&self) -> &Path {
        &self.site_dir
    }

    /// Output directory of the `slate` target.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Scratch directory the project is assembled in.
    pub fn tmp_dir(&self) -> &Path {
        &self.tmp_dir
    }

    /// Assemble the project and produce `target`. Returns the output
    /// directory.
    pub fn make_target(&self, target: Target) -> Result<PathBuf> {
        info!("Making {}", target);

        remove_tree(&self.tmp_dir)?;
        fs::create_dir_all(&self.tmp_dir)?;

        self.template.sync()?;
        copy_tree(self.template.checkout_dir(), &self.tmp_dir)?;
        self.add_shards()?;

        let source_dir = self.tmp_dir.join("source");
        remove_file_if_exists(&source_dir.join("index.html.md"))?;
        remove_file_if_exists(&source_dir.join("includes").join("_errors.md"))?;

        let entry = source_dir.join("index.html.md.erb");
        fs::create_dir_all(&source_dir)?;
        fs::write(&entry, self.assemble_content(&source_dir)?)?;
        header::inject(&entry, &self.config.header)?;

        match target {
            Target::Site => {
                builder::run(&self.config.build_command, &self.tmp_dir)?;
                replace_tree(&self.tmp_dir.join("build"), &self.site_dir)?;
                info!("Site written to {}", self.site_dir.display());
                Ok(self.site_dir.clone())
            }
            Target::Slate => {
                replace_tree(&self.tmp_dir, &self.project_dir)?;
                info!("Slate project written to {}", self.project_dir.display());
                Ok(self.project_dir.clone())
            }
        }
    }

    /// Merge each configured shard directory over the scratch project.
    fn add_shards(&self) -> Result<()> {
        for shard in self.config.shards.iter() {
            let shard_path = self.project_path.join(shard);
            if shard_path.is_dir() {
                let copied = copy_replace(&shard_path, &self.tmp_dir)?;
                debug!("Shard {} added ({} files)", shard_path.display(), copied);
            } else {
                warn!("Shard {} not found, skipping", shard_path.display());
            }
        }
        Ok(())
    }

    /// The documents that make up the page: the flattened source when the
    /// pipeline produced one, otherwise each chapter in order.
    fn source_documents(&self) -> Result<Vec<PathBuf>> {
        let flat = self.working_dir.join(FLAT_SRC_FILE_NAME);
        if flat.is_file() {
            return Ok(vec![flat]);
        }
        if self.chapters.is_empty() {
            return Err(Error::Filesystem {
                message: format!(
                    "Neither {} nor any chapters found in {}",
                    FLAT_SRC_FILE_NAME,
                    self.working_dir.display()
                ),
            });
        }
        debug!(
            "{} not found, assembling {} chapters",
            FLAT_SRC_FILE_NAME,
            self.chapters.len()
        );
        Ok(self.chapters.paths().collect())
    }

    /// Read the source documents, copy their local images into
    /// `source/images` and join them into one page.
    fn assemble_content(&self, source_dir: &Path) -> Result<String> {
        let staging = StagingDir::new(source_dir.join(IMAGES_DIR), self.config.image_names);
        let rewriter = Rewriter::new(
            &self.working_dir,
            staging,
            Mode::Bundle {
                prefix: IMAGES_DIR.to_string(),
            },
        )?;

        let mut parts = Vec::new();
        for document in self.source_documents()? {
            let content = fs::read_to_string(&document)
                .map_err(|e| Error::from(e).in_document(&document))?;
            let rewritten = rewriter
                .rewrite(&content, &document)
                .map_err(|e| e.in_document(&document))?;
            debug!(
                "{}: {} images staged",
                document.display(),
                rewritten.collected.len()
            );
            parts.push(rewritten.text);
        }
        Ok(parts.join("\n\n"))
    }
}

impl Backend for SlateBackend {
    fn targets(&self) -> &'static [&'static str] {
        TARGETS
    }

    fn required_preprocessors_after(&self) -> Vec<RequiredPreprocessor> {
        vec![RequiredPreprocessor {
            name: "flatten",
            options: vec![("flat_src_file_name", FLAT_SRC_FILE_NAME)],
        }]
    }

    fn make(&mut self, target: &str) -> Result<PathBuf> {
        self.make_target(target.parse()?)
    }
}
