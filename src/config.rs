//! # Project Configuration
//!
//! This module defines the typed configuration the backend and preprocessor
//! read from the project's YAML file (`slatedoc.yml` by default), and the
//! logic for parsing it.
//!
//! ## Key Components
//!
//! - **`ProjectConfig`**: project-wide settings: `title`, `slug`, the nested
//!   `chapters` list and the `backend_config` section.
//!
//! - **`SlateConfig`**: the `backend_config.slate` section. Every field has
//!   a documented default, so an empty or missing section is valid.
//!
//! ## Example
//!
//! ```yaml
//! title: Payments API
//! chapters:
//!   - intro.md
//!   - Reference:
//!       - auth.md
//!       - errors.md
//! backend_config:
//!   slate:
//!     shards: [theme, overrides]
//!     header:
//!       language_tabs: [shell, python]
//!       search: true
//! ```
//!
//! Keys this crate does not know about are ignored, so the same file can
//! carry settings for other tools in the pipeline.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::header::FrontMatter;
use crate::images::NamingStrategy;
use crate::path::slugify;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "slatedoc.yml";

/// Template project cloned when `template_repo` is not set.
pub const DEFAULT_TEMPLATE_REPO: &str = "https://github.com/lord/slate.git";

/// Shard directory used when `shards` is not set.
pub const DEFAULT_SHARD: &str = "shards";

/// Slug used when neither a slug nor a usable title is configured.
pub const FALLBACK_SLUG: &str = "docs";

fn default_build_command() -> Vec<String> {
    ["bundle", "exec", "middleman", "build", "--clean"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_template_repo() -> String {
    DEFAULT_TEMPLATE_REPO.to_string()
}

/// Project-wide settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub slug: Option<String>,

    /// Chapter list as written: any nesting of lists and mappings. See
    /// [`crate::chapters::Chapters`].
    #[serde(default)]
    pub chapters: serde_yaml::Value,

    #[serde(default)]
    pub backend_config: BackendConfig,
}

/// Per-backend configuration sections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub slate: SlateConfig,
}

/// Settings of the Slate backend.
#[derive(Debug, Clone, Deserialize)]
pub struct SlateConfig {
    /// Overrides the project slug for output directory names.
    #[serde(default)]
    pub slug: Option<String>,

    /// Front matter prepended to the entry document. Empty by default.
    #[serde(default)]
    pub header: FrontMatter,

    /// Shard directories, relative to the project path, merged over the
    /// template in order. A single string is accepted. Defaults to
    /// `shards`.
    #[serde(default)]
    pub shards: Shards,

    /// Git URL of the template project. Defaults to the upstream Slate
    /// repository.
    #[serde(default = "default_template_repo")]
    pub template_repo: String,

    /// Program and arguments that build the site, run inside the assembled
    /// project. Defaults to `bundle exec middleman build --clean`.
    #[serde(default = "default_build_command")]
    pub build_command: Vec<String>,

    /// Naming of images copied into `source/images`. Defaults to `token`.
    #[serde(default)]
    pub image_names: NamingStrategy,
}

impl Default for SlateConfig {
    fn default() -> Self {
        Self {
            slug: None,
            header: FrontMatter::default(),
            shards: Shards::default(),
            template_repo: default_template_repo(),
            build_command: default_build_command(),
            image_names: NamingStrategy::default(),
        }
    }
}

/// Ordered list of shard directories.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "ShardsRepr")]
pub struct Shards(pub Vec<PathBuf>);

#[derive(Deserialize)]
#[serde(untagged)]
enum ShardsRepr {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

impl From<ShardsRepr> for Shards {
    fn from(repr: ShardsRepr) -> Self {
        match repr {
            ShardsRepr::One(path) => Shards(vec![path]),
            ShardsRepr::Many(paths) => Shards(paths),
        }
    }
}

impl Default for Shards {
    fn default() -> Self {
        Shards(vec![PathBuf::from(DEFAULT_SHARD)])
    }
}

impl Shards {
    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.0.iter()
    }
}

impl ProjectConfig {
    /// The slug used for output directory names: the Slate slug, else the
    /// project slug, else the slugified title, else `docs`.
    pub fn slug(&self) -> String {
        self.backend_config
            .slate
            .slug
            .clone()
            .or_else(|| self.slug.clone())
            .or_else(|| {
                self.title
                    .as_deref()
                    .map(slugify)
                    .filter(|s| !s.is_empty())
            })
            .unwrap_or_else(|| FALLBACK_SLUG.to_string())
    }

    pub fn slate(&self) -> &SlateConfig {
        &self.backend_config.slate
    }
}

/// Parse a configuration from a YAML string. An empty document yields the
/// defaults.
pub fn parse(yaml_content: &str) -> Result<ProjectConfig> {
    if yaml_content.trim().is_empty() {
        return Ok(ProjectConfig::default());
    }

    let config: ProjectConfig = serde_yaml::from_str(yaml_content).map_err(|e| {
        let message = e.to_string();
        let lower = message.to_lowercase();
        let hint = if lower.contains("shards") {
            Some("`shards` takes a directory name or a list of them".to_string())
        } else if lower.contains("image_names") || lower.contains("`counter`") {
            Some("`image_names` is either `token` or `counter`".to_string())
        } else {
            None
        };
        Error::ConfigParse { message, hint }
    })?;

    if config.slate().build_command.is_empty() {
        return Err(Error::ConfigParse {
            message: "backend_config.slate.build_command is empty".to_string(),
            hint: Some("Remove the key to use `bundle exec middleman build --clean`".to_string()),
        });
    }

    Ok(config)
}

/// Read and parse a configuration file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ProjectConfig> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::ConfigParse {
        message: format!("Failed to read {}: {}", path.as_ref().display(), e),
        hint: None,
    })?;
    parse(&content)
}
