//! YAML front matter for the Slate entry document.
//!
//! Slate reads its page settings (title, language tabs, table-of-contents
//! footers, included partials, search) from a YAML block at the top of
//! `source/index.html.md`. [`FrontMatter`] types the keys Slate knows
//! about and keeps anything else in `extra`, so project configuration can
//! pass through settings this crate does not model.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

use crate::error::Result;

/// Slate page settings written as front matter.
///
/// Keys are written in field order (`title`, `language_tabs`,
/// `toc_footers`, `includes`, `search`, `code_clipboard`,
/// `highlight_theme`, `meta`), then the `extra` keys in the order they were
/// read. Keys are not sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Languages shown as code tabs, e.g. `shell`, `ruby`, `python`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub language_tabs: Vec<serde_yaml::Value>,

    /// Lines of HTML/Markdown rendered below the table of contents.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub toc_footers: Vec<String>,

    /// Partials from `source/includes` appended after the main document.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub includes: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_clipboard: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_theme: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meta: Vec<Mapping>,

    /// Any other key, passed through unchanged.
    #[serde(flatten)]
    pub extra: Mapping,
}

impl FrontMatter {
    pub fn is_empty(&self) -> bool {
        *self == FrontMatter::default()
    }

    /// The YAML body of the header, without the `---` fences.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Prepend the header to `content`. An empty header leaves `content`
    /// as it is.
    pub fn render_onto(&self, content: &str) -> Result<String> {
        if self.is_empty() {
            return Ok(content.to_string());
        }
        Ok(format!("---\n{}\n---\n\n{}", self.to_yaml()?, content))
    }
}

/// Insert `header` at the top of the file at `path`.
pub fn inject(path: &Path, header: &FrontMatter) -> Result<()> {
    if header.is_empty() {
        debug!("No header configured for {}", path.display());
        return Ok(());
    }
    let content = fs::read_to_string(path)?;
    fs::write(path, header.render_onto(&content)?)?;
    debug!("Header added to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> FrontMatter {
        serde_yaml::from_str(
            r#"
title: API Reference
language_tabs:
  - shell
  - ruby: Ruby
toc_footers:
  - <a href='#'>Sign Up</a>
includes:
  - errors
search: true
custom_key: kept
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_default_is_empty() {
        assert!(FrontMatter::default().is_empty());
        assert!(!sample().is_empty());
    }

    #[test]
    fn test_unknown_keys_kept_in_extra() {
        let header = sample();
        assert_eq!(header.title.as_deref(), Some("API Reference"));
        assert_eq!(header.language_tabs.len(), 2);
        assert_eq!(header.search, Some(true));
        assert_eq!(
            header.extra.get("custom_key"),
            Some(&serde_yaml::Value::String("kept".to_string()))
        );
    }

    #[test]
    fn test_render_onto_layout() {
        let header = FrontMatter {
            title: Some("Docs".to_string()),
            ..Default::default()
        };
        let out = header.render_onto("# Body\n").unwrap();
        assert_eq!(out, "---\ntitle: Docs\n\n---\n\n# Body\n");
    }

    #[test]
    fn test_keys_written_in_field_order() {
        let header: FrontMatter = serde_yaml::from_str(
            "zeta: 1\nsearch: true\nincludes: [errors]\ntitle: API\nalpha: 2\n",
        )
        .unwrap();
        let yaml = header.to_yaml().unwrap();
        let keys: Vec<&str> = yaml
            .lines()
            .filter_map(|l| l.split(':').next())
            .filter(|k| !k.starts_with(' ') && !k.starts_with('-'))
            .collect();
        assert_eq!(keys, vec!["title", "includes", "search", "zeta", "alpha"]);
    }

    #[test]
    fn test_empty_fields_not_serialized() {
        let yaml = FrontMatter {
            search: Some(false),
            ..Default::default()
        }
        .to_yaml()
        .unwrap();
        assert_eq!(yaml, "search: false\n");
    }

    #[test]
    fn test_inject_writes_header() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("index.html.md.erb");
        fs::write(&file, "Hello").unwrap();

        inject(&file, &sample()).unwrap();

        let text = fs::read_to_string(&file).unwrap();
        assert!(text.starts_with("---\ntitle: API Reference\n"));
        assert!(text.contains("custom_key: kept"));
        assert!(text.ends_with("\n---\n\nHello"));
    }

    #[test]
    fn test_inject_empty_header_leaves_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("index.html.md.erb");
        fs::write(&file, "Hello").unwrap();

        inject(&file, &FrontMatter::default()).unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "Hello");
    }
}
