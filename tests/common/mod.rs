//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_doc("index.md", "![a](../a.png)");
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
#[allow(unused_imports)]
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    pub use super::configs;
    pub use super::git_available;
    pub use super::TestFixture;
}

/// Common configuration YAML snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Configuration with only a title; the slug derives from it.
    pub const MINIMAL: &str = "title: Payments API\n";

    /// Configuration with an explicit slug and a front matter header.
    pub const WITH_HEADER: &str = r#"
title: Payments API
slug: payments
backend_config:
  slate:
    header:
      title: Payments API Reference
      language_tabs: [shell, python]
      search: true
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "title: [unclosed";
}

/// True when a `git` executable can be run.
#[allow(dead_code)]
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// A project directory with a `src/` working directory and an optional
/// `slatedoc.yml`.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty `src/` directory.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("src")
            .create_dir_all()
            .expect("Failed to create src directory");
        Self { temp_dir }
    }

    /// Add a `slatedoc.yml` configuration file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child("slatedoc.yml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Add a file relative to the project directory.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add a binary file relative to the project directory.
    pub fn with_binary_file(self, path: &str, content: &[u8]) -> Self {
        self.temp_dir
            .child(path)
            .write_binary(content)
            .expect("Failed to write binary file");
        self
    }

    /// Add a Markdown document relative to the working directory.
    pub fn with_doc(self, path: &str, content: &str) -> Self {
        let path = format!("src/{}", path);
        self.with_file(&path, content)
    }

    /// Create a committed git repository at `template/` holding a minimal
    /// Slate layout and return its path.
    pub fn init_template_repo(&self) -> PathBuf {
        let repo = self.temp_dir.child("template");
        repo.child("Gemfile")
            .write_str("source 'https://rubygems.org'\n")
            .expect("Failed to write Gemfile");
        repo.child("source/index.html.md")
            .write_str("sample")
            .expect("Failed to write sample page");
        repo.child("source/includes/_errors.md")
            .write_str("sample errors")
            .expect("Failed to write sample errors");
        repo.child("source/stylesheets/screen.css")
            .write_str("body {}")
            .expect("Failed to write stylesheet");

        for args in [
            &["init", "-q"][..],
            &["add", "."][..],
            &[
                "-c",
                "user.name=test",
                "-c",
                "user.email=test@example.com",
                "commit",
                "-q",
                "-m",
                "template",
            ][..],
        ] {
            let status = Command::new("git")
                .args(args)
                .current_dir(repo.path())
                .status()
                .expect("Failed to run git");
            assert!(status.success(), "git {:?} failed", args);
        }
        repo.path().to_path_buf()
    }

    /// Get the project directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the working directory.
    pub fn src(&self) -> PathBuf {
        self.temp_dir.path().join("src")
    }

    /// Create a child path in the project directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("slatedoc");
        cmd.current_dir(self.path());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_working_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.src().is_dir());
    }

    #[test]
    fn test_fixture_with_doc() {
        let fixture = TestFixture::new().with_doc("guide/intro.md", "hello");
        assert!(fixture.src().join("guide/intro.md").exists());
    }

    #[test]
    fn test_configs_are_valid_yaml() {
        for config in [configs::MINIMAL, configs::WITH_HEADER] {
            serde_yaml::from_str::<serde_yaml::Value>(config).expect("Config should be valid YAML");
        }
    }

    #[test]
    fn test_invalid_yaml_is_actually_invalid() {
        let result = serde_yaml::from_str::<serde_yaml::Value>(configs::INVALID_YAML);
        assert!(result.is_err(), "INVALID_YAML should not parse");
    }
}
