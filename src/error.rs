//! # Error Handling
//!
//! This module defines the centralized error type for the `slatedoc`
//! library. It uses the `thiserror` library to create a single `Error` enum
//! that covers every anticipated failure mode, each variant carrying enough
//! context (paths, commands, captured output) to diagnose the failure
//! without re-running with extra logging.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. Variants cover configuration parsing, git
//!   checkout of the template project, the external site build, image
//!   collection, per-document failures of the apply pass, and wrapped
//!   I/O, YAML and regex errors.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Failures are never recovered locally: a failure while rewriting one
//! document aborts the whole pass and is wrapped in `Error::Document` so
//! the caller knows which file was being processed.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for slatedoc operations
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred while parsing the project configuration file.
    ///
    /// This error includes the specific parsing issue and optionally a hint
    /// about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// An error occurred while cloning the template repository.
    #[error("Git clone error for {url}: {message}")]
    GitClone { url: String, message: String },

    /// An error occurred while executing a git command in an existing
    /// checkout.
    #[error("Git command failed in {dir}: {command} - {stderr}")]
    GitCommand {
        command: String,
        dir: String,
        stderr: String,
    },

    /// The external site build command could not be started or exited with
    /// a non-zero status. `output` holds the combined stdout and stderr.
    #[error("Build command failed: {command}\n{output}")]
    BuildCommand { command: String, output: String },

    /// A backend was asked for a target it does not produce.
    #[error("Unsupported target '{target}', expected one of: {supported}")]
    UnsupportedTarget { target: String, supported: String },

    /// An image could not be copied into the staging directory.
    #[error("Failed to collect image {} into {}: {source}", src.display(), dst.display())]
    Collect {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A failure while processing a single document. Wraps the underlying
    /// error with the path of the document being rewritten.
    #[error("Processing document {}: {source}", path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    /// An error occurred with an on-disk tree operation.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing or serialization error, wrapped from
    /// `serde_yaml::Error`.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// A directory walk failed part-way.
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wraps `self` with the path of the document that was being processed.
    pub fn in_document(self, path: impl Into<PathBuf>) -> Self {
        Error::Document {
            path: path.into(),
            source: Box::new(self),
        }
    }
}
