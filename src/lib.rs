//! # slatedoc
//!
//! This library turns a tree of Markdown documents into a project for the
//! [Slate](https://github.com/slatedocs/slate) API documentation generator.
//! It is used by the `slatedoc` command-line tool and can be driven by any
//! documentation pipeline through the traits in [`plugin`].
//!
//! ## Quick Example
//!
//! ```
//! use slatedoc::images::Scanner;
//!
//! let scanner = Scanner::new().unwrap();
//! let text = "See ![Flow](img/flow.png) and ![Badge](https://example.com/b.svg).";
//! let local: Vec<_> = scanner.scan(text).filter(|r| r.is_local()).collect();
//! assert_eq!(local.len(), 1);
//! assert_eq!(local[0].caption, "Flow");
//! assert_eq!(local[0].path, "img/flow.png");
//! ```
//!
//! ## Core Concepts
//!
//! - **Image references (`images`)**: Finds `![caption](path)` references,
//!   resolves them against their document, copies images that live outside
//!   the working directory into a staging directory and rewrites the
//!   references to point at the copies.
//! - **Preprocessor (`preprocessor`)**: Runs the image pass over every
//!   Markdown file of a working directory.
//! - **Backend (`backend`)**: Clones the Slate template (`template`, `git`),
//!   merges shards over it (`filesystem`), writes the page with its front
//!   matter (`header`) and optionally runs the site build (`builder`).
//! - **Configuration (`config`, `chapters`)**: The `slatedoc.yml` project
//!   file.
//!
//! ## Execution Flow
//!
//! A pipeline typically runs the preprocessor over its working directory,
//! flattens the chapters into a single `__all__.md`, then asks the backend
//! for the `slate` or `site` target.

pub mod backend;
pub mod builder;
pub mod chapters;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod git;
pub mod header;
pub mod images;
pub mod path;
pub mod plugin;
pub mod preprocessor;
pub mod template;

#[cfg(test)]
mod path_proptest;
