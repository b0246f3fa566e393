//! # Image Reference Handling
//!
//! Everything needed to make the images a Markdown document refers to live
//! inside the tree that will be handed to the site generator.
//!
//! - **`scanner`**: finds `![caption](path)` references and tells local
//!   files from URLs.
//! - **`resolve`**: resolves a reference against its document's directory
//!   and classifies it as inside or outside the working directory.
//! - **`collector`**: copies images into a staging directory under
//!   collision-free names.
//! - **`rewrite`**: ties the three together and produces the rewritten
//!   document text.

pub mod collector;
pub mod resolve;
pub mod rewrite;
pub mod scanner;

pub use collector::{CollectedImage, NamingStrategy, StagingDir};
pub use resolve::{Location, Resolved, Resolver};
pub use rewrite::{Mode, Rewriter, Rewritten};
pub use scanner::{ImageRef, RefKind, Scanner};
