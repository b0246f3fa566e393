//! # CLI Command Implementations
//!
//! Each subcommand of `slatedoc` lives in its own file with:
//! - An `Args` struct that defines the command-specific options, derived
//!   using `clap`.
//! - An `execute` function that takes the parsed `Args` and calls into the
//!   `slatedoc` library.

pub mod collect;
pub mod make;
