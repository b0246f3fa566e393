//! Collect command implementation
//!
//! Runs the image-collecting pass over a working directory: images
//! referenced from outside it are copied into a staging directory and the
//! references are rewritten to point at the copies.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use slatedoc::config::ProjectConfig;
use slatedoc::images::{NamingStrategy, StagingDir};
use slatedoc::plugin::{PluginContext, Preprocessor};
use slatedoc::preprocessor::SlatePreprocessor;

/// Arguments for the collect command
#[derive(Args, Debug)]
pub struct CollectArgs {
    /// Directory holding the Markdown sources (defaults to current directory)
    #[arg(short, long, value_name = "PATH")]
    pub working_dir: Option<PathBuf>,

    /// Name of the staging directory inside the working directory
    /// (defaults to a fresh img_<uuid>)
    #[arg(short, long, value_name = "NAME")]
    pub staging_dir: Option<String>,

    /// Name copies stem.ext, stem_2.ext, ... instead of stem_<uuid>.ext
    #[arg(long)]
    pub counter_names: bool,
}

/// Execute the collect command
pub fn execute(args: CollectArgs, quiet: bool) -> Result<()> {
    let working_dir = match args.working_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    if !working_dir.is_dir() {
        anyhow::bail!("Working directory not found: {}", working_dir.display());
    }

    let naming = if args.counter_names {
        NamingStrategy::Counter
    } else {
        NamingStrategy::Token
    };
    let ctx = PluginContext::new(&working_dir, &working_dir, ProjectConfig::default());
    let staging = match args.staging_dir {
        Some(name) => StagingDir::new(working_dir.join(name), naming),
        None => StagingDir::unique_in(&working_dir).with_naming(naming),
    };
    let mut preprocessor = SlatePreprocessor::with_staging(&ctx, staging);

    let report = preprocessor
        .apply()
        .with_context(|| format!("Collect failed in {}", working_dir.display()))?;

    if !quiet {
        println!(
            "✅ {} documents scanned, {} changed",
            report.documents, report.changed
        );
        println!(
            "   {} references rewritten, {} images collected",
            report.rewritten, report.collected
        );
        if report.collected > 0 {
            println!("   Images staged in: {}", preprocessor.staging().path().display());
        }
    }

    Ok(())
}
