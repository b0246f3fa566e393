//! Make command implementation
//!
//! Loads the project configuration and asks the Slate backend for a
//! target:
//! - `slate`: the assembled Slate project in `<project>/<slug>.src`
//! - `site`: the rendered site in `<project>/<slug>.slate`

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use slatedoc::backend::{SlateBackend, Target};
use slatedoc::config::{from_file, DEFAULT_CONFIG_FILE};
use slatedoc::plugin::{Backend, PluginContext};

/// Directory under the project holding the Markdown sources by default.
const DEFAULT_SRC_DIR: &str = "src";

/// Arguments for the make command
#[derive(Args, Debug)]
pub struct MakeArgs {
    /// Target to build (slate, site)
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Path to config file (defaults to <project>/slatedoc.yml)
    #[arg(short, long, value_name = "PATH", env = "SLATEDOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project directory (defaults to current directory)
    #[arg(short, long, value_name = "PATH", env = "SLATEDOC_PROJECT")]
    pub project: Option<PathBuf>,

    /// Directory holding the Markdown sources (defaults to <project>/src)
    #[arg(short, long, value_name = "PATH")]
    pub working_dir: Option<PathBuf>,
}

/// Execute the make command
pub fn execute(args: MakeArgs, quiet: bool) -> Result<()> {
    let start_time = Instant::now();

    let target: Target = args.target.parse()?;

    let project = match args.project {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    let config_path = args
        .config
        .unwrap_or_else(|| project.join(DEFAULT_CONFIG_FILE));
    if !config_path.exists() {
        anyhow::bail!("Configuration file not found: {}", config_path.display());
    }
    let working_dir = args
        .working_dir
        .unwrap_or_else(|| project.join(DEFAULT_SRC_DIR));
    if !working_dir.is_dir() {
        anyhow::bail!("Working directory not found: {}", working_dir.display());
    }

    let config = from_file(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    let ctx = PluginContext::new(&project, &working_dir, config);
    let mut backend = SlateBackend::new(&ctx);

    let spinner = if quiet {
        None
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message(format!("Making {}", target));
        Some(spinner)
    };

    let result = backend.make(&target.to_string());

    if let Some(spinner) = &spinner {
        spinner.finish_and_clear();
    }

    let output = result.context("Build failed")?;
    if !quiet {
        println!(
            "✅ {} built in {:.2}s",
            target,
            start_time.elapsed().as_secs_f64()
        );
        println!("   Output written to: {}", output.display());
    }

    Ok(())
}
