//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// slatedoc - Build Slate documentation from Markdown sources
#[derive(Parser, Debug)]
#[command(name = "slatedoc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Collect images referenced from outside the working directory
    Collect(commands::collect::CollectArgs),

    /// Build the Slate project or the rendered site
    Make(commands::make::MakeArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level, self.quiet);

        match self.command {
            Commands::Collect(args) => commands::collect::execute(args, self.quiet),
            Commands::Make(args) => commands::make::execute(args, self.quiet),
        }
    }
}

/// `--quiet` caps logging at errors whatever `--log-level` says.
fn init_logging(log_level: &str, quiet: bool) {
    let filters = if quiet { "error" } else { log_level };
    let _ = env_logger::Builder::new()
        .parse_filters(filters)
        .format_timestamp(None)
        .try_init();
}
