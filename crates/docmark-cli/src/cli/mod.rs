//! Command-line interface definition for Docmark.
//!
//! This module defines the complete CLI structure using clap v4's derive macros.
//!
//! # Command Structure
//!
//! - `docmark filter` - Filter markdown for one audience and emit mdast JSON
//! - `docmark check` - Report unbalanced audience markers across files
//! - `docmark diagrams` - Make sure diagram images exist, generating them if not
//! - `docmark init` - Write an example `docmark.config.json`

mod commands;
pub mod enums;
mod tests;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{CheckArgs, Command, DiagramsArgs, FilterArgs, InitArgs};
pub use enums::*;

/// Docmark - one markdown source, three audiences
#[derive(Parser, Debug)]
#[command(
    name = "docmark",
    version,
    about = "Audience-conditional markdown filtering",
    long_about = "Docmark filters markdown written once for several audiences.\n\
                  Content wrapped in <!-- PPT_ONLY -->, <!-- CONFLUENCE_ONLY --> or\n\
                  <!-- GITHUB_ONLY --> markers is kept only in the output built for\n\
                  that audience, and the markers themselves never reach the output."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows marker handling, plugin runs and per-file timings.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Only critical errors will be displayed. Useful for CI/CD environments
    /// or when piping output to other tools.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    ///
    /// Outputs plain text without ANSI color codes. Useful for logging to
    /// files or systems that don't support colored terminal output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to docmark.config.json
    ///
    /// If not provided, docmark.config.json in the current directory is used
    /// when it exists.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
