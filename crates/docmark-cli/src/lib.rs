//! Docmark CLI - audience-conditional markdown filtering.
//!
//! This crate provides the command-line interface over `docmark-filter`:
//! filtering markdown into audience-specific mdast JSON, checking marker
//! balance across a docs tree, and making sure diagram images exist before
//! a docs site is served.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - One module per subcommand, each exposing `execute`
//! - [`config`] - `docmark.config.json` loading with figment
//! - [`error`] - Error types with actionable hints
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Colored status lines on stderr
//!
//! # Example
//!
//! ```rust,no_run
//! use docmark_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     // CLI command implementations...
//!     Ok(())
//! }
//! ```

// Public modules
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, ConfigError, Result, ResultExt};
