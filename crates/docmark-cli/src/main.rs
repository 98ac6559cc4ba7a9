//! Docmark CLI - audience-conditional markdown filtering.
//!
//! This is the main entry point for the Docmark CLI. It handles command-line
//! argument parsing, logging initialization, and command dispatch.

use clap::Parser;
use docmark_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let config_path = args.config.as_deref();

    // Execute the appropriate command
    let result = match args.command {
        cli::Command::Filter(filter_args) => commands::filter_execute(filter_args, config_path),
        cli::Command::Check(check_args) => commands::check_execute(check_args, config_path),
        cli::Command::Diagrams(diagrams_args) => {
            commands::diagrams_execute(diagrams_args, config_path)
        }
        cli::Command::Init(init_args) => commands::init_execute(init_args),
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
