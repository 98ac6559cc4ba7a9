//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use docmark_filter::FilterError;
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Filter(e) => filter_error_to_miette(*e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert a markdown processing error, moving its suggestion into the help line
pub fn filter_error_to_miette(err: FilterError) -> Report {
    let mut message = err.message.clone();
    if let Some(file) = &err.file {
        message.push_str(&format!("\n  in {}", file));
    }
    if let (Some(line), Some(column)) = (err.line, err.column) {
        message.push_str(&format!("\n  at line {}, column {}", line, column));
    }
    if let Some(context) = &err.context {
        message.push_str(&format!("\n\n{}", context.trim_end()));
    }

    match err.suggestion {
        Some(suggestion) => miette::miette!(help = suggestion, "{}", message),
        None => miette::miette!("{}", message),
    }
}
