//! Check command implementation.
//!
//! Reports unbalanced audience markers without writing any output. The
//! filter itself degrades silently on such markers, so this is the command
//! to run in CI.

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::config::{ConfigOverrides, DocmarkConfig};
use crate::error::{CliError, Result};
use crate::ui;
use docmark_filter::{FilterReport, ProcessOptions, process};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Execute the check command.
///
/// Every markdown file under `args.paths` is parsed and filtered leniently;
/// each marker issue is printed as `path:line:column: description`.
///
/// # Errors
///
/// Returns [`CliError::Unbalanced`] when any file has a marker issue, and
/// I/O or parse errors for files that cannot be processed at all.
pub fn execute(args: CheckArgs, config_path: Option<&Path>) -> Result<()> {
    let config = DocmarkConfig::load(&ConfigOverrides::default(), config_path)?;
    config.validate()?;

    let files = utils::collect_markdown_files(&args.paths, &config.extensions)?;
    if files.is_empty() {
        ui::warning("No markdown files found");
        return Ok(());
    }

    ui::info(&format!("Checking {}...", ui::format_count(files.len(), "file")));

    let reports = check_files(&files, &config)?;

    let mut unbalanced_files = 0;
    let mut total_issues = 0;
    for (path, report) in &reports {
        let issues = report.issues();
        if issues.is_empty() {
            continue;
        }

        unbalanced_files += 1;
        total_issues += issues.len();
        for issue in issues {
            ui::error(&format!(
                "{}: {}",
                ui::format_location(path, issue.location),
                issue.describe()
            ));
        }
    }

    if unbalanced_files > 0 {
        return Err(CliError::Unbalanced {
            files: unbalanced_files,
            issues: total_issues,
        });
    }

    let markers: usize = reports.iter().map(|(_, report)| report.markers).sum();
    ui::success(&format!(
        "{} checked, {} balanced",
        ui::format_count(reports.len(), "file"),
        ui::format_count(markers, "marker")
    ));
    Ok(())
}

/// Filter report for each file, in input order
pub fn check_files(
    files: &[PathBuf],
    config: &DocmarkConfig,
) -> Result<Vec<(PathBuf, FilterReport)>> {
    files
        .par_iter()
        .map(|path| check_file(path, config).map(|report| (path.clone(), report)))
        .collect()
}

fn check_file(path: &Path, config: &DocmarkConfig) -> Result<FilterReport> {
    let source = utils::read_source(path)?;

    // Marker pairing does not depend on the target, and strict mode would
    // stop at the first issue.
    let options = ProcessOptions {
        strict: false,
        ..utils::process_options(config, path)
    };
    let result = process(&source, options)?;

    tracing::debug!(
        file = %path.display(),
        markers = result.report.markers,
        balanced = result.report.is_balanced(),
        "Checked markers"
    );
    Ok(result.report)
}
