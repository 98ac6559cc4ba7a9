//! Filter command implementation.
//!
//! Parses markdown files, filters them for the configured audience and
//! writes each filtered mdast tree as JSON.

use crate::cli::FilterArgs;
use crate::commands::utils;
use crate::config::{ConfigOverrides, DocmarkConfig};
use crate::error::{CliError, Result};
use crate::ui;
use docmark_filter::{ProcessResult, process};
use markdown::mdast::Node;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// One processed input file
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: ProcessResult,
}

/// Execute the filter command.
///
/// # Process
///
/// 1. Load and validate configuration (CLI flags win over the config file)
/// 2. Filter every file in parallel
/// 3. Write JSON to stdout (single file, no output directory) or to
///    `<out-dir>/<stem>.json`
/// 4. Warn about unbalanced markers that were filtered leniently
///
/// # Errors
///
/// Fails on unreadable files, parse errors, strict-mode marker problems, and
/// when several inputs would write the same output file.
pub fn execute(args: FilterArgs, config_path: Option<&Path>) -> Result<()> {
    let config = DocmarkConfig::load(&ConfigOverrides::from(&args), config_path)?;
    config.validate()?;

    if config.out_dir.is_none() && args.files.len() > 1 {
        return Err(CliError::InvalidArgument(
            "--out-dir is required when filtering more than one file".to_string(),
        ));
    }

    if let Some(out_dir) = &config.out_dir {
        check_unique_outputs(&args.files, out_dir)?;
    }

    let start = Instant::now();
    tracing::debug!(files = args.files.len(), target = %config.target, "Filtering");

    let outcomes = filter_files(&args.files, &config)?;

    match &config.out_dir {
        None => {
            if let Some(outcome) = outcomes.first() {
                write_json(io::stdout().lock(), &outcome.result.tree, args.pretty)?;
            }
        }
        Some(out_dir) => {
            fs::create_dir_all(out_dir)?;
            for outcome in &outcomes {
                let path = utils::output_path(out_dir, &outcome.path);
                let file = File::create(&path)?;
                write_json(BufWriter::new(file), &outcome.result.tree, args.pretty)?;
                tracing::debug!(
                    input = %outcome.path.display(),
                    output = %path.display(),
                    removed = outcome.result.report.removed,
                    "Wrote filtered tree"
                );
            }
        }
    }

    for outcome in &outcomes {
        for issue in outcome.result.report.issues() {
            ui::warning(&format!(
                "{}: {}",
                ui::format_location(&outcome.path, issue.location),
                issue.describe()
            ));
        }
    }

    ui::success(&format!(
        "Filtered {} for {} in {}",
        ui::format_count(outcomes.len(), "file"),
        config.target,
        ui::format_duration(start.elapsed())
    ));

    Ok(())
}

/// Filter files in parallel, keeping input order.
///
/// Each task owns its source and tree, so nothing is shared between them.
pub fn filter_files(files: &[PathBuf], config: &DocmarkConfig) -> Result<Vec<FileOutcome>> {
    files
        .par_iter()
        .map(|path| filter_file(path, config))
        .collect()
}

fn filter_file(path: &Path, config: &DocmarkConfig) -> Result<FileOutcome> {
    let source = utils::read_source(path)?;
    let result = process(&source, utils::process_options(config, path))?;

    Ok(FileOutcome {
        path: path.to_path_buf(),
        result,
    })
}

/// Refuse inputs that would overwrite each other's output
fn check_unique_outputs(files: &[PathBuf], out_dir: &Path) -> Result<()> {
    let mut seen: FxHashMap<PathBuf, &Path> = FxHashMap::default();

    for file in files {
        let output = utils::output_path(out_dir, file);
        if let Some(previous) = seen.insert(output.clone(), file.as_path()) {
            if previous != file.as_path() {
                return Err(CliError::InvalidArgument(format!(
                    "{} and {} would both be written to {}",
                    previous.display(),
                    file.display(),
                    output.display()
                )));
            }
        }
    }

    Ok(())
}

fn write_json(mut writer: impl Write, tree: &Node, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, tree)?;
    } else {
        serde_json::to_writer(&mut writer, tree)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_check_unique_outputs() {
        let out = Path::new("out");
        let distinct = vec![PathBuf::from("a/intro.md"), PathBuf::from("a/setup.md")];
        assert!(check_unique_outputs(&distinct, out).is_ok());

        // The same file twice is harmless
        let repeated = vec![PathBuf::from("intro.md"), PathBuf::from("intro.md")];
        assert!(check_unique_outputs(&repeated, out).is_ok());

        let clashing = vec![PathBuf::from("a/intro.md"), PathBuf::from("b/intro.md")];
        let err = check_unique_outputs(&clashing, out).unwrap_err();
        assert!(err.to_string().contains("would both be written to"));
    }

    #[test]
    fn test_filter_files_keeps_order() {
        let temp = TempDir::new().unwrap();
        let files: Vec<PathBuf> = (0..8)
            .map(|i| {
                let path = temp.path().join(format!("page{}.md", i));
                fs::write(&path, format!("Page {}\n", i)).unwrap();
                path
            })
            .collect();

        let outcomes = filter_files(&files, &DocmarkConfig::default()).unwrap();

        let paths: Vec<&PathBuf> = outcomes.iter().map(|o| &o.path).collect();
        assert_eq!(paths, files.iter().collect::<Vec<_>>());
        assert_eq!(outcomes[3].result.tree.to_string(), "Page 3");
    }

    #[test]
    fn test_filter_file_strict_failure_names_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.md");
        fs::write(&path, "A\n\n<!-- /PPT_ONLY -->\n").unwrap();
        let config = DocmarkConfig {
            strict: true,
            ..DocmarkConfig::default()
        };

        let err = filter_file(&path, &config).unwrap_err();

        match err {
            CliError::Filter(e) => {
                assert_eq!(e.file.as_deref(), Some(path.display().to_string().as_str()));
                assert_eq!(e.line, Some(3));
            }
            other => panic!("expected a filter error, got {other:?}"),
        }
    }

    #[test]
    fn test_write_json() {
        let result = process("Hello\n", Default::default()).unwrap();
        let mut compact = Vec::new();
        write_json(&mut compact, &result.tree, false).unwrap();
        let mut pretty = Vec::new();
        write_json(&mut pretty, &result.tree, true).unwrap();

        let compact = String::from_utf8(compact).unwrap();
        assert!(compact.starts_with("{\"type\":\"root\""));
        assert_eq!(compact.lines().count(), 1);
        assert!(String::from_utf8(pretty).unwrap().lines().count() > 1);
    }
}
