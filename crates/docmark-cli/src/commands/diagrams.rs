//! Diagrams command implementation.
//!
//! Docs pages embed diagrams rendered to images by a separate build step. This
//! command makes sure those images exist before the docs site starts, running
//! the generation command when the directory is missing or empty.

use crate::cli::DiagramsArgs;
use crate::config::{ConfigOverrides, DocmarkConfig};
use crate::error::Result;
use crate::ui;
use std::path::Path;
use std::process::{Command, ExitStatus};
use walkdir::WalkDir;

/// Image extensions counted as generated diagrams
const DIAGRAM_EXTENSIONS: &[&str] = &["png", "svg"];

/// What was found in the diagrams directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramStatus {
    /// The directory does not exist
    MissingDir,
    /// The directory exists but holds no diagram images
    Empty,
    /// Number of diagram images found
    Found(usize),
}

/// Execute the diagrams command.
///
/// Generation failures are reported as warnings only: a missing diagram
/// should not keep the docs site from starting.
pub fn execute(args: DiagramsArgs, config_path: Option<&Path>) -> Result<()> {
    let config = DocmarkConfig::load(&ConfigOverrides::from(&args), config_path)?;
    config.validate()?;

    match scan_diagrams(&config.diagrams_dir) {
        DiagramStatus::Found(count) => {
            ui::success(&format!(
                "Found {} in {}",
                ui::format_count(count, "diagram image"),
                config.diagrams_dir.display()
            ));
            return Ok(());
        }
        DiagramStatus::MissingDir => ui::warning(&format!(
            "Diagrams directory {} not found",
            config.diagrams_dir.display()
        )),
        DiagramStatus::Empty => ui::warning(&format!(
            "No diagram images found in {}",
            config.diagrams_dir.display()
        )),
    }

    if args.no_generate {
        ui::info(&format!("Run '{}' to generate them", config.diagrams_command));
        return Ok(());
    }

    generate(&config.diagrams_command);
    Ok(())
}

/// Count diagram images under `dir`, recursively.
///
/// Extensions are compared case-insensitively; unreadable entries are
/// skipped.
pub fn scan_diagrams(dir: &Path) -> DiagramStatus {
    if !dir.is_dir() {
        return DiagramStatus::MissingDir;
    }

    let count = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && is_diagram(entry.path()))
        .count();

    if count == 0 {
        DiagramStatus::Empty
    } else {
        DiagramStatus::Found(count)
    }
}

fn is_diagram(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| DIAGRAM_EXTENSIONS.iter().any(|d| d.eq_ignore_ascii_case(ext)))
}

/// Run the generation command, returning whether it succeeded
pub fn generate(command: &str) -> bool {
    ui::info(&format!("Running: {}", command));

    let failure = match run_shell(command) {
        Ok(status) if status.success() => {
            ui::success("Diagrams generated successfully");
            return true;
        }
        Ok(status) => status.to_string(),
        Err(err) => err.to_string(),
    };

    tracing::debug!(%failure, "Diagram generation failed");
    ui::error(&format!("Failed to generate diagrams ({})", failure));
    ui::warning("Diagrams may not be visible in the docs site");
    ui::info(&format!("Run manually: {}", command));
    false
}

/// Run `command` through the platform shell with inherited stdio
fn run_shell(command: &str) -> std::io::Result<ExitStatus> {
    let mut shell = if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    };
    shell.status()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_missing_dir() {
        let temp = TempDir::new().unwrap();
        assert_eq!(
            scan_diagrams(&temp.path().join("diagrams")),
            DiagramStatus::MissingDir
        );
    }

    #[test]
    fn test_scan_empty_dir_ignores_other_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("flow.mmd"), "graph TD").unwrap();
        assert_eq!(scan_diagrams(temp.path()), DiagramStatus::Empty);
    }

    #[test]
    fn test_scan_counts_recursively_and_ignores_case() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("arch")).unwrap();
        fs::write(temp.path().join("overview.PNG"), [0u8; 4]).unwrap();
        fs::write(temp.path().join("arch/layers.svg"), "<svg/>").unwrap();
        fs::write(temp.path().join("arch/notes.txt"), "").unwrap();

        assert_eq!(scan_diagrams(temp.path()), DiagramStatus::Found(2));
    }

    #[cfg(unix)]
    #[test]
    fn test_generate_reports_success_and_failure() {
        assert!(generate("true"));
        assert!(!generate("exit 3"));
    }

    #[cfg(unix)]
    #[test]
    fn test_generate_runs_through_shell() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("out");
        let command = format!(
            "mkdir -p '{0}' && touch '{0}/made.svg'",
            dir.display()
        );

        assert!(generate(&command));
        assert_eq!(scan_diagrams(&dir), DiagramStatus::Found(1));
    }
}
