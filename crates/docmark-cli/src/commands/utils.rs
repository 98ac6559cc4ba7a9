//! Shared utilities for command implementations.
//!
//! - Markdown file discovery
//! - Reading sources with path-aware errors
//! - Mapping configuration onto processing options

use crate::config::DocmarkConfig;
use crate::error::{CliError, Result, ResultExt};
use docmark_filter::ProcessOptions;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directory names never descended into
const SKIPPED_DIRS: &[&str] = &["node_modules", "target"];

/// Collect markdown files from files and directories.
///
/// Files named explicitly are taken as-is. Directories are walked
/// recursively for files whose extension is in `extensions` (compared
/// case-insensitively), skipping hidden directories and [`SKIPPED_DIRS`].
/// The result is sorted and free of duplicates.
pub fn collect_markdown_files(paths: &[PathBuf], extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }

        if !path.is_dir() {
            return Err(CliError::FileNotFound(path.clone()));
        }

        let walker = WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry));

        for entry in walker {
            let entry = entry.map_err(|e| CliError::Io(e.into()))?;
            if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
                files.push(entry.into_path());
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref())
}

/// Whether `path` has one of `extensions`, ignoring case
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Read a markdown source, reporting a missing file by path
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_path(path)
}

/// Processing options for one file under `config`
pub fn process_options(config: &DocmarkConfig, path: &Path) -> ProcessOptions {
    ProcessOptions::builder()
        .filepath(path.display().to_string())
        .target(config.target.into())
        .gfm(config.gfm)
        .frontmatter(config.frontmatter)
        .strict(config.strict)
        .build()
}

/// `<out_dir>/<stem>.json` for an input file
pub fn output_path(out_dir: &Path, input: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "output".into());
    name.push(".json");
    out_dir.join(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn extensions() -> Vec<String> {
        crate::config::default_extensions()
    }

    #[test]
    fn test_has_extension() {
        assert!(has_extension(Path::new("intro.md"), &extensions()));
        assert!(has_extension(Path::new("INTRO.MD"), &extensions()));
        assert!(has_extension(Path::new("page.mdx"), &extensions()));
        assert!(!has_extension(Path::new("notes.txt"), &extensions()));
        assert!(!has_extension(Path::new("README"), &extensions()));
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("out"), Path::new("docs/guide/intro.md")),
            PathBuf::from("out/intro.json")
        );
        assert_eq!(
            output_path(Path::new("out"), Path::new("v1.2.md")),
            PathBuf::from("out/v1.2.json")
        );
    }

    #[test]
    fn test_collect_walks_and_skips() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("guide")).unwrap();
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join("index.md"), "# Home").unwrap();
        fs::write(root.join("guide/setup.markdown"), "Setup").unwrap();
        fs::write(root.join("guide/diagram.png"), [0u8; 4]).unwrap();
        fs::write(root.join("node_modules/pkg/README.md"), "dep").unwrap();
        fs::write(root.join(".git/notes.md"), "git").unwrap();

        let files = collect_markdown_files(&[root.to_path_buf()], &extensions()).unwrap();

        assert_eq!(
            files,
            vec![root.join("guide/setup.markdown"), root.join("index.md")]
        );
    }

    #[test]
    fn test_collect_explicit_file_and_dedup() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("page.md");
        fs::write(&file, "Text").unwrap();

        let files =
            collect_markdown_files(&[file.clone(), temp.path().to_path_buf()], &extensions())
                .unwrap();

        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_collect_missing_path() {
        let err = collect_markdown_files(&[PathBuf::from("no/such/dir")], &extensions())
            .unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_process_options_follow_config() {
        let config = DocmarkConfig {
            target: crate::config::Target::Ppt,
            strict: true,
            gfm: false,
            ..DocmarkConfig::default()
        };

        let options = process_options(&config, Path::new("intro.md"));

        assert_eq!(options.target, docmark_filter::Audience::Ppt);
        assert!(options.strict);
        assert!(!options.gfm);
        assert_eq!(options.filepath.as_deref(), Some("intro.md"));
    }
}
