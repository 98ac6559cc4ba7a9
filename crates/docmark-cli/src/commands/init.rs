//! Init command implementation.
//!
//! Writes an example docmark.config.json, or prints its JSON schema.

use crate::cli::InitArgs;
use crate::config::{DEFAULT_CONFIG_FILE, DocmarkConfig};
use crate::error::{ConfigError, Result};
use crate::ui;
use std::fs;
use std::path::Path;

/// Execute the init command.
///
/// # Errors
///
/// Refuses to overwrite an existing config file unless `--force` is given.
pub fn execute(args: InitArgs) -> Result<()> {
    if args.schema {
        println!("{}", serde_json::to_string_pretty(&DocmarkConfig::json_schema())?);
        return Ok(());
    }

    write_config(Path::new(DEFAULT_CONFIG_FILE), args.force)?;
    ui::success(&format!("Created {}", DEFAULT_CONFIG_FILE));
    Ok(())
}

fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()).into());
    }

    let mut content = DocmarkConfig::example_config()?;
    content.push('\n');
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use tempfile::TempDir;

    #[test]
    fn test_write_config_and_refuse_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_CONFIG_FILE);

        write_config(&path, false).unwrap();
        let written: DocmarkConfig =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(written.validate().is_ok());

        let err = write_config(&path, false).unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::AlreadyExists(_))
        ));

        assert!(write_config(&path, true).is_ok());
    }
}
