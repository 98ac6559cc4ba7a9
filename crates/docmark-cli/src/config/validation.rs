use crate::config::DocmarkConfig;
use crate::error::{ConfigError, Result};

impl DocmarkConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(ConfigError::MissingField {
                field: "extensions".to_string(),
                hint: "List at least one markdown file extension, e.g. [\"md\"]".to_string(),
            }
            .into());
        }

        for ext in &self.extensions {
            if ext.is_empty() || ext.starts_with('.') || ext.contains(['/', '\\']) {
                return Err(ConfigError::InvalidValue {
                    field: "extensions".to_string(),
                    value: ext.clone(),
                    hint: "Extensions are written without a leading dot, e.g. \"md\"".to_string(),
                }
                .into());
            }
        }

        if self.diagrams_command.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "diagramsCommand".to_string(),
                value: self.diagrams_command.clone(),
                hint: "Provide the command that generates diagram images".to_string(),
            }
            .into());
        }

        if self.diagrams_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "diagramsDir".to_string(),
                value: String::new(),
                hint: "Provide the directory that holds generated diagrams".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
