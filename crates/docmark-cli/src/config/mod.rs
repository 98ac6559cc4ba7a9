//! Configuration system for Docmark with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment > File > Defaults

mod conversions;
mod defaults;
mod loading;
mod types;
mod validation;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use defaults::*;
pub use loading::{ConfigOverrides, DEFAULT_CONFIG_FILE};
pub use types::*;

/// Docmark configuration - loaded from docmark.config.json or CLI args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocmarkConfig {
    /// Audience filtered output is built for (ppt, confluence, github)
    #[serde(default = "default_target")]
    pub target: Target,

    /// Fail on unbalanced markers instead of filtering leniently
    #[serde(default)]
    pub strict: bool,

    /// Parse GitHub Flavored Markdown (tables, strikethrough, task lists)
    #[serde(default = "default_gfm")]
    pub gfm: bool,

    /// Recognize YAML/TOML frontmatter
    #[serde(default = "default_frontmatter")]
    pub frontmatter: bool,

    /// File extensions `check` looks for when walking directories
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Output directory for `filter` when several files are given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,

    /// Directory expected to hold generated diagram images
    #[serde(default = "default_diagrams_dir")]
    pub diagrams_dir: PathBuf,

    /// Shell command that generates the diagram images
    #[serde(default = "default_diagrams_command")]
    pub diagrams_command: String,
}

impl Default for DocmarkConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            strict: false,
            gfm: default_gfm(),
            frontmatter: default_frontmatter(),
            extensions: default_extensions(),
            out_dir: None,
            diagrams_dir: default_diagrams_dir(),
            diagrams_command: default_diagrams_command(),
        }
    }
}

impl DocmarkConfig {
    /// Generate JSON Schema for docmark.config.json.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(DocmarkConfig);
        serde_json::to_value(schema).unwrap_or_default()
    }

    /// Generate example docmark.config.json content.
    pub fn example_config() -> crate::error::Result<String> {
        let example = Self {
            out_dir: Some(PathBuf::from("build/docs")),
            ..Self::default()
        };
        Ok(serde_json::to_string_pretty(&example)?)
    }
}
