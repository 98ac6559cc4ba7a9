use std::path::PathBuf;

use crate::config::types::Target;

pub fn default_target() -> Target {
    Target::Github
}

pub fn default_gfm() -> bool {
    true
}

pub fn default_frontmatter() -> bool {
    true
}

pub fn default_extensions() -> Vec<String> {
    vec!["md".to_string(), "markdown".to_string(), "mdx".to_string()]
}

pub fn default_diagrams_dir() -> PathBuf {
    PathBuf::from("generated/diagrams")
}

pub fn default_diagrams_command() -> String {
    "npm run build:diagrams".to_string()
}
