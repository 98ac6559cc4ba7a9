use docmark_filter::Audience;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Audience an output is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Ppt,
    Confluence,
    Github,
}

impl From<Target> for Audience {
    fn from(target: Target) -> Self {
        match target {
            Target::Ppt => Audience::Ppt,
            Target::Confluence => Audience::Confluence,
            Target::Github => Audience::Github,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Audience::from(*self), f)
    }
}
