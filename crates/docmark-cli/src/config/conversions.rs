use crate::cli::{DiagramsArgs, FilterArgs};
use crate::config::loading::ConfigOverrides;
use crate::config::types::Target;

// Conversion implementations: CLI types -> Config types

impl From<crate::cli::Target> for Target {
    fn from(t: crate::cli::Target) -> Self {
        match t {
            crate::cli::Target::Ppt => Target::Ppt,
            crate::cli::Target::Confluence => Target::Confluence,
            crate::cli::Target::Github => Target::Github,
        }
    }
}

impl From<&FilterArgs> for ConfigOverrides {
    fn from(args: &FilterArgs) -> Self {
        Self {
            target: args.target.map(Into::into),
            // A missing flag must not switch off strict mode from the file
            strict: args.strict.then_some(true),
            out_dir: args.out_dir.clone(),
            ..Self::default()
        }
    }
}

impl From<&DiagramsArgs> for ConfigOverrides {
    fn from(args: &DiagramsArgs) -> Self {
        Self {
            diagrams_dir: args.dir.clone(),
            diagrams_command: args.command.clone(),
            ..Self::default()
        }
    }
}
