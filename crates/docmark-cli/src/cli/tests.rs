#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command, Target};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_filter_minimal() {
        let cli = Cli::try_parse_from(["docmark", "filter", "docs/intro.md"]).unwrap();

        match cli.command {
            Command::Filter(args) => {
                assert_eq!(args.files, vec![PathBuf::from("docs/intro.md")]);
                assert_eq!(args.target, None);
                assert_eq!(args.out_dir, None);
                assert!(!args.pretty);
                assert!(!args.strict);
            }
            _ => panic!("Expected Filter command"),
        }
    }

    #[test]
    fn test_filter_all_options() {
        let cli = Cli::try_parse_from([
            "docmark",
            "filter",
            "a.md",
            "b.md",
            "--target",
            "ppt",
            "--out-dir",
            "build/ppt",
            "--pretty",
            "--strict",
        ])
        .unwrap();

        match cli.command {
            Command::Filter(args) => {
                assert_eq!(args.files.len(), 2);
                assert_eq!(args.target, Some(Target::Ppt));
                assert_eq!(args.out_dir, Some(PathBuf::from("build/ppt")));
                assert!(args.pretty);
                assert!(args.strict);
            }
            _ => panic!("Expected Filter command"),
        }
    }

    #[test]
    fn test_filter_requires_files() {
        assert!(Cli::try_parse_from(["docmark", "filter"]).is_err());
    }

    #[test]
    fn test_target_aliases() {
        for (value, expected) in [
            ("powerpoint", Target::Ppt),
            ("slides", Target::Ppt),
            ("wiki", Target::Confluence),
            ("web", Target::Github),
        ] {
            let cli = Cli::try_parse_from(["docmark", "filter", "a.md", "-t", value]).unwrap();
            match cli.command {
                Command::Filter(args) => assert_eq!(args.target, Some(expected)),
                _ => panic!("Expected Filter command"),
            }
        }
    }

    #[test]
    fn test_invalid_target() {
        assert!(Cli::try_parse_from(["docmark", "filter", "a.md", "--target", "pdf"]).is_err());
    }

    #[test]
    fn test_check_defaults_to_current_dir() {
        let cli = Cli::try_parse_from(["docmark", "check"]).unwrap();

        match cli.command {
            Command::Check(args) => assert_eq!(args.paths, vec![PathBuf::from(".")]),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_diagrams_options() {
        let cli = Cli::try_parse_from([
            "docmark",
            "diagrams",
            "--dir",
            "static/diagrams",
            "--command",
            "make diagrams",
            "--no-generate",
        ])
        .unwrap();

        match cli.command {
            Command::Diagrams(args) => {
                assert_eq!(args.dir, Some(PathBuf::from("static/diagrams")));
                assert_eq!(args.command.as_deref(), Some("make diagrams"));
                assert!(args.no_generate);
            }
            _ => panic!("Expected Diagrams command"),
        }
    }

    #[test]
    fn test_init_schema_conflicts_with_force() {
        assert!(Cli::try_parse_from(["docmark", "init", "--schema", "--force"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "docmark",
            "check",
            "--verbose",
            "--no-color",
            "--config",
            "custom.json",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("custom.json")));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["docmark", "check", "--quiet", "--verbose"]).is_err());
    }
}
