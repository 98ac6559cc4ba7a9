use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::Target;

/// Available Docmark subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter markdown files for one audience
    ///
    /// Parses each file, removes content meant for other audiences along with
    /// every marker comment, and writes the filtered mdast tree as JSON.
    Filter(FilterArgs),

    /// Report unbalanced audience markers
    ///
    /// Walks files and directories and lists every close marker without an
    /// open and every region left open at the end of a document.
    Check(CheckArgs),

    /// Make sure diagram images exist
    ///
    /// Looks for .png or .svg files in the diagrams directory and runs the
    /// generation command when there are none. A failed generation is
    /// reported but does not fail the command.
    Diagrams(DiagramsArgs),

    /// Create a docmark.config.json
    ///
    /// Writes an example configuration with every option set to its default.
    Init(InitArgs),
}

/// Arguments for the filter command
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Markdown files to filter
    ///
    /// Examples:
    ///   docmark filter docs/intro.md
    ///   docmark filter --out-dir build/ppt --target ppt docs/*.md
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Audience the output is built for
    ///
    /// - ppt: slides (keeps PPT_ONLY content)
    /// - confluence: wiki pages (keeps CONFLUENCE_ONLY content)
    /// - github: the docs site (keeps GITHUB_ONLY content)
    ///
    /// Defaults to the config file value, then github.
    #[arg(short, long, value_enum)]
    pub target: Option<Target>,

    /// Directory to write `<stem>.json` files into
    ///
    /// Required when more than one file is given. With a single file and no
    /// output directory, the JSON goes to stdout.
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Fail on unbalanced markers instead of filtering leniently
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files or directories to check
    ///
    /// Directories are searched recursively for .md, .markdown and .mdx
    /// files. Hidden directories and node_modules are skipped.
    #[arg(value_name = "PATHS", default_value = ".")]
    pub paths: Vec<PathBuf>,
}

/// Arguments for the diagrams command
#[derive(Args, Debug)]
pub struct DiagramsArgs {
    /// Directory expected to hold the generated diagram images
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Shell command that generates the diagrams
    #[arg(long, value_name = "CMD")]
    pub command: Option<String>,

    /// Only report, never run the generation command
    #[arg(long)]
    pub no_generate: bool,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing docmark.config.json
    #[arg(short, long)]
    pub force: bool,

    /// Print the JSON schema for docmark.config.json instead of writing a file
    #[arg(long, conflicts_with = "force")]
    pub schema: bool,
}
