//! # docmark-filter
//!
//! Audience-conditional content for markdown documentation.
//!
//! Authors wrap audience-specific content in marker comments
//! (`<!-- PPT_ONLY -->`, `<!-- CONFLUENCE_ONLY -->`, `<!-- GITHUB_ONLY -->`
//! and their `/` closing forms). This crate parses markdown into an mdast
//! tree with the `markdown` crate, removes the content meant for other
//! audiences together with every marker, and hands back the filtered tree
//! plus a report of any unbalanced markers.

pub mod error;
pub mod marker;
pub mod plugins;
pub mod report;

pub use error::FilterError;
pub use marker::{Audience, Marker, MarkerKind, ParseAudienceError};
pub use plugins::{ConditionalContentFilter, ConditionalContentPlugin, MarkdownPlugin};
pub use report::{FilterReport, Location, MarkerIssue};

use bon::Builder;
use markdown::mdast::Node;

/// Options for processing one markdown document
#[derive(Builder)]
pub struct ProcessOptions {
    /// Optional filepath for error messages
    #[builder(into)]
    pub filepath: Option<String>,

    /// Audience the output is built for
    #[builder(default)]
    pub target: Audience,

    /// Enable GitHub Flavored Markdown (tables, strikethrough, task lists,
    /// footnotes). Enabled by default.
    #[builder(default = true)]
    pub gfm: bool,

    /// Recognize YAML/TOML frontmatter so it is not parsed as content.
    /// Enabled by default.
    #[builder(default = true)]
    pub frontmatter: bool,

    /// Fail instead of degrading silently when markers are unbalanced
    #[builder(default)]
    pub strict: bool,

    /// Additional plugins, applied after the conditional content filter
    #[builder(default)]
    pub plugins: Vec<Box<dyn MarkdownPlugin>>,
}

impl std::fmt::Debug for ProcessOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessOptions")
            .field("filepath", &self.filepath)
            .field("target", &self.target)
            .field("gfm", &self.gfm)
            .field("frontmatter", &self.frontmatter)
            .field("strict", &self.strict)
            .field("plugins_count", &self.plugins.len())
            .finish()
    }
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ProcessOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plugin(mut self, plugin: Box<dyn MarkdownPlugin>) -> Self {
        self.plugins.push(plugin);
        self
    }
}

/// Result of processing one document
#[derive(Debug, Clone)]
pub struct ProcessResult {
    /// The filtered mdast tree
    pub tree: Node,
    /// What the conditional content filter did
    pub report: FilterReport,
}

/// Maximum accepted markdown source size (10MB)
const MAX_SOURCE_SIZE: usize = 10 * 1024 * 1024;

/// Parse markdown and filter it for the configured target audience
pub fn process(source: &str, options: ProcessOptions) -> Result<ProcessResult, Box<FilterError>> {
    let ProcessOptions {
        filepath,
        target,
        gfm,
        frontmatter,
        strict,
        plugins: extra_plugins,
    } = options;

    let fail = |err: FilterError| -> Box<FilterError> {
        match &filepath {
            Some(filepath) => Box::new(err.with_file(filepath.clone())),
            None => Box::new(err),
        }
    };

    if source.len() > MAX_SOURCE_SIZE {
        return Err(fail(FilterError::too_large(source.len(), MAX_SOURCE_SIZE)));
    }

    let mut tree = parse(source, gfm, frontmatter).map_err(&fail)?;

    // The conditional filter always runs first; its report is read back
    // through a downcast once the pipeline is done.
    let mut plugins: Vec<Box<dyn MarkdownPlugin>> =
        vec![Box::new(ConditionalContentPlugin::new(target))];
    plugins.extend(extra_plugins);

    for plugin in &plugins {
        tracing::debug!(plugin = plugin.name(), "Running markdown plugin");
        plugin
            .transform_ast(&mut tree)
            .map_err(|err| fail(FilterError::plugin_error(plugin.name(), err)))?;
    }

    let report = plugins
        .iter()
        .find_map(|plugin| plugin.as_any().downcast_ref::<ConditionalContentPlugin>())
        .and_then(ConditionalContentPlugin::take_report)
        .unwrap_or_else(|| FilterReport::new(target));

    if strict && !report.is_balanced() {
        return Err(fail(FilterError::unbalanced(&report, source)));
    }

    Ok(ProcessResult { tree, report })
}

/// Parse markdown (not MDX: MDX rejects HTML comments) into an mdast tree
fn parse(source: &str, gfm: bool, frontmatter: bool) -> Result<Node, FilterError> {
    let mut parse_options = if gfm {
        markdown::ParseOptions::gfm()
    } else {
        markdown::ParseOptions::default()
    };
    parse_options.constructs.frontmatter = frontmatter;

    markdown::to_mdast(source, &parse_options).map_err(|e| FilterError::parse_error(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_processing() {
        let source = "# Title\n\n<!-- PPT_ONLY -->\n\nSlides only.\n\n<!-- /PPT_ONLY -->\n\nShared.\n";
        let result = process(source, ProcessOptions::default()).unwrap();

        let rendered = result.tree.to_string();
        assert!(rendered.contains("Title"));
        assert!(rendered.contains("Shared."));
        assert!(!rendered.contains("Slides only."));
        assert_eq!(result.report.markers, 2);
        assert!(result.report.is_balanced());
    }

    #[test]
    fn test_frontmatter_is_not_content() {
        let source = "---\ntitle: Guide\n---\n\nBody\n";
        let result = process(source, ProcessOptions::default()).unwrap();

        let children = result.tree.children().unwrap();
        assert!(matches!(children[0], Node::Yaml(_)));
    }

    #[test]
    fn test_gfm_can_be_disabled() {
        let source = "This is ~~struck~~ text.";

        let with_gfm = process(source, ProcessOptions::default()).unwrap();
        let json = serde_json::to_string(&with_gfm.tree).unwrap();
        assert!(json.contains("\"delete\""));

        let without = process(source, ProcessOptions::builder().gfm(false).build()).unwrap();
        let json = serde_json::to_string(&without.tree).unwrap();
        assert!(!json.contains("\"delete\""));
    }

    #[test]
    fn test_strict_rejects_unclosed_region() {
        let source = "A\n\n<!-- PPT_ONLY -->\n\nB\n";
        let options = ProcessOptions::builder()
            .strict(true)
            .filepath("guide.md")
            .build();

        let err = process(source, options).unwrap_err();
        assert!(err.message.contains("never closed"));
        assert_eq!(err.file.as_deref(), Some("guide.md"));
        assert_eq!(err.line, Some(3));
    }

    #[test]
    fn test_lenient_mode_reports_instead_of_failing() {
        let source = "A\n\n<!-- PPT_ONLY -->\n\nB\n";
        let result = process(source, ProcessOptions::default()).unwrap();

        assert_eq!(result.report.unclosed_regions.len(), 1);
        assert_eq!(result.tree.to_string(), "A");
    }

    #[test]
    fn test_input_size_limit() {
        let huge = "x".repeat(11 * 1024 * 1024);
        let err = process(&huge, ProcessOptions::default()).unwrap_err();
        assert!(err.message.contains("exceeding the maximum"));
    }

    #[test]
    fn test_builder_defaults() {
        let options = ProcessOptions::builder().build();
        assert_eq!(options.target, Audience::Github);
        assert!(options.gfm);
        assert!(options.frontmatter);
        assert!(!options.strict);
        assert!(options.filepath.is_none());
    }

    #[test]
    fn test_builder_with_target_and_filepath() {
        let options = ProcessOptions::builder()
            .target(Audience::Confluence)
            .filepath("docs/intro.md")
            .build();

        assert_eq!(options.target, Audience::Confluence);
        assert_eq!(options.filepath, Some("docs/intro.md".to_string()));
    }
}
