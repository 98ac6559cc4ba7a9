use clap::ValueEnum;

/// Audience an output is built for
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum Target {
    /// Slide decks
    ///
    /// Keeps PPT_ONLY content; drops CONFLUENCE_ONLY and GITHUB_ONLY regions.
    #[value(name = "ppt", aliases = ["powerpoint", "slides"])]
    Ppt,

    /// Confluence wiki pages
    ///
    /// Keeps CONFLUENCE_ONLY content; drops PPT_ONLY and GITHUB_ONLY regions.
    #[value(name = "confluence", alias = "wiki")]
    Confluence,

    /// The GitHub-hosted docs site
    ///
    /// Keeps GITHUB_ONLY content; drops PPT_ONLY and CONFLUENCE_ONLY regions.
    #[value(name = "github", aliases = ["web", "site"])]
    Github,
}
