//! Audience marker recognition
//!
//! Authors fence audience-specific content with paired HTML comments:
//!
//! ```markdown
//! <!-- PPT_ONLY -->
//! Speaker notes that only belong in the slide deck.
//! <!-- /PPT_ONLY -->
//! ```
//!
//! Matching is exact on the token name (case-sensitive) and tolerates
//! whitespace around the value and inside the comment delimiters.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use markdown::mdast::Node;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static MARKER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<!--\s*(/?)(PPT_ONLY|CONFLUENCE_ONLY|GITHUB_ONLY)\s*-->$")
        .expect("marker pattern is a valid regex")
});

/// Output audience a document can be built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    /// Slide-deck export
    Ppt,
    /// Wiki export
    Confluence,
    /// Web site (GitHub Pages)
    #[default]
    Github,
}

impl Audience {
    /// All audiences, in marker-token order
    pub const ALL: [Audience; 3] = [Audience::Ppt, Audience::Confluence, Audience::Github];

    /// The literal token used inside marker comments
    pub fn token(self) -> &'static str {
        match self {
            Audience::Ppt => "PPT_ONLY",
            Audience::Confluence => "CONFLUENCE_ONLY",
            Audience::Github => "GITHUB_ONLY",
        }
    }

    /// Look up an audience by its exact marker token
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|audience| audience.token() == token)
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Audience::Ppt => 0,
            Audience::Confluence => 1,
            Audience::Github => 2,
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Audience::Ppt => "ppt",
            Audience::Confluence => "confluence",
            Audience::Github => "github",
        };
        f.write_str(name)
    }
}

/// Error returned when an audience name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown audience '{0}' (expected ppt, confluence or github)")]
pub struct ParseAudienceError(pub String);

impl FromStr for Audience {
    type Err = ParseAudienceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ppt" | "powerpoint" | "slides" => Ok(Audience::Ppt),
            "confluence" | "wiki" => Ok(Audience::Confluence),
            "github" | "web" | "site" => Ok(Audience::Github),
            _ => Err(ParseAudienceError(s.to_string())),
        }
    }
}

/// Whether a marker opens or closes a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Open,
    Close,
}

/// A recognized audience marker comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marker {
    pub audience: Audience,
    pub kind: MarkerKind,
}

impl Marker {
    pub fn open(audience: Audience) -> Self {
        Self {
            audience,
            kind: MarkerKind::Open,
        }
    }

    pub fn close(audience: Audience) -> Self {
        Self {
            audience,
            kind: MarkerKind::Close,
        }
    }

    /// Classify a raw HTML value as a marker.
    ///
    /// Returns `None` for anything that is not exactly one of the six marker
    /// comments once surrounding whitespace is trimmed.
    pub fn parse(value: &str) -> Option<Self> {
        let captures = MARKER_PATTERN.captures(value.trim())?;
        let audience = Audience::from_token(&captures[2])?;
        let kind = if captures[1].is_empty() {
            MarkerKind::Open
        } else {
            MarkerKind::Close
        };
        Some(Self { audience, kind })
    }

    /// Classify a tree node. Only raw HTML nodes can be markers.
    pub fn from_node(node: &Node) -> Option<Self> {
        match node {
            Node::Html(html) => Self::parse(&html.value),
            _ => None,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MarkerKind::Open => write!(f, "<!-- {} -->", self.audience.token()),
            MarkerKind::Close => write!(f, "<!-- /{} -->", self.audience.token()),
        }
    }
}
