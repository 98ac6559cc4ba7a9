//! Diagnostics collected during a filter pass
//!
//! The filter never fails. Unbalanced markers degrade the output silently, so
//! the report is the only place where such authoring mistakes surface.

use std::fmt;

use markdown::mdast::Node;
use serde::{Deserialize, Serialize};

use crate::marker::{Audience, Marker, MarkerKind};

/// 1-indexed source position of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Start position of a node, if the parser recorded one
    pub fn of(node: &Node) -> Option<Self> {
        node.position()
            .map(|position| Self::new(position.start.line, position.start.column))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A marker that was not paired with its counterpart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerIssue {
    pub marker: Marker,
    pub location: Option<Location>,
}

impl MarkerIssue {
    /// Human-readable description of the problem
    pub fn describe(&self) -> String {
        match self.marker.kind {
            MarkerKind::Open => format!(
                "{} opened but never closed before the end of the document",
                self.marker
            ),
            MarkerKind::Close => {
                format!("{} has no matching open marker", self.marker)
            }
        }
    }
}

/// Outcome of one filter pass over one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterReport {
    /// Audience the document was filtered for
    pub target: Audience,
    /// Marker nodes encountered (all of them are removed)
    pub markers: usize,
    /// Subtrees spliced out of the tree, markers included
    pub removed: usize,
    /// Close markers seen while their region was not open
    pub unmatched_closes: Vec<MarkerIssue>,
    /// Regions still open when traversal finished
    pub unclosed_regions: Vec<MarkerIssue>,
}

impl FilterReport {
    pub fn new(target: Audience) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    /// True when every open marker had a close and vice versa
    pub fn is_balanced(&self) -> bool {
        self.unmatched_closes.is_empty() && self.unclosed_regions.is_empty()
    }

    /// All marker issues ordered by source position.
    ///
    /// Issues without a position sort last.
    pub fn issues(&self) -> Vec<&MarkerIssue> {
        let mut issues: Vec<&MarkerIssue> = self
            .unmatched_closes
            .iter()
            .chain(self.unclosed_regions.iter())
            .collect();
        issues.sort_by_key(|issue| (issue.location.is_none(), issue.location));
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report_is_balanced() {
        let report = FilterReport::new(Audience::Ppt);
        assert!(report.is_balanced());
        assert_eq!(report.target, Audience::Ppt);
        assert!(report.issues().is_empty());
    }

    #[test]
    fn test_issues_sorted_by_location() {
        let report = FilterReport {
            unmatched_closes: vec![MarkerIssue {
                marker: Marker::close(Audience::Ppt),
                location: Some(Location::new(9, 1)),
            }],
            unclosed_regions: vec![
                MarkerIssue {
                    marker: Marker::open(Audience::Confluence),
                    location: None,
                },
                MarkerIssue {
                    marker: Marker::open(Audience::Github),
                    location: Some(Location::new(3, 1)),
                },
            ],
            ..FilterReport::default()
        };

        assert!(!report.is_balanced());
        let issues = report.issues();
        assert_eq!(issues[0].location, Some(Location::new(3, 1)));
        assert_eq!(issues[1].location, Some(Location::new(9, 1)));
        assert_eq!(issues[2].location, None);
    }

    #[test]
    fn test_describe_mentions_marker() {
        let issue = MarkerIssue {
            marker: Marker::open(Audience::Ppt),
            location: None,
        };
        let text = issue.describe();
        assert!(text.contains("<!-- PPT_ONLY -->"));
        assert!(text.contains("never closed"));

        let issue = MarkerIssue {
            marker: Marker::close(Audience::Confluence),
            location: None,
        };
        assert!(issue.describe().contains("no matching open marker"));
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let json = serde_json::to_value(FilterReport::default()).unwrap();
        assert!(json.get("unmatchedCloses").is_some());
        assert!(json.get("unclosedRegions").is_some());
        assert_eq!(json["target"], "github");
    }
}
