//! Conditional content plugin for audience-targeted output
//!
//! Removes content fenced for other audiences and strips every marker
//! comment, so one markdown source can feed the web site, the slide deck and
//! the wiki export.
//!
//! # Example
//!
//! ```markdown
//! Shared introduction.
//!
//! <!-- PPT_ONLY -->
//! Only on the slides.
//! <!-- /PPT_ONLY -->
//!
//! <!-- GITHUB_ONLY -->
//! Only on the web site.
//! <!-- /GITHUB_ONLY -->
//! ```
//!
//! Filtered for GitHub (the default target) this keeps the introduction and
//! the web-only paragraph; all four markers disappear.
//!
//! # Traversal
//!
//! One pre-order pass visits every node. A flag per audience records whether
//! an open region is in effect; regions do not nest or count, so opening the
//! same audience twice is the same as opening it once. Removals are collected
//! per parent during the pass and applied afterwards, highest index first,
//! so splicing never shifts an index that is still pending.

use std::collections::BTreeSet;

use anyhow::Result;
use markdown::mdast::Node;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use super::MarkdownPlugin;
use crate::marker::{Audience, Marker, MarkerKind};
use crate::report::{FilterReport, Location, MarkerIssue};

/// Child-index path from the root to a node.
///
/// Paths are taken on the unmodified tree, so they identify a node
/// regardless of whether a sibling is structurally identical to it.
type NodePath = Vec<usize>;

/// Scheduled removals, keyed by parent path
type RemovalSet = FxHashMap<NodePath, BTreeSet<usize>>;

/// Filters an mdast tree for one target audience.
///
/// Markers for the target audience are delimiters only: they are removed and
/// their content is kept. Regions of the other two audiences are removed
/// together with their markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConditionalContentFilter {
    target: Audience,
}

impl ConditionalContentFilter {
    pub fn new(target: Audience) -> Self {
        Self { target }
    }

    pub fn target(&self) -> Audience {
        self.target
    }

    /// Filter `tree` in place and report what happened.
    ///
    /// The root itself is never removed.
    pub fn filter(&self, tree: &mut Node) -> FilterReport {
        let mut traversal = Traversal::new(self.target);
        traversal.visit(tree);
        let (removals, mut report) = traversal.finish();

        report.removed = apply_removals(tree, &removals);

        tracing::debug!(
            target_audience = %self.target,
            markers = report.markers,
            removed = report.removed,
            balanced = report.is_balanced(),
            "Filtered conditional content"
        );

        report
    }
}

/// Open/closed state of each audience region
#[derive(Debug, Default)]
struct RegionFlags {
    open: [bool; 3],
    opened_at: [Option<Location>; 3],
}

impl RegionFlags {
    fn open(&mut self, audience: Audience, location: Option<Location>) {
        let index = audience.index();
        if !self.open[index] {
            self.open[index] = true;
            self.opened_at[index] = location;
        }
    }

    /// Close a region, returning whether it was open
    fn close(&mut self, audience: Audience) -> bool {
        let index = audience.index();
        self.opened_at[index] = None;
        std::mem::replace(&mut self.open[index], false)
    }

    fn is_open(&self, audience: Audience) -> bool {
        self.open[audience.index()]
    }
}

/// State local to a single filter pass
struct Traversal {
    target: Audience,
    regions: RegionFlags,
    path: NodePath,
    removals: RemovalSet,
    report: FilterReport,
}

impl Traversal {
    fn new(target: Audience) -> Self {
        Self {
            target,
            regions: RegionFlags::default(),
            path: Vec::new(),
            removals: RemovalSet::default(),
            report: FilterReport::new(target),
        }
    }

    /// Inside at least one region whose content is dropped for the target
    fn in_excluded_region(&self) -> bool {
        Audience::ALL
            .into_iter()
            .any(|audience| audience != self.target && self.regions.is_open(audience))
    }

    fn visit(&mut self, node: &Node) {
        if let Some(marker) = Marker::from_node(node) {
            self.visit_marker(marker, node);
            return;
        }

        if self.in_excluded_region() {
            self.schedule();
        }

        // Descendants of a scheduled node are still visited: markers nested
        // inside it must keep updating the region flags.
        if let Some(children) = node.children() {
            for (index, child) in children.iter().enumerate() {
                self.path.push(index);
                self.visit(child);
                self.path.pop();
            }
        }
    }

    fn visit_marker(&mut self, marker: Marker, node: &Node) {
        self.schedule();
        self.report.markers += 1;

        let location = Location::of(node);
        match marker.kind {
            MarkerKind::Open => self.regions.open(marker.audience, location),
            MarkerKind::Close => {
                if !self.regions.close(marker.audience) {
                    tracing::warn!(
                        marker = %marker,
                        line = location.map(|l| l.line),
                        "Close marker without a matching open marker"
                    );
                    self.report
                        .unmatched_closes
                        .push(MarkerIssue { marker, location });
                }
            }
        }
    }

    fn schedule(&mut self) {
        if let Some((&index, parent)) = self.path.split_last() {
            self.removals
                .entry(parent.to_vec())
                .or_default()
                .insert(index);
        }
    }

    fn finish(mut self) -> (RemovalSet, FilterReport) {
        for audience in Audience::ALL {
            if self.regions.is_open(audience) {
                let location = self.regions.opened_at[audience.index()];
                let marker = Marker::open(audience);
                tracing::warn!(
                    marker = %marker,
                    line = location.map(|l| l.line),
                    "Region never closed; it extends to the end of the document"
                );
                self.report
                    .unclosed_regions
                    .push(MarkerIssue { marker, location });
            }
        }
        (self.removals, self.report)
    }
}

/// True when some ancestor of the node at `path` is itself scheduled
fn within_removed(removals: &RemovalSet, path: &[usize]) -> bool {
    (0..path.len()).any(|depth| {
        removals
            .get(&path[..depth])
            .is_some_and(|indices| indices.contains(&path[depth]))
    })
}

fn node_at_mut<'a>(root: &'a mut Node, path: &[usize]) -> Option<&'a mut Node> {
    path.iter()
        .try_fold(root, |node, &index| node.children_mut()?.get_mut(index))
}

/// Splice out every scheduled child, returning how many were removed.
///
/// Parents inside an already-removed subtree are skipped. Deeper parents are
/// processed first so that removals in an ancestor cannot invalidate a path
/// that is still pending.
fn apply_removals(root: &mut Node, removals: &RemovalSet) -> usize {
    let mut parents: Vec<(&NodePath, &BTreeSet<usize>)> = removals
        .iter()
        .filter(|(path, _)| !within_removed(removals, path))
        .collect();
    parents.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| b.cmp(a)));

    let mut removed = 0;
    for (path, indices) in parents {
        let Some(children) = node_at_mut(root, path).and_then(Node::children_mut) else {
            continue;
        };
        for &index in indices.iter().rev() {
            if index < children.len() {
                children.remove(index);
                removed += 1;
            }
        }
    }
    removed
}

/// [`MarkdownPlugin`] wrapper around [`ConditionalContentFilter`].
///
/// The report of the most recent run is kept so the caller can retrieve it
/// after the pipeline finishes.
#[derive(Default)]
pub struct ConditionalContentPlugin {
    filter: ConditionalContentFilter,
    last_report: Mutex<Option<FilterReport>>,
}

impl ConditionalContentPlugin {
    pub fn new(target: Audience) -> Self {
        Self {
            filter: ConditionalContentFilter::new(target),
            last_report: Mutex::new(None),
        }
    }

    pub fn target(&self) -> Audience {
        self.filter.target()
    }

    /// Report of the most recent run, if any
    pub fn report(&self) -> Option<FilterReport> {
        self.last_report.lock().clone()
    }

    /// Take the report of the most recent run, leaving none behind
    pub fn take_report(&self) -> Option<FilterReport> {
        self.last_report.lock().take()
    }
}

impl MarkdownPlugin for ConditionalContentPlugin {
    fn name(&self) -> &'static str {
        "conditional-content"
    }

    fn transform_ast(&self, ast: &mut Node) -> Result<()> {
        let report = self.filter.filter(ast);
        *self.last_report.lock() = Some(report);
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
