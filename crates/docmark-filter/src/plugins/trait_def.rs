//! Plugin trait for transforming markdown trees
//!
//! Plugins run in order over the parsed mdast tree after the conditional
//! content filter. Each one receives the whole tree and may mutate it.

use anyhow::Result;
use markdown::mdast::Node;
use std::any::Any;

/// Plugin for transforming a parsed markdown tree
///
/// # Thread Safety
///
/// Plugins must be `Send + Sync` because documents may be processed in
/// parallel. A plugin that needs to hand data back to the caller (such as a
/// report) keeps it behind a lock; see [`super::ConditionalContentPlugin`].
pub trait MarkdownPlugin: Send + Sync {
    /// Short, lowercase identifier used in logs and error messages,
    /// e.g. "conditional-content".
    fn name(&self) -> &'static str;

    /// Transform the tree in place.
    ///
    /// The default implementation does nothing.
    fn transform_ast(&self, ast: &mut Node) -> Result<()> {
        let _ = ast;
        Ok(())
    }

    /// Enable downcasting to the concrete plugin type.
    ///
    /// ```rust,ignore
    /// fn as_any(&self) -> &dyn std::any::Any {
    ///     self
    /// }
    /// ```
    fn as_any(&self) -> &dyn Any;
}
