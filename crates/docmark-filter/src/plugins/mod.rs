//! Plugin system for markdown tree transformations

mod conditional;
mod trait_def;

pub use conditional::{ConditionalContentFilter, ConditionalContentPlugin};
pub use trait_def::MarkdownPlugin;
