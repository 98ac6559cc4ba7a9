//! Command implementations for the Docmark CLI.
//!
//! - [`filter`] - Filter markdown for one audience and emit mdast JSON
//! - [`check`] - Report unbalanced audience markers
//! - [`diagrams`] - Make sure diagram images exist
//! - [`init`] - Write an example configuration
//!
//! Each command is implemented in its own module and provides an `execute`
//! function that takes the parsed command arguments and returns a Result.

pub mod check;
pub mod diagrams;
pub mod filter;
pub mod init;
pub(crate) mod utils;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use diagrams::execute as diagrams_execute;
pub use filter::execute as filter_execute;
pub use init::execute as init_execute;
