//! Error type for markdown processing
//!
//! The conditional filter itself never fails. Errors come from parsing,
//! from downstream plugins, from oversized input, and from strict mode
//! rejecting unbalanced markers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::report::FilterReport;

/// Processing error with optional file, position, excerpt and suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterError {
    /// The error message
    pub message: String,
    /// Optional file path where the error occurred
    pub file: Option<String>,
    /// Line number (1-indexed)
    pub line: Option<usize>,
    /// Column number (1-indexed)
    pub column: Option<usize>,
    /// The source lines around the error
    pub context: Option<String>,
    /// Suggested fix
    pub suggestion: Option<String>,
}

impl FilterError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            file: None,
            line: None,
            column: None,
            context: None,
            suggestion: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Markdown could not be parsed
    pub fn parse_error(message: String) -> Self {
        Self::new(format!("Failed to parse markdown: {}", message))
            .with_suggestion("Check the document for syntax the parser does not accept.")
    }

    /// A plugin returned an error
    pub fn plugin_error(plugin: &str, err: anyhow::Error) -> Self {
        Self::new(format!("Plugin '{}' failed: {:#}", plugin, err))
    }

    /// Input is larger than the processing limit
    pub fn too_large(size: usize, limit: usize) -> Self {
        Self::new(format!(
            "Markdown source is {} bytes, exceeding the maximum of {} bytes ({} MB)",
            size,
            limit,
            limit / 1024 / 1024
        ))
        .with_suggestion("Split the document into smaller pages.")
    }

    /// Strict mode rejection of a report with unbalanced markers.
    ///
    /// Points at the earliest offending marker and quotes the source around
    /// it when a position is known.
    pub fn unbalanced(report: &FilterReport, source: &str) -> Self {
        let issues = report.issues();
        let Some(first) = issues.first() else {
            return Self::new("Markers are unbalanced");
        };

        let message = if issues.len() == 1 {
            first.describe()
        } else {
            format!(
                "{} (and {} more marker issue{})",
                first.describe(),
                issues.len() - 1,
                if issues.len() == 2 { "" } else { "s" }
            )
        };

        let mut err = Self::new(message).with_suggestion(format!(
            "Every {} needs a matching {} (or vice versa). Markers must each sit on their own line.",
            crate::Marker::open(first.marker.audience),
            crate::Marker::close(first.marker.audience),
        ));

        if let Some(location) = first.location {
            err = err
                .with_location(location.line, location.column)
                .with_context(Self::extract_context(source, location.line, 2));
        }
        err
    }

    /// Extract numbered context lines around `line` (1-indexed)
    pub fn extract_context(source: &str, line: usize, context_lines: usize) -> String {
        let lines: Vec<&str> = source.lines().collect();
        let start = line.saturating_sub(context_lines + 1).min(lines.len());
        let end = (line + context_lines).min(lines.len());

        let mut context = String::new();
        for (i, line_text) in lines[start..end].iter().enumerate() {
            let line_num = start + i + 1;
            let marker = if line_num == line { ">" } else { " " };
            context.push_str(&format!("{} {:3} | {}\n", marker, line_num, line_text));
        }
        context
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(ref file) = self.file {
            write!(f, "\n  in {}", file)?;
        }

        if let (Some(line), Some(col)) = (self.line, self.column) {
            write!(f, "\n  at line {}, column {}", line, col)?;
        }

        if let Some(ref context) = self.context {
            write!(f, "\n\n{}", context)?;
        }

        if let Some(ref suggestion) = self.suggestion {
            write!(f, "\nSuggestion: {}", suggestion)?;
        }

        Ok(())
    }
}

impl std::error::Error for FilterError {}

impl From<anyhow::Error> for FilterError {
    fn from(err: anyhow::Error) -> Self {
        Self::new(err.to_string())
    }
}
