//! Formatting helpers for durations, counts, and source locations.

use docmark_filter::Location;
use std::path::Path;
use std::time::Duration;

/// Format duration in human-readable format.
///
/// ```
/// use std::time::Duration;
/// use docmark_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// `count noun` with a plural `s` when needed.
///
/// ```
/// use docmark_cli::ui::format_count;
///
/// assert_eq!(format_count(1, "file"), "1 file");
/// assert_eq!(format_count(0, "file"), "0 files");
/// ```
pub fn format_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// `path:line:column`, or just the path when the position is unknown.
pub fn format_location(path: &Path, location: Option<Location>) -> String {
    match location {
        Some(location) => format!("{}:{}", path.display(), location),
        None => path.display().to_string(),
    }
}
