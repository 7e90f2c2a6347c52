//! Caller location capture and rendering

use std::fmt;
use std::panic::Location;

/// Width of the location column in every log line.
pub const LOCATION_WIDTH: usize = 18;

/// Placeholder file name used when no location is available.
pub const UNKNOWN_FILE: &str = "unknown";

/// Source position of the code that issued a log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerLocation {
    pub file: &'static str,
    pub line: u32,
}

impl CallerLocation {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of the nearest caller not marked `#[track_caller]`.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Location::caller().into()
    }

    /// Final path component of `file`, accepting both `/` and `\` separators.
    pub fn basename(&self) -> &'static str {
        let file: &'static str = self.file;
        file.rsplit(['/', '\\'])
            .find(|part| !part.is_empty())
            .unwrap_or(file)
    }
}

impl From<&'static Location<'static>> for CallerLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for CallerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.basename(), self.line)
    }
}

/// Render the fixed-width location column.
///
/// The line number is left-justified to four columns (`main.rs:7   `). Results
/// longer than [`LOCATION_WIDTH`] keep their trailing characters; shorter ones
/// are right-padded with spaces.
pub fn location_field(location: Option<&CallerLocation>) -> String {
    let (file, line) = match location {
        Some(loc) => (loc.basename(), loc.line),
        None => (UNKNOWN_FILE, 0),
    };

    let rendered = format!("{}:{:<4}", file, line);
    let overflow = rendered.chars().count().saturating_sub(LOCATION_WIDTH);
    let tail = rendered
        .char_indices()
        .nth(overflow)
        .map(|(idx, _)| &rendered[idx..])
        .unwrap_or(&rendered);

    format!("{:<width$}", tail, width = LOCATION_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename() {
        assert_eq!(CallerLocation::new("src/core/logger.rs", 1).basename(), "logger.rs");
        assert_eq!(CallerLocation::new("C:\\app\\main.rs", 1).basename(), "main.rs");
        assert_eq!(CallerLocation::new("main.rs", 1).basename(), "main.rs");
    }

    #[test]
    fn test_short_location_is_padded() {
        let field = location_field(Some(&CallerLocation::new("src/main.rs", 7)));
        assert_eq!(field, "main.rs:7         ");
        assert_eq!(field.len(), LOCATION_WIDTH);
    }

    #[test]
    fn test_long_location_keeps_tail() {
        let loc = CallerLocation::new("src/a_very_long_module_name.rs", 1234);
        let field = location_field(Some(&loc));
        assert_eq!(field, "odule_name.rs:1234");
        assert_eq!(field.chars().count(), LOCATION_WIDTH);
        assert!(field.ends_with(":1234"));
    }

    #[test]
    fn test_exact_width_is_unchanged() {
        let loc = CallerLocation::new("abcdefghij.rs", 1);
        let field = location_field(Some(&loc));
        assert_eq!(field, "abcdefghij.rs:1   ");
    }

    #[test]
    fn test_unknown_location() {
        assert_eq!(location_field(None), "unknown:0         ");
    }

    #[test]
    fn test_multibyte_file_names_truncate_on_char_boundaries() {
        let loc = CallerLocation::new("ééééééééééééééééé.rs", 3);
        let field = location_field(Some(&loc));
        assert_eq!(field.chars().count(), LOCATION_WIDTH);
        assert!(field.ends_with(".rs:3   "));
    }

    #[test]
    fn test_caller_points_here() {
        let loc = CallerLocation::caller();
        assert_eq!(loc.basename(), "caller.rs");
        assert_eq!(loc.line, line!() - 2);
    }
}
