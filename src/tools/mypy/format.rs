//! Parsing mypy report lines.
//!
//! mypy prints one diagnostic per line, but how many fields the line has
//! depends on what mypy knows about the position:
//!
//! ```text
//! pkg/mod.py:12:5: error: Incompatible return value type
//! pkg/mod.py:12: error: Incompatible return value type
//! pkg/mod.py: error: Duplicate module named "mod"
//! ```
//!
//! [`REPORT_FORMATS`] lists these shapes from most to least specific;
//! [`parse_line`] tries each in turn.

use crate::error::{AdapterError, Result};
use crate::message::{Location, Message};

use super::TOOL_NAME;

/// One shape a report line can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// `path:line:character: code: message`
    LineAndColumn,
    /// `path:line: code: message`
    LineOnly,
    /// `path: code: message`
    PathOnly,
}

/// Formats in the order they are tried.
pub const REPORT_FORMATS: &[ReportFormat] = &[
    ReportFormat::LineAndColumn,
    ReportFormat::LineOnly,
    ReportFormat::PathOnly,
];

impl ReportFormat {
    /// Number of colon-separated fields; the last one keeps any further colons.
    pub fn fields(self) -> usize {
        match self {
            ReportFormat::LineAndColumn => 5,
            ReportFormat::LineOnly => 4,
            ReportFormat::PathOnly => 3,
        }
    }

    /// Parse a line in this format, or `None` if it doesn't fit.
    pub fn parse(self, line: &str) -> Option<Message> {
        let parts: Vec<&str> = line.splitn(self.fields(), ':').collect();
        if parts.len() != self.fields() {
            return None;
        }

        let (location, code, text) = match self {
            ReportFormat::LineAndColumn => (
                Location::new(
                    parts[0],
                    parse_number(parts[1])?,
                    Some(parse_number(parts[2])?),
                ),
                parts[3],
                parts[4],
            ),
            ReportFormat::LineOnly => (
                Location::new(parts[0], parse_number(parts[1])?, None),
                parts[2],
                parts[3],
            ),
            ReportFormat::PathOnly => (Location::new(parts[0], 0, None), parts[1], parts[2]),
        };

        Some(Message::new(
            TOOL_NAME,
            code.trim_start_matches(' '),
            location,
            text.trim_start_matches(' '),
        ))
    }
}

fn parse_number(field: &str) -> Option<usize> {
    field.trim().parse().ok()
}

/// Parse one line of a mypy report.
///
/// # Errors
///
/// Returns `UnparseableLine` if the line fits none of [`REPORT_FORMATS`].
pub fn parse_line(line: &str) -> Result<Message> {
    REPORT_FORMATS
        .iter()
        .find_map(|format| format.parse(line))
        .ok_or_else(|| AdapterError::UnparseableLine {
            line: line.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn line_with_column() {
        let msg = parse_line("foo.py:12:5: error: bad thing").unwrap();

        assert_eq!(msg.source, "mypy");
        assert_eq!(msg.code, "error");
        assert_eq!(msg.message, "bad thing");
        assert_eq!(msg.location.path, PathBuf::from("foo.py"));
        assert_eq!(msg.location.line, 12);
        assert_eq!(msg.location.character, Some(5));
        assert!(msg.location.module.is_none());
        assert!(msg.location.function.is_none());
    }

    #[test]
    fn line_without_column() {
        let msg = parse_line("foo.py:12: error: bad thing").unwrap();

        assert_eq!(msg.location.line, 12);
        assert_eq!(msg.location.character, None);
        assert_eq!(msg.code, "error");
        assert_eq!(msg.message, "bad thing");
    }

    #[test]
    fn line_without_position() {
        let msg = parse_line("foo.py: error: bad thing").unwrap();

        assert_eq!(msg.location.line, 0);
        assert_eq!(msg.location.character, None);
        assert_eq!(msg.code, "error");
        assert_eq!(msg.message, "bad thing");
    }

    #[test]
    fn leading_spaces_are_stripped() {
        let msg = parse_line("foo.py:1:1: error:  bad thing").unwrap();

        assert_eq!(msg.code, "error");
        assert_eq!(msg.message, "bad thing");
    }

    #[test]
    fn message_keeps_its_colons() {
        let msg =
            parse_line("app.py:3:9: note: Revealed type is \"def (x: builtins.int)\"").unwrap();

        assert_eq!(msg.code, "note");
        assert_eq!(msg.message, "Revealed type is \"def (x: builtins.int)\"");
        assert_eq!(msg.location.character, Some(9));
    }

    #[test]
    fn colon_in_message_without_column() {
        let msg = parse_line("app.py:7: error: Argument 1: expected int").unwrap();

        assert_eq!(msg.location.line, 7);
        assert_eq!(msg.location.character, None);
        assert_eq!(msg.code, "error");
        assert_eq!(msg.message, "Argument 1: expected int");
    }

    #[test]
    fn each_format_rejects_what_it_cannot_read() {
        let line = "foo.py:12: error: bad thing";

        assert!(ReportFormat::LineAndColumn.parse(line).is_none());
        assert!(ReportFormat::LineOnly.parse(line).is_some());
    }

    #[test]
    fn line_without_enough_colons_is_an_error() {
        let err = parse_line("Success: no issues found").unwrap_err();

        match err {
            AdapterError::UnparseableLine { line } => {
                assert_eq!(line, "Success: no issues found")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn formats_are_tried_most_specific_first() {
        let widths: Vec<_> = REPORT_FORMATS.iter().map(|f| f.fields()).collect();
        assert_eq!(widths, vec![5, 4, 3]);
    }
}
