//! Normalized diagnostic messages.
//!
//! Every tool adapter reports what it finds as a [`Message`] with a
//! [`Location`], regardless of how the underlying tool formats its output.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Where a diagnostic was reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    /// File path as reported by the tool.
    pub path: PathBuf,
    /// Dotted module name, when the tool knows it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// Enclosing function, when the tool knows it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    /// Line number (1-indexed, 0 when unknown).
    pub line: usize,
    /// Character offset on the line, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character: Option<usize>,
}

impl Location {
    /// Create a location with no module or function information.
    pub fn new(path: impl Into<PathBuf>, line: usize, character: Option<usize>) -> Self {
        Self {
            path: path.into(),
            module: None,
            function: None,
            line,
            character,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path.display(), self.line)?;
        if let Some(character) = self.character {
            write!(f, ":{}", character)?;
        }
        Ok(())
    }
}

/// A diagnostic reported by a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Name of the tool that produced this message.
    pub source: String,
    /// Tool-specific code (for mypy: `error`, `note`, ...).
    pub code: String,
    /// Where the issue was found.
    pub location: Location,
    /// Human-readable message text.
    pub message: String,
}

impl Message {
    /// Create a new message.
    pub fn new(
        source: impl Into<String>,
        code: impl Into<String>,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            code: code.into(),
            location,
            message: message.into(),
        }
    }
}
