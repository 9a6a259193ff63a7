//! Error types for adapter operations.
//!
//! This module defines [`AdapterError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration problems fail fast, before the checker is invoked
//! - A checker that cannot be started is surfaced unchanged, never retried
//! - Use `anyhow::Error` (via `AdapterError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for adapter operations.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// A tool option is unknown or has the wrong type.
    #[error("Bad {tool} configuration: {message}")]
    BadToolConfig { tool: String, message: String },

    /// Profile file not found at expected location.
    #[error("Profile not found: {path}")]
    ProfileNotFound { path: PathBuf },

    /// Failed to parse a profile file.
    #[error("Failed to parse profile at {path}: {message}")]
    ProfileParseError { path: PathBuf, message: String },

    /// The external checker could not be started.
    #[error("Could not run '{program}': {source}")]
    CheckerUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The checker ran but failed without producing a report.
    #[error("'{program}' failed with exit code {code}: {stderr}")]
    CheckerFailed {
        program: String,
        code: i32,
        stderr: String,
    },

    /// A path given for checking does not exist.
    #[error("Path not found: {path}")]
    PathNotFound { path: PathBuf },

    /// A report line matched none of the known output shapes.
    #[error("Unrecognized checker output: {line:?}")]
    UnparseableLine { line: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AdapterError {
    /// Create a configuration error for the named tool.
    pub fn bad_config(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BadToolConfig {
            tool: tool.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, AdapterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_tool_config_displays_tool_and_message() {
        let err = AdapterError::bad_config("mypy", "Option foo is not valid.");
        let msg = err.to_string();
        assert!(msg.contains("mypy"));
        assert!(msg.contains("Option foo is not valid."));
    }

    #[test]
    fn profile_not_found_displays_path() {
        let err = AdapterError::ProfileNotFound {
            path: PathBuf::from("/foo/.mypy-adapter.yml"),
        };
        assert!(err.to_string().contains("/foo/.mypy-adapter.yml"));
    }

    #[test]
    fn profile_parse_error_displays_path_and_message() {
        let err = AdapterError::ProfileParseError {
            path: PathBuf::from("/profile.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/profile.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn checker_unavailable_displays_program_and_cause() {
        let err = AdapterError::CheckerUnavailable {
            program: "mypy".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("mypy"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn checker_failed_displays_code_and_stderr() {
        let err = AdapterError::CheckerFailed {
            program: "mypy".into(),
            code: 2,
            stderr: "mypy: error: unrecognized arguments: --py2".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("exit code 2"));
        assert!(msg.contains("unrecognized arguments: --py2"));
    }

    #[test]
    fn path_not_found_displays_path() {
        let err = AdapterError::PathNotFound {
            path: PathBuf::from("src/nosuch.py"),
        };
        assert!(err.to_string().contains("src/nosuch.py"));
    }

    #[test]
    fn unparseable_line_displays_line() {
        let err = AdapterError::UnparseableLine {
            line: "garbage".into(),
        };
        assert!(err.to_string().contains("garbage"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: AdapterError = io_err.into();
        assert!(matches!(err, AdapterError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(AdapterError::bad_config("mypy", "test"))
        }
        assert!(returns_error().is_err());
    }
}
