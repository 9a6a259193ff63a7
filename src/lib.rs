//! mypy-adapter - Run mypy and normalize its report into structured diagnostics.
//!
//! The adapter translates a profile's option map into mypy flags, runs mypy
//! over a set of Python modules, and parses every report line into a
//! [`Message`] with a [`Location`].
//!
//! # Modules
//!
//! - [`checker`] - The [`Checker`](checker::Checker) seam and subprocess runner
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Profile loading and tool options
//! - [`error`] - Error types and result aliases
//! - [`files`] - Python module collection
//! - [`message`] - Normalized diagnostic messages
//! - [`output`] - Human and JSON formatters
//! - [`tools`] - Tool adapters (mypy)
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use mypy_adapter::tools::mypy::parse_line;
//!
//! let message = parse_line("app.py:12:5: error: Incompatible return value type").unwrap();
//! assert_eq!(message.source, "mypy");
//! assert_eq!(message.location.line, 12);
//! assert_eq!(message.location.character, Some(5));
//! assert_eq!(message.message, "Incompatible return value type");
//! ```

pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod files;
pub mod message;
pub mod output;
pub mod tools;
pub mod ui;

pub use error::{AdapterError, Result};
pub use message::{Location, Message};
