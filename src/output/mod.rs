//! Diagnostic output formatters.
//!
//! This module provides formatters for printing [`Message`]s in different
//! formats (human-readable, JSON).

pub mod human;
pub mod json;

use crate::message::Message;
use std::io::Write;
use std::str::FromStr;

/// Output format for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

/// Trait for formatting diagnostics.
pub trait MessageFormatter {
    /// Format messages to the given writer.
    fn format<W: Write>(&self, messages: &[Message], writer: &mut W) -> std::io::Result<()>;
}

/// Count messages whose code is `code`.
pub(crate) fn count_code(messages: &[Message], code: &str) -> usize {
    messages.iter().filter(|m| m.code == code).count()
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
