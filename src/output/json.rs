//! JSON output formatter.
//!
//! Formats diagnostics as machine-readable JSON for tooling integration.

use super::{count_code, MessageFormatter};
use crate::message::Message;
use serde::Serialize;
use std::io::Write;

/// Formats output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    messages: &'a [Message],
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    errors: usize,
    notes: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageFormatter for JsonFormatter {
    fn format<W: Write>(&self, messages: &[Message], writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            messages,
            summary: JsonSummary {
                total: messages.len(),
                errors: count_code(messages, "error"),
                notes: count_code(messages, "note"),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
