//! Human-readable output formatter.
//!
//! Formats diagnostics for terminal display with optional color support.

use super::{count_code, MessageFormatter};
use crate::message::Message;
use console::Style;
use std::io::Write;

/// Formats diagnostics for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn code_style(&self, code: &str) -> Style {
        if !self.use_color {
            return Style::new();
        }
        match code {
            "error" => Style::new().red().bold(),
            "note" => Style::new().cyan(),
            _ => Style::new().color256(208),
        }
    }

    fn dim(&self) -> Style {
        if self.use_color {
            Style::new().dim()
        } else {
            Style::new()
        }
    }
}

impl MessageFormatter for HumanFormatter {
    fn format<W: Write>(&self, messages: &[Message], writer: &mut W) -> std::io::Result<()> {
        for msg in messages {
            // Header line: error[mypy]: message
            writeln!(
                writer,
                "{}[{}]: {}",
                self.code_style(&msg.code).apply_to(&msg.code),
                msg.source,
                msg.message
            )?;

            writeln!(writer, "  {} {}", self.dim().apply_to("-->"), msg.location)?;
        }

        let errors = count_code(messages, "error");
        let notes = count_code(messages, "note");
        if !messages.is_empty() {
            writeln!(
                writer,
                "Found {} error(s) and {} note(s) in {} message(s)",
                errors,
                notes,
                messages.len()
            )?;
        }

        Ok(())
    }
}
