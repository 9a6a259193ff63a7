//! The mypy adapter.
//!
//! [`MypyTool`] turns profile options into mypy flags, runs mypy over a
//! set of modules and parses its report into [`Message`](crate::message::Message)s.

pub mod format;
pub mod options;

pub use format::{parse_line, ReportFormat, REPORT_FORMATS};
pub use options::{build_flags, option_spec, OptionKind, OptionSpec, LIST_OPTIONS, OPTIONS};

use crate::checker::{Checker, ProcessChecker};
use crate::config::ToolOptions;
use crate::error::Result;
use crate::files::FoundFiles;

use super::{RunReport, Tool};

/// Name reported as the source of every mypy message.
pub const TOOL_NAME: &str = "mypy";

/// Flags every run carries, so report lines have columns and no summary.
pub const BASE_FLAGS: &[&str] = &["--show-column-numbers", "--no-error-summary"];

/// Adapter around the mypy type checker.
pub struct MypyTool {
    checker: Box<dyn Checker>,
    flags: Vec<String>,
}

impl MypyTool {
    /// Create an adapter that runs `mypy` from `PATH`.
    pub fn new() -> Self {
        Self::with_checker(ProcessChecker::default())
    }

    /// Create an adapter that runs mypy through the given checker.
    pub fn with_checker(checker: impl Checker + 'static) -> Self {
        Self {
            checker: Box::new(checker),
            flags: base_flags(),
        }
    }

    /// Flags passed after the module paths.
    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    /// Full argument list for a run: module paths, then flags.
    pub fn arguments(&self, files: &FoundFiles) -> Vec<String> {
        files
            .python_modules()
            .map(|path| path.display().to_string())
            .chain(self.flags.iter().cloned())
            .collect()
    }
}

impl Default for MypyTool {
    fn default() -> Self {
        Self::new()
    }
}

fn base_flags() -> Vec<String> {
    BASE_FLAGS.iter().map(|flag| flag.to_string()).collect()
}

impl Tool for MypyTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn configure(&mut self, options: &ToolOptions) -> Result<()> {
        let configured = build_flags(options)?;

        self.flags = base_flags();
        self.flags.extend(configured);

        tracing::debug!("mypy flags: {}", self.flags.join(" "));
        Ok(())
    }

    fn run(&self, files: &FoundFiles) -> Result<RunReport> {
        if files.is_empty() {
            tracing::info!("No python modules to check");
            return Ok(RunReport::default());
        }

        let output = self.checker.run(&self.arguments(files))?;

        let mut report = RunReport::default();
        for line in output.report.lines().filter(|l| !l.trim().is_empty()) {
            match parse_line(line) {
                Ok(message) => report.messages.push(message),
                Err(e) => {
                    tracing::warn!("Skipping mypy output line: {}", e);
                    report.skipped.push(line.to_string());
                }
            }
        }

        tracing::debug!(
            "mypy reported {} messages ({} lines skipped)",
            report.messages.len(),
            report.skipped.len()
        );
        Ok(report)
    }
}
