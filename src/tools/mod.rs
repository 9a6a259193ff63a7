//! Tool adapters.
//!
//! A tool adapter wraps one external analyzer:
//!
//! - [`Tool`] - The trait every adapter implements
//! - [`RunReport`] - What a run produced
//! - [`mypy`] - The mypy type checker adapter
//!
//! # Example
//!
//! ```
//! use mypy_adapter::checker::{Checker, CheckerOutput};
//! use mypy_adapter::config::ToolOptions;
//! use mypy_adapter::files::FoundFiles;
//! use mypy_adapter::tools::{MypyTool, Tool};
//!
//! struct Canned;
//!
//! impl Checker for Canned {
//!     fn run(&self, _args: &[String]) -> mypy_adapter::Result<CheckerOutput> {
//!         Ok(CheckerOutput::from_report("app.py:3:1: error: Name \"x\" is not defined\n"))
//!     }
//! }
//!
//! let mut tool = MypyTool::with_checker(Canned);
//! tool.configure(&ToolOptions::new().with("strict", true)).unwrap();
//!
//! let files: FoundFiles = ["app.py"].into_iter().collect();
//! let report = tool.run(&files).unwrap();
//! assert_eq!(report.messages[0].location.line, 3);
//! ```

pub mod mypy;

pub use mypy::MypyTool;

use crate::config::{Profile, ToolOptions};
use crate::error::Result;
use crate::files::FoundFiles;
use crate::message::Message;

/// Result of running a tool.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Diagnostics in the order the tool reported them.
    pub messages: Vec<Message>,

    /// Report lines that could not be understood.
    pub skipped: Vec<String>,
}

impl RunReport {
    /// Consume the report, keeping only the diagnostics.
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}

/// An adapter around an external analysis tool.
pub trait Tool {
    /// Name of the tool; also the profile section it reads.
    fn name(&self) -> &str;

    /// Translate options into tool-specific arguments.
    ///
    /// Fails before anything is run if an option is unknown or malformed.
    fn configure(&mut self, options: &ToolOptions) -> Result<()>;

    /// Run the tool over the given files.
    fn run(&self, files: &FoundFiles) -> Result<RunReport>;
}

/// Configure a tool from its profile section and run it.
///
/// Returns `None` when the profile disables the tool.
pub fn run_tool(
    tool: &mut dyn Tool,
    profile: &Profile,
    files: &FoundFiles,
) -> Result<Option<RunReport>> {
    let section = profile.tool(tool.name())?;
    if !section.run {
        tracing::info!("{} is disabled by the profile", tool.name());
        return Ok(None);
    }

    tool.configure(&section.options)?;
    tool.run(files).map(Some)
}
