//! Check command implementation.
//!
//! The `mypy-adapter check` command loads the profile, runs mypy over the
//! requested paths and prints the normalized diagnostics.

use std::path::{Path, PathBuf};

use crate::checker::ProcessChecker;
use crate::cli::args::CheckArgs;
use crate::config::load_profile;
use crate::error::{AdapterError, Result};
use crate::files::FoundFiles;
use crate::message::Message;
use crate::output::{HumanFormatter, JsonFormatter, MessageFormatter, OutputFormat};
use crate::tools::{run_tool, MypyTool, Tool};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Exit code for profile and option errors.
const CONFIG_ERROR_EXIT_CODE: i32 = 2;

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    profile: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, profile: Option<PathBuf>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            profile,
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// Collect the modules to check, relative to the project root.
    fn collect_files(&self) -> Result<FoundFiles> {
        let paths: Vec<PathBuf> = if self.args.paths.is_empty() {
            vec![self.project_root.clone()]
        } else {
            self.args
                .paths
                .iter()
                .map(|p| self.project_root.join(p))
                .collect()
        };

        Ok(FoundFiles::collect(&paths)?.relative_to(&self.project_root))
    }

    /// Format messages using the requested formatter.
    fn format_output(&self, messages: &[Message], use_color: bool) -> String {
        let mut output = Vec::new();

        match self.args.format {
            OutputFormat::Json => {
                JsonFormatter::new().format(messages, &mut output).ok();
            }
            OutputFormat::Human => {
                HumanFormatter::new(use_color)
                    .format(messages, &mut output)
                    .ok();
            }
        }

        String::from_utf8(output).unwrap_or_default()
    }

    /// Run the given tool and report its results.
    ///
    /// Split out from [`Command::execute`] so tests can supply a tool
    /// with a fake checker.
    pub fn run_with(
        &self,
        tool: &mut dyn Tool,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let profile = match load_profile(&self.project_root, self.profile.as_deref()) {
            Ok(p) => p,
            Err(
                e @ (AdapterError::ProfileNotFound { .. }
                | AdapterError::ProfileParseError { .. }),
            ) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(CONFIG_ERROR_EXIT_CODE));
            }
            Err(e) => return Err(e),
        };

        let files = match self.collect_files() {
            Ok(files) => files,
            Err(e @ AdapterError::PathNotFound { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(CONFIG_ERROR_EXIT_CODE));
            }
            Err(e) => return Err(e),
        };
        ui.detail(&format!("Checking {} python module(s)", files.len()));

        let report = match run_tool(tool, &profile, &files) {
            Ok(Some(report)) => report,
            Ok(None) => {
                ui.warning(&format!("{} is disabled by the profile", tool.name()));
                return Ok(CommandResult::success());
            }
            Err(e @ AdapterError::BadToolConfig { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(CONFIG_ERROR_EXIT_CODE));
            }
            Err(e) => return Err(e),
        };

        for line in &report.skipped {
            ui.detail(&format!("Skipped unrecognized output: {}", line));
        }

        let messages = report.messages;
        if messages.is_empty() && self.args.format == OutputFormat::Human {
            ui.success("No issues found");
        } else {
            let output = self.format_output(&messages, ui.use_color());
            ui.message(output.trim_end());
        }

        if self.args.fail_on_messages && !messages.is_empty() {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let checker = ProcessChecker::new(&self.args.mypy).with_cwd(&self.project_root);
        let mut tool = MypyTool::with_checker(checker);
        self.run_with(&mut tool, ui)
    }
}
