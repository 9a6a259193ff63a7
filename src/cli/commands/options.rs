//! Options command implementation.
//!
//! The `mypy-adapter options` command lists every option a profile may set
//! in its `mypy` section.

use serde::Serialize;

use crate::cli::args::OptionsArgs;
use crate::error::Result;
use crate::tools::mypy::OPTIONS;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The options command implementation.
pub struct OptionsCommand {
    args: OptionsArgs,
}

#[derive(Serialize)]
struct JsonOption {
    name: &'static str,
    kind: &'static str,
    help: &'static str,
}

impl OptionsCommand {
    /// Create a new options command.
    pub fn new(args: OptionsArgs) -> Self {
        Self { args }
    }

    fn render_table(&self) -> String {
        let width = OPTIONS.iter().map(|o| o.name.len()).max().unwrap_or(0);

        OPTIONS
            .iter()
            .map(|o| {
                format!(
                    "{:<width$}  {:<7}  {}",
                    o.name,
                    o.kind.expected(),
                    o.help,
                    width = width
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_json(&self) -> Result<String> {
        let options: Vec<_> = OPTIONS
            .iter()
            .map(|o| JsonOption {
                name: o.name,
                kind: o.kind.expected(),
                help: o.help,
            })
            .collect();

        Ok(serde_json::to_string_pretty(&options).map_err(anyhow::Error::from)?)
    }
}

impl Command for OptionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let output = if self.args.json {
            self.render_json()?
        } else {
            self.render_table()
        };

        ui.message(&output);
        Ok(CommandResult::success())
    }
}
