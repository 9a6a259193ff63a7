//! Terminal UI.

use super::theme::{should_use_colors, Theme};
use super::{OutputMode, UserInterface};

/// Writes diagnostics to stdout and status lines to stderr.
///
/// Keeping status off stdout means `--format json` output stays parseable.
pub struct TerminalUI {
    mode: OutputMode,
    theme: Theme,
    use_color: bool,
}

impl TerminalUI {
    /// Create a terminal UI; colors follow `use_color`.
    pub fn new(mode: OutputMode, use_color: bool) -> Self {
        Self {
            mode,
            theme: if use_color {
                Theme::new()
            } else {
                Theme::plain()
            },
            use_color,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_details() {
            eprintln!("{}", self.theme.dim.apply_to(msg));
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn use_color(&self) -> bool {
        self.use_color
    }
}

/// Create the UI for this process.
///
/// Colors are used only when stdout is a terminal, `NO_COLOR` is unset,
/// and `no_color` is false.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode, !no_color && should_use_colors()))
}
