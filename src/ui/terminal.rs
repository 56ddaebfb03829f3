//! Terminal UI implementation.

use console::Term;
use std::io::Write;

use super::{should_use_colors, FreshTheme, OutputMode, UserInterface};

/// Creates the UI for the current process.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}

/// Terminal UI writing through [`console::Term`].
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: FreshTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            FreshTheme::new()
        } else {
            FreshTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn hint(&mut self, msg: &str) {
        if self.mode.shows_hints() {
            writeln!(self.out, "{}", self.theme.hint.apply_to(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.error.apply_to(msg)).ok();
    }

    fn update_notice(&mut self, latest: &str, current: &str) {
        if !self.mode.shows_status() {
            return;
        }
        writeln!(
            self.out,
            "Fresh {} is available. You're on {}",
            self.theme.latest_version.apply_to(latest),
            self.theme.current_version.apply_to(current),
        )
        .ok();
    }
}
