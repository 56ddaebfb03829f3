//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for asserting on output in tests
//! - The color theme and output verbosity modes
//!
//! # Example
//!
//! ```
//! use fresh_cli::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Quiet);
//! ui.message("checked for updates");
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, FreshTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests instead of writing to a
/// terminal.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a secondary hint line.
    fn hint(&mut self, msg: &str);

    /// Display an error message on the error stream.
    fn error(&mut self, msg: &str);

    /// Announce that a newer release is available.
    ///
    /// Implementations may highlight the version strings; the default just
    /// composes a plain message.
    fn update_notice(&mut self, latest: &str, current: &str) {
        self.message(&format!("Fresh {latest} is available. You're on {current}"));
    }
}
