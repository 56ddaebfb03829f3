//! Visual theme and styling.

use console::Style;

/// The tool's visual theme.
#[derive(Debug, Clone)]
pub struct FreshTheme {
    /// Style for error messages (red).
    pub error: Style,
    /// Style for dim/secondary text.
    pub hint: Style,
    /// Style for the latest published version (green 256-color).
    pub latest_version: Style,
    /// Style for the version currently in use (orange 256-color).
    pub current_version: Style,
}

impl Default for FreshTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl FreshTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red(),
            hint: Style::new().dim(),
            latest_version: Style::new().color256(121).bold(),
            current_version: Style::new().color256(208).bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
            hint: Style::new(),
            latest_version: Style::new(),
            current_version: Style::new(),
        }
    }
}

/// Whether styled output should be produced at all.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
