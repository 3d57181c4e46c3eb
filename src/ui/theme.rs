//! Visual theme and styling.

use console::Style;

/// doual's visual theme.
#[derive(Debug, Clone)]
pub struct DoualTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational markers (blue).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for alias names (cyan bold).
    pub alias: Style,
    /// Style for commands shown in output (magenta).
    pub command: Style,
    /// Style for contextual hints (blue dim).
    pub hint: Style,
}

impl Default for DoualTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DoualTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            info: Style::new().blue(),
            dim: Style::new().dim(),
            alias: Style::new().cyan().bold(),
            command: Style::new().magenta(),
            hint: Style::new().blue().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            alias: Style::new(),
            command: Style::new(),
            hint: Style::new(),
        }
    }

    /// Pick the colored or plain theme for the current terminal.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a status message (`[i]` marker).
    pub fn format_info(&self, msg: &str) -> String {
        format!("{} {}", self.info.apply_to("[i]"), self.dim.apply_to(msg))
    }

    /// Format a success message (`[✔]` marker in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{} {}", self.success.apply_to("[✔]"), msg)
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("[!] {}", msg)))
    }

    /// Format an error message (`[✘]` marker, red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("[✘] {}", msg)))
    }

    /// Format a hint.
    pub fn format_hint(&self, msg: &str) -> String {
        format!("{}", self.hint.apply_to(format!("    {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
