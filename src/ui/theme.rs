//! Visual theme and styling for diagnostics.

use console::Style;

/// Styles used when reporting failures on stderr.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for secondary detail lines (dim).
    pub dim: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold().for_stderr(),
            dim: Style::new().dim().for_stderr(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
            dim: Style::new(),
        }
    }

    /// Pick a theme based on [`should_use_colors`].
    pub fn detect(no_color: bool) -> Self {
        if !no_color && should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format an error message with an `error:` prefix.
    ///
    /// Multi-line messages keep their first line on the prefix line and render
    /// the rest dimmed.
    pub fn format_error(&self, msg: &str) -> String {
        let mut lines = msg.lines();
        let head = lines.next().unwrap_or_default();
        let mut out = format!("{} {}", self.error.apply_to("error:"), head);
        for line in lines {
            out.push('\n');
            out.push_str(&self.dim.apply_to(line).to_string());
        }
        out
    }
}

/// Check if colors should be enabled on stderr.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}
