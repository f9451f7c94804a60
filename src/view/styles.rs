//! Styling for the search screen.
//!
//! Colors can be turned off entirely; the row cursor stays visible through
//! reverse video either way.

use ratatui::style::{Color, Modifier, Style};

/// Dimmed text for hints and placeholders.
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Category headings in the help overlay.
pub const SECTION_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ResultStyles =====

/// Styles for the search box, result rows and repository rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultStyles {
    /// "Showing users for ..." heading.
    pub heading: Style,
    /// User login in a result row.
    pub login: Style,
    /// Expand/collapse marker.
    pub marker: Style,
    /// Repository name.
    pub repo_name: Style,
    /// Star count.
    pub stars: Style,
    /// Repository description line.
    pub description: Style,
    /// Failure messages.
    pub error: Style,
    /// Hints and empty-state text.
    pub muted: Style,
    /// Patch applied to the row under the cursor.
    pub selected: Style,
    /// Border of the pane with focus.
    pub focused_border: Style,
    /// Border of the other pane.
    pub unfocused_border: Style,
    /// Busy spinner in the search title.
    pub spinner: Style,
}

impl ResultStyles {
    /// Create styles with the specified color configuration.
    ///
    /// If colors are disabled, only modifiers are applied.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let selected = Style::new().add_modifier(Modifier::REVERSED);

        if config.colors_enabled() {
            Self {
                heading: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                login: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
                marker: Style::new().fg(Color::Cyan),
                repo_name: Style::new().fg(Color::Green),
                stars: Style::new().fg(Color::Yellow),
                description: Style::new().fg(Color::Gray),
                error: Style::new().fg(Color::Red),
                muted: MUTED_TEXT,
                selected,
                focused_border: Style::new().fg(Color::Cyan),
                unfocused_border: Style::new().fg(Color::DarkGray),
                spinner: Style::new().fg(Color::Yellow),
            }
        } else {
            Self {
                heading: Style::new().add_modifier(Modifier::BOLD),
                login: Style::new().add_modifier(Modifier::BOLD),
                marker: Style::new(),
                repo_name: Style::new(),
                stars: Style::new(),
                description: Style::new(),
                error: Style::new(),
                muted: Style::new(),
                selected,
                focused_border: Style::new().add_modifier(Modifier::BOLD),
                unfocused_border: Style::new(),
                spinner: Style::new(),
            }
        }
    }
}

impl Default for ResultStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
