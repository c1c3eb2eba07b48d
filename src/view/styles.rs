//! Styling configuration for the result list and chrome.

use ratatui::style::{Color, Modifier, Style};

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

// ===== AppStyles =====

/// Styles for every piece of the UI.
///
/// With colors disabled every style collapses to the terminal default so
/// the layout still reads in monochrome.
#[derive(Debug, Clone)]
pub struct AppStyles {
    /// Repository full name.
    pub repo_name: Style,
    /// Star count.
    pub stars: Style,
    /// Primary language tag.
    pub language: Style,
    /// Description text.
    pub description: Style,
    /// Update date column.
    pub updated: Style,
    /// Error banner.
    pub error: Style,
    /// Loading row and spinner.
    pub loading: Style,
    /// Hint text (threshold tooltip, key hints).
    pub hint: Style,
}

impl AppStyles {
    /// Styles for the given color configuration.
    pub fn new(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                repo_name: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                stars: Style::default().fg(Color::Yellow),
                language: Style::default().fg(Color::Magenta),
                description: Style::default(),
                updated: Style::default().fg(Color::DarkGray),
                error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                loading: Style::default().fg(Color::Green),
                hint: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                repo_name: Style::default().add_modifier(Modifier::BOLD),
                stars: Style::default(),
                language: Style::default(),
                description: Style::default(),
                updated: Style::default(),
                error: Style::default(),
                loading: Style::default(),
                hint: Style::default(),
            }
        }
    }
}

impl Default for AppStyles {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}
