//! Table styling configuration.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Colors are disabled when the `NO_COLOR` environment variable is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Read the `NO_COLOR` convention from the environment.
    pub fn from_env() -> Self {
        Self::new(std::env::var_os("NO_COLOR").is_none())
    }

    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== TableStyles =====

/// Styles for the table screen.
///
/// With colors disabled, emphasis falls back to modifiers only so the
/// selection and focus stay visible on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStyles {
    pub header: Style,
    pub focused_header: Style,
    pub selected_row: Style,
    pub editing_input: Style,
    pub status: Style,
}

impl TableStyles {
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                header: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                focused_header: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                selected_row: Style::default().bg(Color::DarkGray),
                editing_input: Style::default().fg(Color::Cyan),
                status: Style::default().fg(Color::Gray),
            }
        } else {
            Self {
                header: Style::default().add_modifier(Modifier::BOLD),
                focused_header: Style::default().add_modifier(Modifier::REVERSED),
                selected_row: Style::default().add_modifier(Modifier::REVERSED),
                editing_input: Style::default(),
                status: Style::default(),
            }
        }
    }
}

impl Default for TableStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env())
    }
}
