//! Centralized theme and styling for the TUI
//!
//! Single source of truth for colors and styles so the rendering code
//! never hardcodes them.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Primary dark background
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Accent color for titles and borders
    pub const ACCENT: Color = Color::Cyan;

    /// Error text color
    pub const ERROR: Color = Color::Red;
}

/// Pre-built styles used by the renderer
pub struct Styles;

impl Styles {
    /// Default body text
    pub fn body() -> Style {
        Style::default().fg(Colors::FG_PRIMARY).bg(Colors::BG_PRIMARY)
    }

    /// Window title
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Window border
    pub fn border() -> Style {
        Style::default().fg(Colors::ACCENT)
    }

    /// Error message lines
    pub fn error() -> Style {
        Style::default()
            .fg(Colors::ERROR)
            .add_modifier(Modifier::BOLD)
    }
}
