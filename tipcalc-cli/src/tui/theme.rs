//! Light and dark palettes for the TUI.
//!
//! The active theme lives on the `App` and is swapped when dark mode is toggled.

use ratatui::style::{Color, Modifier, Style};

/// Colors and pre-computed styles for one appearance mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Brand accent, used for titles and the focused border.
    pub primary: Color,
    /// Main background.
    pub background: Color,
    /// Card and input backgrounds.
    pub surface: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    /// Unfocused borders and separators.
    pub border: Color,
    pub is_dark: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            primary: Color::Rgb(103, 80, 164),
            background: Color::Rgb(254, 247, 255),
            surface: Color::Rgb(243, 237, 247),
            text_primary: Color::Rgb(29, 27, 32),
            text_muted: Color::Rgb(96, 93, 102),
            border: Color::Rgb(202, 196, 208),
            is_dark: false,
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(208, 188, 255),
            background: Color::Rgb(20, 18, 24),
            surface: Color::Rgb(33, 31, 38),
            text_primary: Color::Rgb(230, 224, 233),
            text_muted: Color::Rgb(202, 196, 208),
            border: Color::Rgb(73, 69, 79),
            is_dark: true,
        }
    }

    pub fn for_mode(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }

    // ─────────────────────────────────────────────────────────────
    // Pre-computed Styles
    // ─────────────────────────────────────────────────────────────

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn border_active(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn border_inactive(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn bg(&self) -> Style {
        Style::default().bg(self.background)
    }

    pub fn bg_panel(&self) -> Style {
        Style::default().bg(self.surface)
    }

    /// Large result value.
    pub fn value(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Knob of a switch in the "on" position.
    pub fn switch_on(&self) -> Style {
        Style::default()
            .fg(self.background)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Knob of a switch in the "off" position.
    pub fn switch_off(&self) -> Style {
        Style::default().fg(self.text_muted).bg(self.surface)
    }

    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }
}

/// Icons used throughout the TUI
pub mod icons {
    pub const TIP: &str = "💰";
    pub const SUN: &str = "☀";
    pub const MOON: &str = "🌙";
    pub const ARROW_RIGHT: &str = "➜";
    pub const SEPARATOR: &str = "│";
    pub const ROUNDED: &str = "↑";
}
