//! Light/dark theme palettes

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Which of the two site themes is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Glyph shown on the theme toggle (advertises the theme you switch to)
    pub fn toggle_glyph(&self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀",
        }
    }
}

/// Resolved color palette for the active theme
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
}

impl Theme {
    pub fn of(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                bg: Color::White,
                fg: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Blue,
                error: Color::Red,
                success: Color::Green,
                border: Color::Gray,
            },
            ThemeMode::Dark => Self {
                bg: Color::Black,
                fg: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                error: Color::LightRed,
                success: Color::LightGreen,
                border: Color::DarkGray,
            },
        }
    }
}
