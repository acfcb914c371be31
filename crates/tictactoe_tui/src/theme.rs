//! Centralized theme palettes for the TUI.
//!
//! All rendering colors come from the active [`Palette`]; nothing else in
//! the interface hardcodes a color. The theme is presentation-only state:
//! toggling it is always accepted and never touches the game aggregate.

use clap::ValueEnum;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Color theme for the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background (the default).
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// Switches between `Light` and `Dark`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Display label for this theme.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Resolved color set for this theme.
    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

/// Resolved colors for rendering.
///
/// X uses a primary blue, O an amber accent; the win highlight reuses the
/// O accent. Both marks keep their hue across themes, adjusted for
/// contrast against the background.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Screen background.
    pub bg: Color,
    /// Default text.
    pub text: Color,
    /// De-emphasized text: hints, separators, locked fields.
    pub dim: Color,
    /// The X mark and X's turn status.
    pub x_mark: Color,
    /// The O mark, O's turn status, and win emphasis.
    pub o_mark: Color,
    /// Background of the cell under the cursor.
    pub cursor_bg: Color,
    /// Background of the three winning cells.
    pub win_bg: Color,
}

const LIGHT: Palette = Palette {
    bg: Color::Rgb(0xfa, 0xfa, 0xfa),
    text: Color::Rgb(0x28, 0x2c, 0x34),
    dim: Color::Rgb(0x8a, 0x8f, 0x98),
    x_mark: Color::Rgb(0x19, 0x76, 0xd2),
    o_mark: Color::Rgb(0xc8, 0x84, 0x00),
    cursor_bg: Color::Rgb(0xd6, 0xe4, 0xf7),
    win_bg: Color::Rgb(0xff, 0xec, 0xb3),
};

const DARK: Palette = Palette {
    bg: Color::Rgb(0x1a, 0x1a, 0x1e),
    text: Color::Rgb(0xe4, 0xe4, 0xe7),
    dim: Color::Rgb(0x71, 0x71, 0x7a),
    x_mark: Color::Rgb(0x64, 0xb5, 0xf6),
    o_mark: Color::Rgb(0xff, 0xca, 0x28),
    cursor_bg: Color::Rgb(0x2c, 0x3a, 0x4a),
    win_bg: Color::Rgb(0x4a, 0x3c, 0x10),
};
