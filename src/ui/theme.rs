//! Color palettes and ANSI escape sequence generation.
//!
//! Two palettes ship with the plugin, one per theme preference:
//!
//! - `catppuccin-mocha`: dark
//! - `catppuccin-latte`: light
//!
//! # TOML Format
//!
//! ```toml
//! name = "catppuccin-mocha"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! url_fg = "#89b4fa"
//! status_info_fg = "#a6e3a1"
//! status_error_fg = "#f38ba8"
//! ```

use crate::domain::error::{LauncherError, Result};
use serde::{Deserialize, Serialize};

pub const DARK_THEME: &str = "catppuccin-mocha";
pub const LIGHT_THEME: &str = "catppuccin-latte";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex color strings (e.g. `"#cdd6f4"`) for every styled element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer and descriptions.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    pub url_fg: String,
    pub status_info_fg: String,
    pub status_error_fg: String,
}

impl Theme {
    /// Loads a built-in palette by name.
    ///
    /// # Errors
    ///
    /// Returns [`LauncherError::Theme`] for an unknown name or unparsable palette.
    pub fn from_name(name: &str) -> Result<Self> {
        let toml_str = match name {
            DARK_THEME => include_str!("../../themes/catppuccin-mocha.toml"),
            LIGHT_THEME => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return Err(LauncherError::Theme(format!("unknown theme '{name}'"))),
        };

        toml::from_str(toml_str).map_err(|e| LauncherError::Theme(format!("failed to parse '{name}': {e}")))
    }

    /// Palette for the given theme preference.
    ///
    /// # Panics
    ///
    /// Panics if a built-in palette fails to parse, which the tests rule out.
    #[must_use]
    pub fn for_mode(dark: bool) -> Self {
        let name = if dark { DARK_THEME } else { LIGHT_THEME };
        Self::from_name(name).expect("built-in theme should always parse")
    }

    /// Parses `#rrggbb`; malformed input renders as white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_mode(false)
    }
}
