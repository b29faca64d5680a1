// SPDX-License-Identifier: MPL-2.0
//! Appearance override and color schemes.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface_primary: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    /// Current page dot and primary action.
    pub brand_primary: Color,
    /// Other page dots.
    pub indicator_inactive: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            brand_primary: palette::PRIMARY_600,
            indicator_inactive: palette::GRAY_400,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_800,
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            brand_primary: palette::PRIMARY_400,
            indicator_inactive: palette::GRAY_100,
        }
    }
}

/// Appearance override. `System` means no override is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Explicit override showing the opposite of the current appearance.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("invalid theme_mode: {}", other)),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        };
        f.write_str(name)
    }
}

/// Resolved appearance: the override plus what it currently looks like.
///
/// System detection runs when the appearance is created or toggled, never
/// while rendering.
#[derive(Debug, Clone)]
pub struct Appearance {
    mode: ThemeMode,
    dark: bool,
    scheme: ColorScheme,
}

impl Appearance {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let dark = mode.is_dark();
        let scheme = if dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };
        Self { mode, dark, scheme }
    }

    /// Switches to an explicit override opposite to the current look.
    pub fn toggle(&mut self) {
        let mode = self.mode.toggled();
        tracing::debug!(from = %self.mode, to = %mode, "appearance toggled");
        *self = Self::new(mode);
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    #[must_use]
    pub fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
