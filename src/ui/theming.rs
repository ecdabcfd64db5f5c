// SPDX-License-Identifier: MPL-2.0
//! Light/dark color schemes for the mockup.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub background: Color,
    pub surface: Color,
    pub chip: Color,
    pub border: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub brand: Color,
    pub success: Color,
    pub failure_text: Color,

    pub dot_active: Color,
    pub dot_inactive: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: palette::WHITE,
            surface: palette::WHITE,
            chip: palette::CHIP,
            border: palette::BORDER,
            text_primary: palette::TEXT,
            text_secondary: palette::TEXT_SECONDARY,
            brand: palette::PRIMARY,
            success: palette::SUCCESS,
            failure_text: palette::FAILURE_TEXT,
            dot_active: palette::DOT_ACTIVE,
            dot_inactive: palette::DOT_INACTIVE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: palette::GRAY_900,
            surface: palette::GRAY_800,
            chip: palette::GRAY_700,
            border: palette::GRAY_700,
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_300,
            brand: palette::PRIMARY,
            success: palette::SUCCESS,
            failure_text: palette::ERROR,
            dot_active: palette::GRAY_300,
            dot_inactive: palette::GRAY_700,
        }
    }

    /// Detects the system theme and returns the matching scheme.
    #[must_use]
    pub fn from_system() -> Self {
        if ThemeMode::System.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Global theme configuration.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

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
    ///
    /// The mockup is designed on white, so system detection failures
    /// resolve to light.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        };

        Self { colors, mode }
    }

    #[must_use]
    pub fn iced_theme(&self) -> iced::Theme {
        if self.mode.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}
