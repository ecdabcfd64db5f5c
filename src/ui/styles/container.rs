// SPDX-License-Identifier: MPL-2.0
//! Container styles.
//!
//! Styles close over a [`ColorScheme`] so the screen follows the configured
//! theme mode rather than the Iced `Theme` palette.

use crate::ui::design_tokens::{palette, radius, shadow, sizing};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Phone frame around the whole screen.
pub fn shell(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.background;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::SHELL.into(),
            width: sizing::DIVIDER,
            color: palette::SHELL_OUTLINE,
        },
        ..Default::default()
    }
}

/// Elevated white card with a soft shadow.
pub fn card(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let surface = colors.surface;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        border: Border {
            radius: radius::CARD.into(),
            ..Default::default()
        },
        shadow: shadow::CARD,
        ..Default::default()
    }
}

/// Grey date chip between transaction groups.
pub fn date_chip(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let chip = colors.chip;
    let text = colors.text_secondary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(chip)),
        text_color: Some(text),
        border: Border {
            radius: radius::CHIP.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Green chip behind incoming amounts.
pub fn amount_chip(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let success = colors.success;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(success)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::CHIP.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// One-pixel horizontal rule.
pub fn divider(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    solid(colors.border, 0.0)
}

/// Round pager dot.
pub fn pager_dot(colors: &ColorScheme, active: bool) -> impl Fn(&Theme) -> container::Style {
    let color = if active {
        colors.dot_active
    } else {
        colors.dot_inactive
    };
    solid(color, radius::FULL)
}

fn solid(color: Color, corner: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: corner.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
