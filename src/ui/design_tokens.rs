// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the mockup's design tokens.

## Organization

- **Palette**: Brand, semantic and neutral colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use payo::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::CARD_SHADOW,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

/// Builds a color from 8-bit channels.
const fn rgb8(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::{rgb8, Color};

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Brand
    pub const PRIMARY: Color = rgb8(0xFF, 0x48, 0x00);

    // Semantic colors
    pub const SUCCESS: Color = rgb8(0x1C, 0xD2, 0x93);
    pub const ERROR: Color = rgb8(0xEF, 0x4C, 0x5B);

    /// Inline asset failure text.
    pub const FAILURE_TEXT: Color = rgb8(0xB0, 0x00, 0x20);

    // Neutrals
    pub const BORDER: Color = rgb8(0xE0, 0xE0, 0xE0);
    pub const TEXT: Color = rgb8(0x25, 0x25, 0x26);
    pub const TEXT_SECONDARY: Color = rgb8(0x6F, 0x6F, 0x70);
    pub const CHIP: Color = rgb8(0xEF, 0xEF, 0xEF);
    pub const SHELL_OUTLINE: Color = rgb8(0xE4, 0xE6, 0xEA);

    // Pager dots
    pub const DOT_ACTIVE: Color = rgb8(0xC9, 0xC9, 0xC9);
    pub const DOT_INACTIVE: Color = rgb8(0xE5, 0xE5, 0xE6);

    // Dark surfaces
    pub const GRAY_900: Color = rgb8(0x1A, 0x1A, 0x1B);
    pub const GRAY_800: Color = rgb8(0x26, 0x26, 0x28);
    pub const GRAY_700: Color = rgb8(0x3A, 0x3A, 0x3C);
    pub const GRAY_300: Color = rgb8(0xA8, 0xA8, 0xAA);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const CARD_SHADOW: f32 = 0.08;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 6.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 14.0;
    pub const XL: f32 = 16.0;
    pub const XXL: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Width of the phone frame.
    pub const SHELL_WIDTH: f32 = 390.0;
    pub const SHELL_MIN_HEIGHT: f32 = 780.0;

    pub const FLAG: f32 = 32.0;
    pub const PAGER_DOT: f32 = 6.0;
    pub const DIVIDER: f32 = 1.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Balance amount.
    pub const AMOUNT: f32 = 22.0;

    /// Standard body - names, amounts in rows.
    pub const BODY: f32 = 16.0;

    /// Captions and statuses.
    pub const CAPTION: f32 = 14.0;

    /// Date chips.
    pub const CHIP: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const CHIP: f32 = 8.0;
    pub const CARD: f32 = 16.0;
    pub const SHELL: f32 = 24.0;
    pub const FULL: f32 = 999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    /// `0 2px 12px rgba(0,0,0,0.08)`
    pub const CARD: Shadow = Shadow {
        color: Color {
            a: opacity::CARD_SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);
    assert!(spacing::XXL > spacing::XL);

    assert!(typography::AMOUNT > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
    assert!(typography::CAPTION > typography::CHIP);

    assert!(radius::CARD > radius::CHIP);
    assert!(opacity::CARD_SHADOW > 0.0 && opacity::CARD_SHADOW < 1.0);
};
