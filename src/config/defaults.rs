// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Assets**: Remote URLs for the navigation graphic, fonts and flags
//! - **Tab bar**: Bar and highlight geometry
//! - **Highlight**: Opacity levels per interaction state
//! - **Motion**: Highlight transition timing

// ==========================================================================
// Asset Defaults
// ==========================================================================

/// Background graphic of the bottom navigation bar.
pub const DEFAULT_NAV_BACKGROUND_URL: &str =
    "https://raw.githubusercontent.com/kalinakalina/payo/7876078d40bd554c655f48dcc1fb98903b7e4e44/group%20(3).svg";

/// Regular (400) weight of the UI font.
pub const DEFAULT_FONT_REGULAR_URL: &str =
    "https://github.com/kalinakalina/payo/raw/refs/heads/main/avenir-next-world-regular.otf";

/// Demi (600) weight of the UI font.
pub const DEFAULT_FONT_DEMI_URL: &str =
    "https://github.com/kalinakalina/payo/raw/refs/heads/main/avenir-next-world-demi.otf";

/// Family name declared by the remote font files.
pub const FONT_FAMILY: &str = "Avenir Next World";

pub const DEFAULT_FLAG_US_URL: &str =
    "https://raw.githubusercontent.com/kalinakalina/payo/452ac83e38a32fbaeab29b415bde150b6ad78af1/usflag.svg";
pub const DEFAULT_FLAG_EU_URL: &str =
    "https://raw.githubusercontent.com/kalinakalina/payo/452ac83e38a32fbaeab29b415bde150b6ad78af1/euflag.svg";
pub const DEFAULT_FLAG_UK_URL: &str =
    "https://raw.githubusercontent.com/kalinakalina/payo/452ac83e38a32fbaeab29b415bde150b6ad78af1/ukflag.svg";

// ==========================================================================
// Tab Bar Defaults
// ==========================================================================

/// Slot labels of the bottom navigation, in display order.
pub const TAB_LABELS: [&str; 4] = ["Home", "Activity", "Actions", "Cards"];

/// Label selected on startup.
pub const DEFAULT_TAB: &str = "Home";

/// Total bar width in logical pixels.
pub const DEFAULT_TAB_BAR_WIDTH: f32 = 332.0;

/// Bar height in logical pixels. Also the reserved placeholder height
/// while the background graphic is loading.
pub const DEFAULT_TAB_BAR_HEIGHT: f32 = 42.0;

pub const DEFAULT_HIGHLIGHT_WIDTH: f32 = 44.0;
pub const DEFAULT_HIGHLIGHT_HEIGHT: f32 = 28.0;

/// Distance from the top of the bar to the highlight.
pub const DEFAULT_HIGHLIGHT_TOP: f32 = 6.0;

pub const DEFAULT_HIGHLIGHT_RADIUS: f32 = 14.0;

/// Alpha of the highlight fill at full opacity (black at 14%).
pub const HIGHLIGHT_FILL_ALPHA: f32 = 0.14;

/// Scale applied to the pressed slot's highlight.
pub const PRESSED_SCALE: f32 = 0.98;

// ==========================================================================
// Highlight Opacity
// ==========================================================================

/// Highlight opacity while a slot is pressed.
pub const OPACITY_PRESSED: f32 = 1.0;

/// Highlight opacity while a slot is hovered or focused.
pub const OPACITY_ACTIVE: f32 = 0.6;

/// Highlight opacity at rest.
pub const OPACITY_IDLE: f32 = 0.0;

// ==========================================================================
// Motion Defaults
// ==========================================================================

/// Transition duration when a highlight becomes more visible.
pub const DEFAULT_TAP_IN_MS: u64 = 110;

/// Transition duration when a highlight fades.
pub const DEFAULT_TAP_OUT_MS: u64 = 140;

/// Upper bound accepted for either duration.
pub const MAX_TRANSITION_MS: u64 = 2_000;

/// Standard easing curve control points, `cubic-bezier(0.2, 0, 0, 1)`.
pub const STANDARD_EASING: (f32, f32, f32, f32) = (0.2, 0.0, 0.0, 1.0);

/// Animation tick interval while a transition runs (~60 Hz).
pub const ANIMATION_TICK_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TAB_BAR_WIDTH > 0.0);
    assert!(DEFAULT_TAB_BAR_HEIGHT > 0.0);
    assert!(!TAB_LABELS.is_empty());

    // Highlight must fit inside one slot and inside the bar height
    assert!(DEFAULT_HIGHLIGHT_WIDTH <= DEFAULT_TAB_BAR_WIDTH / TAB_LABELS.len() as f32);
    assert!(DEFAULT_HIGHLIGHT_TOP + DEFAULT_HIGHLIGHT_HEIGHT <= DEFAULT_TAB_BAR_HEIGHT);
    assert!(DEFAULT_HIGHLIGHT_RADIUS * 2.0 <= DEFAULT_HIGHLIGHT_HEIGHT);

    assert!(OPACITY_PRESSED > OPACITY_ACTIVE);
    assert!(OPACITY_ACTIVE > OPACITY_IDLE);

    // Appearing is faster than fading
    assert!(DEFAULT_TAP_IN_MS < DEFAULT_TAP_OUT_MS);
    assert!(DEFAULT_TAP_OUT_MS <= MAX_TRANSITION_MS);

    assert!(PRESSED_SCALE > 0.0 && PRESSED_SCALE <= 1.0);
};
