// SPDX-License-Identifier: MPL-2.0
//! Fixed grid geometry for the tab bar.
//!
//! Slots split the bar into equal columns. The highlight is centered
//! horizontally in its slot and offset from the top of the bar by a fixed
//! amount. All values are in logical pixels.

use crate::config::defaults::PRESSED_SCALE;
use crate::config::TabBarConfig;
use iced::Rectangle;

/// Size and placement of the highlight pill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightGeometry {
    pub width: f32,
    pub height: f32,
    pub top: f32,
    pub radius: f32,
}

impl HighlightGeometry {
    #[must_use]
    pub fn from_config(config: &TabBarConfig) -> Self {
        Self {
            width: config.highlight_width(),
            height: config.highlight_height(),
            top: config.highlight_top(),
            radius: config.highlight_radius(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    width: f32,
    height: f32,
    slot_count: usize,
    highlight: HighlightGeometry,
}

impl BarLayout {
    /// Creates a layout. A zero slot count is treated as a single slot.
    #[must_use]
    pub fn new(width: f32, height: f32, slot_count: usize, highlight: HighlightGeometry) -> Self {
        Self {
            width,
            height,
            slot_count: slot_count.max(1),
            highlight,
        }
    }

    #[must_use]
    pub fn from_config(config: &TabBarConfig, slot_count: usize) -> Self {
        Self::new(
            config.width(),
            config.height(),
            slot_count,
            HighlightGeometry::from_config(config),
        )
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    #[must_use]
    pub fn highlight(&self) -> HighlightGeometry {
        self.highlight
    }

    #[must_use]
    pub fn slot_width(&self) -> f32 {
        self.width / self.slot_count as f32
    }

    #[must_use]
    pub fn slot_left(&self, index: usize) -> f32 {
        index as f32 * self.slot_width()
    }

    /// Hit region of a slot, relative to the bar's top-left corner.
    #[must_use]
    pub fn slot_bounds(&self, index: usize) -> Rectangle {
        Rectangle {
            x: self.slot_left(index),
            y: 0.0,
            width: self.slot_width(),
            height: self.height,
        }
    }

    /// Horizontal offset of the highlight inside its slot.
    ///
    /// Negative when the highlight is wider than the slot.
    #[must_use]
    pub fn highlight_left_in_slot(&self) -> f32 {
        (self.slot_width() - self.highlight.width) / 2.0
    }

    /// Highlight rectangle for a slot, relative to the bar.
    ///
    /// A pressed highlight shrinks around its own center.
    #[must_use]
    pub fn highlight_rect(&self, index: usize, pressed: bool) -> Rectangle {
        let rest = Rectangle {
            x: self.slot_left(index) + self.highlight_left_in_slot(),
            y: self.highlight.top,
            width: self.highlight.width,
            height: self.highlight.height,
        };

        if !pressed {
            return rest;
        }

        let width = rest.width * PRESSED_SCALE;
        let height = rest.height * PRESSED_SCALE;
        Rectangle {
            x: rest.x + (rest.width - width) / 2.0,
            y: rest.y + (rest.height - height) / 2.0,
            width,
            height,
        }
    }

    /// Returns the slot under a horizontal position, if any.
    #[must_use]
    pub fn slot_at(&self, x: f32) -> Option<usize> {
        if !(0.0..self.width).contains(&x) {
            return None;
        }
        let index = (x / self.slot_width()).floor() as usize;
        Some(index.min(self.slot_count - 1))
    }
}
