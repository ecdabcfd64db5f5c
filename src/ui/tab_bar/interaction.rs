// SPDX-License-Identifier: MPL-2.0
//! Pointer and focus tracking for tab bar slots.
//!
//! Three independent channels are tracked: the pressed slot (pointer held
//! down), the hovered slot (mouse over) and the focused slot (keyboard).
//! Each channel holds at most one index.

use crate::config::defaults::{OPACITY_ACTIVE, OPACITY_IDLE, OPACITY_PRESSED};

/// Interaction flags of a single slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotFlags {
    pub pressed: bool,
    pub hovered: bool,
    pub focused: bool,
}

impl SlotFlags {
    /// Target opacity of the slot's highlight.
    #[must_use]
    pub fn opacity(self) -> f32 {
        if self.pressed {
            OPACITY_PRESSED
        } else if self.hovered || self.focused {
            OPACITY_ACTIVE
        } else {
            OPACITY_IDLE
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    pressed: Option<usize>,
    hovered: Option<usize>,
    focused: Option<usize>,
}

impl InteractionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_down(&mut self, index: usize) {
        self.pressed = Some(index);
    }

    /// Releases the pointer over a slot.
    ///
    /// Returns `true` when the release completes a click, i.e. the same
    /// slot was pressed and the press was not cancelled by leaving it.
    pub fn pointer_up(&mut self, index: usize) -> bool {
        let is_click = self.pressed == Some(index);
        self.pressed = None;
        is_click
    }

    /// Pointer left a slot; a press on that slot is cancelled.
    pub fn pointer_leave(&mut self, index: usize) {
        if self.pressed == Some(index) {
            self.pressed = None;
        }
    }

    pub fn mouse_enter(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    pub fn mouse_leave(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        }
    }

    pub fn focus(&mut self, index: usize) {
        self.focused = Some(index);
    }

    pub fn blur(&mut self, index: usize) {
        if self.focused == Some(index) {
            self.focused = None;
        }
    }

    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    #[must_use]
    pub fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    #[must_use]
    pub fn slot_flags(&self, index: usize) -> SlotFlags {
        SlotFlags {
            pressed: self.pressed == Some(index),
            hovered: self.hovered == Some(index),
            focused: self.focused == Some(index),
        }
    }

    #[must_use]
    pub fn highlight_opacity(&self, index: usize) -> f32 {
        self.slot_flags(index).opacity()
    }
}
