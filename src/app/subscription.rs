// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard focus keys are routed to the tab bar. The animation tick only
//! runs while a highlight transition is in progress.

use super::Message;
use crate::config::defaults::ANIMATION_TICK_MS;
use crate::ui::tab_bar;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes uncaptured key presses to the tab bar's focus channel.
pub fn create_keyboard_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if matches!(status, event::Status::Captured) {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                focus_message(&key, modifiers).map(Message::TabBar)
            }
            _ => None,
        }
    })
}

/// Maps a key press to a focus-channel message.
///
/// Tab and Shift+Tab move focus, Escape blurs, Enter and Space activate.
pub fn focus_message(key: &Key, modifiers: Modifiers) -> Option<tab_bar::Message> {
    match key {
        Key::Named(Named::Tab) if modifiers.shift() => Some(tab_bar::Message::FocusPrevious),
        Key::Named(Named::Tab) => Some(tab_bar::Message::FocusNext),
        Key::Named(Named::Escape) => Some(tab_bar::Message::Blur),
        Key::Named(Named::Enter | Named::Space) => Some(tab_bar::Message::Activate),
        _ => None,
    }
}

/// Creates the animation tick subscription.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
