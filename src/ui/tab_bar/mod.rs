// SPDX-License-Identifier: MPL-2.0
//! Bottom navigation bar with pressed/hover/focus highlights.
//!
//! The bar draws a remote background graphic and overlays one transparent
//! hit target per slot. Each slot carries a rounded highlight whose opacity
//! follows the slot's interaction flags through an eased transition.
//!
//! Clicking a slot (press and release without leaving it) or activating the
//! keyboard-focused slot emits [`Event::Selected`] with the slot's label.
//! That event is the bar's only external effect.

pub mod interaction;
pub mod layout;
pub mod transition;

pub use interaction::{InteractionState, SlotFlags};
pub use layout::{BarLayout, HighlightGeometry};
pub use transition::{CubicBezier, HighlightTransition, Timing};

use crate::config::defaults::{HIGHLIGHT_FILL_ALPHA, OPACITY_IDLE};
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::palette;
use crate::ui::remote_svg::{self, RemoteSvg};
use crate::ui::theming::ColorScheme;
use iced::widget::{container, mouse_area, Column, Container, Row, Space, Stack};
use iced::{mouse, Border, Color, Element, Length, Rectangle, Size, Task, Theme};
use std::time::Instant;

/// Contextual data needed to render the tab bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    /// Instant used to sample running transitions.
    pub now: Instant,
}

#[derive(Debug, Clone)]
pub enum Message {
    PointerDown(usize),
    PointerUp(usize),
    /// Pointer entered a slot.
    Entered(usize),
    /// Pointer left a slot; cancels a press on it.
    Exited(usize),
    FocusNext,
    FocusPrevious,
    Blur,
    /// Selects the keyboard-focused slot.
    Activate,
    Tick(Instant),
    Background(remote_svg::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Selected(String),
}

/// Immutable per-slot render data.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotView<'a> {
    pub index: usize,
    pub label: &'a str,
    /// Hit region, relative to the bar.
    pub bounds: Rectangle,
    /// Highlight rectangle, relative to the bar.
    pub highlight: Rectangle,
    pub flags: SlotFlags,
    /// Opacity the highlight is heading to.
    pub target_opacity: f32,
    /// Opacity painted at the sampled instant.
    pub opacity: f32,
}

pub struct State {
    labels: Vec<String>,
    selected: String,
    layout: BarLayout,
    timing: Timing,
    interaction: InteractionState,
    transitions: Vec<HighlightTransition>,
    background: RemoteSvg,
}

impl State {
    /// Creates the bar and the task fetching its background graphic.
    pub fn new(
        labels: Vec<String>,
        selected: impl Into<String>,
        config: &Config,
    ) -> (Self, Task<Message>) {
        let now = Instant::now();
        let layout = BarLayout::from_config(&config.tab_bar, labels.len());
        let (background, fetch) = RemoteSvg::new(
            config.assets.nav_background_url(),
            Size::new(layout.width(), layout.height()),
        );
        let transitions = labels
            .iter()
            .map(|_| HighlightTransition::settled(OPACITY_IDLE, now))
            .collect();

        let state = Self {
            labels,
            selected: selected.into(),
            layout,
            timing: Timing::from_config(&config.motion),
            interaction: InteractionState::new(),
            transitions,
            background,
        };
        (state, fetch.map(Message::Background))
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Records the label the parent considers current.
    pub fn set_selected(&mut self, label: impl Into<String>) {
        self.selected = label.into();
    }

    #[must_use]
    pub fn layout(&self) -> &BarLayout {
        &self.layout
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    #[must_use]
    pub fn background(&self) -> &RemoteSvg {
        &self.background
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        let event = match message {
            Message::PointerDown(index) if self.has_slot(index) => {
                self.interaction.pointer_down(index);
                Event::None
            }
            Message::PointerUp(index) if self.has_slot(index) => {
                if self.interaction.pointer_up(index) {
                    self.select(index)
                } else {
                    Event::None
                }
            }
            Message::Entered(index) if self.has_slot(index) => {
                self.interaction.mouse_enter(index);
                Event::None
            }
            Message::Exited(index) if self.has_slot(index) => {
                self.interaction.pointer_leave(index);
                self.interaction.mouse_leave(index);
                Event::None
            }
            Message::FocusNext => {
                self.focus_next();
                Event::None
            }
            Message::FocusPrevious => {
                self.focus_previous();
                Event::None
            }
            Message::Blur => {
                self.interaction.clear_focus();
                Event::None
            }
            Message::Activate => match self.interaction.focused() {
                Some(index) => self.select(index),
                None => Event::None,
            },
            Message::Background(message) => {
                self.background.update(message);
                Event::None
            }
            Message::Tick(_)
            | Message::PointerDown(_)
            | Message::PointerUp(_)
            | Message::Entered(_)
            | Message::Exited(_) => Event::None,
        };

        self.sync_transitions(now);
        event
    }

    /// Whether any highlight is still animating at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.transitions.iter().any(|t| t.is_running(now))
    }

    #[must_use]
    pub fn slot_views(&self, now: Instant) -> Vec<SlotView<'_>> {
        self.labels
            .iter()
            .zip(&self.transitions)
            .enumerate()
            .map(|(index, (label, transition))| {
                let flags = self.interaction.slot_flags(index);
                SlotView {
                    index,
                    label,
                    bounds: self.layout.slot_bounds(index),
                    highlight: self.layout.highlight_rect(index, flags.pressed),
                    flags,
                    target_opacity: flags.opacity(),
                    opacity: transition.value_at(now),
                }
            })
            .collect()
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let background = self
            .background
            .view(ctx.i18n, ctx.colors)
            .map(Message::Background);

        let radius = self.layout.highlight().radius;
        let slots = self
            .slot_views(ctx.now)
            .iter()
            .fold(Row::new(), |row, slot| row.push(slot_target(slot, radius)));

        Stack::new()
            .push(background)
            .push(slots)
            .width(Length::Fixed(self.layout.width()))
            .height(Length::Fixed(self.layout.height()))
            .into()
    }

    fn has_slot(&self, index: usize) -> bool {
        index < self.labels.len()
    }

    fn select(&mut self, index: usize) -> Event {
        match self.labels.get(index) {
            Some(label) => {
                tracing::debug!(label = %label, "tab selected");
                Event::Selected(label.clone())
            }
            None => Event::None,
        }
    }

    /// Tab order: none, first, ..., last, none.
    fn focus_next(&mut self) {
        let count = self.labels.len();
        match self.interaction.focused() {
            None if count > 0 => self.interaction.focus(0),
            Some(index) if index + 1 < count => self.interaction.focus(index + 1),
            _ => self.interaction.clear_focus(),
        }
    }

    fn focus_previous(&mut self) {
        let count = self.labels.len();
        match self.interaction.focused() {
            None if count > 0 => self.interaction.focus(count - 1),
            Some(index) if index > 0 => self.interaction.focus(index - 1),
            _ => self.interaction.clear_focus(),
        }
    }

    fn sync_transitions(&mut self, now: Instant) {
        for (index, transition) in self.transitions.iter_mut().enumerate() {
            let target = self.interaction.highlight_opacity(index);
            transition.retarget(target, now, &self.timing);
        }
    }
}

/// Transparent hit target holding the slot's highlight.
fn slot_target<'a>(slot: &SlotView<'_>, radius: f32) -> Element<'a, Message> {
    let index = slot.index;
    let fill = Color {
        a: HIGHLIGHT_FILL_ALPHA * slot.opacity,
        ..palette::BLACK
    };

    let pill = Container::new(Space::new())
        .width(Length::Fixed(slot.highlight.width))
        .height(Length::Fixed(slot.highlight.height))
        .style(move |_theme: &Theme| container::Style {
            background: Some(fill.into()),
            border: Border {
                radius: radius.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let positioned = Column::new()
        .push(Space::new().height(Length::Fixed(slot.highlight.y.max(0.0))))
        .push(
            Row::new()
                .push(Space::new().width(Length::Fixed(
                    (slot.highlight.x - slot.bounds.x).max(0.0),
                )))
                .push(pill),
        );

    let target = Container::new(positioned)
        .width(Length::Fixed(slot.bounds.width))
        .height(Length::Fixed(slot.bounds.height))
        .clip(true);

    mouse_area(target)
        .on_press(Message::PointerDown(index))
        .on_release(Message::PointerUp(index))
        .on_enter(Message::Entered(index))
        .on_exit(Message::Exited(index))
        .interaction(mouse::Interaction::Pointer)
        .into()
}
