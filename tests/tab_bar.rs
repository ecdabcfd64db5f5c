// SPDX-License-Identifier: MPL-2.0
//! Tab bar behavior through its public interface.

use payo::config::defaults::TAB_LABELS;
use payo::config::{Config, TabBarConfig};
use payo::ui::tab_bar::{BarLayout, Event, HighlightGeometry, Message, State};
use std::time::{Duration, Instant};

fn labels() -> Vec<String> {
    TAB_LABELS.iter().map(|l| (*l).to_string()).collect()
}

fn bar(config: &Config) -> State {
    let (state, _task) = State::new(labels(), "Home", config);
    state
}

#[test]
fn default_layout_matches_mockup() {
    let state = bar(&Config::default());
    let layout = state.layout();
    assert_eq!(layout.width(), 332.0);
    assert_eq!(layout.slot_width(), 83.0);
    assert_eq!(layout.highlight_left_in_slot(), 19.5);
}

#[test]
fn configured_width_changes_slots() {
    let config = Config {
        tab_bar: TabBarConfig {
            width: Some(400.0),
            ..TabBarConfig::default()
        },
        ..Config::default()
    };
    let state = bar(&config);
    assert_eq!(state.layout().slot_width(), 100.0);
    assert_eq!(state.slot_views(Instant::now())[3].bounds.x, 300.0);
}

#[test]
fn click_on_every_slot_selects_its_label() {
    let now = Instant::now();
    for (index, label) in TAB_LABELS.iter().enumerate() {
        let mut state = bar(&Config::default());
        let mut selections = Vec::new();
        for message in [Message::PointerDown(index), Message::PointerUp(index)] {
            if let Event::Selected(label) = state.update(message, now) {
                selections.push(label);
            }
        }
        assert_eq!(selections, vec![(*label).to_string()]);
    }
}

#[test]
fn drag_between_slots_selects_nothing() {
    let now = Instant::now();
    let mut state = bar(&Config::default());
    assert_eq!(state.update(Message::PointerDown(0), now), Event::None);
    assert_eq!(state.update(Message::Exited(0), now), Event::None);
    assert_eq!(state.update(Message::Entered(1), now), Event::None);
    assert_eq!(state.update(Message::PointerUp(1), now), Event::None);
}

#[test]
fn at_most_one_slot_is_pressed() {
    let now = Instant::now();
    let mut state = bar(&Config::default());
    state.update(Message::PointerDown(1), now);
    state.update(Message::PointerDown(2), now);
    let pressed = state
        .slot_views(now)
        .iter()
        .filter(|slot| slot.flags.pressed)
        .count();
    assert_eq!(pressed, 1);
}

#[test]
fn opacity_follows_interaction() {
    let now = Instant::now();
    let mut state = bar(&Config::default());
    state.update(Message::Entered(0), now);
    state.update(Message::FocusNext, now);
    state.update(Message::FocusNext, now);
    state.update(Message::PointerDown(2), now);

    let targets: Vec<f32> = state
        .slot_views(now)
        .iter()
        .map(|slot| slot.target_opacity)
        .collect();
    assert_eq!(targets, vec![0.6, 0.6, 1.0, 0.0]);

    let settled = now + Duration::from_secs(1);
    assert!(!state.is_animating(settled));
    let painted: Vec<f32> = state
        .slot_views(settled)
        .iter()
        .map(|slot| slot.opacity)
        .collect();
    assert_eq!(painted, targets);
}

#[test]
fn configured_timing_is_respected() {
    let mut config = Config::default();
    config.motion.tap_in_ms = Some(300);
    config.motion.tap_out_ms = Some(400);
    let now = Instant::now();
    let mut state = bar(&config);
    state.update(Message::Entered(3), now);
    assert!(state.is_animating(now + Duration::from_millis(250)));
    assert!(!state.is_animating(now + Duration::from_millis(300)));
}

#[test]
fn highlight_never_overflows_slot_when_it_fits() {
    for count in 1..=8 {
        for width in [120.0_f32, 332.0, 500.0] {
            let layout = BarLayout::new(
                width,
                42.0,
                count,
                HighlightGeometry {
                    width: 10.0,
                    height: 28.0,
                    top: 6.0,
                    radius: 14.0,
                },
            );
            for index in 0..count {
                let slot = layout.slot_bounds(index);
                let highlight = layout.highlight_rect(index, false);
                assert!(highlight.x >= slot.x - 1e-3);
                assert!(highlight.x + highlight.width <= slot.x + slot.width + 1e-3);
            }
        }
    }
}

#[test]
fn background_message_round_trips_through_bar() {
    let now = Instant::now();
    let mut state = bar(&Config::default());
    let (_, ticket) = payo::asset::AssetLoader::new(state.background().loader().url());
    state.update(
        Message::Background(payo::ui::remote_svg::Message::Fetched(ticket, Ok("<svg/>".into()))),
        now,
    );
    assert!(state.background().loader().is_loaded());
}
