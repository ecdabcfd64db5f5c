// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires the balances screen, the tab bar and the font
//! loader together, and keeps the current route (the selected tab label).

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use subscription::focus_message;

use crate::config::{self, defaults, Config};
use crate::fonts::Typefaces;
use crate::i18n::fluent::I18n;
use crate::ui::balances;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::tab_bar;
use crate::ui::theming::AppTheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    route: String,
    tab_bar: tab_bar::State,
    balances: balances::State,
    fonts: Typefaces,
    /// Translation key of a startup warning (e.g. unreadable settings).
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("locale", &self.i18n.current_locale().to_string())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = sizing::SHELL_WIDTH + 2.0 * spacing::XXL;
pub const WINDOW_DEFAULT_HEIGHT: f32 = sizing::SHELL_MIN_HEIGHT + 2.0 * spacing::XXL;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(WINDOW_DEFAULT_WIDTH, 480.0)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings from disk and boots the application.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, warning) = config::load();
        Self::with_config(flags, config, warning)
    }

    /// Boots the application from an already loaded configuration.
    pub fn with_config(
        flags: Flags,
        mut config: Config,
        warning: Option<String>,
    ) -> (Self, Task<Message>) {
        if let Some(url) = flags.nav_url {
            config.assets.nav_background_url = Some(url);
        }

        if flags.write_config {
            match config::save(&config) {
                Ok(path) => tracing::info!(path = %path.display(), "settings written"),
                Err(err) => tracing::warn!(error = %err, "could not write settings"),
            }
        }

        let i18n = I18n::new(flags.lang, &config);
        let theme = AppTheme::new(config.general.theme_mode);
        let labels = defaults::TAB_LABELS.iter().map(|l| (*l).to_string()).collect();
        let (tab_bar, tab_bar_task) = tab_bar::State::new(labels, defaults::DEFAULT_TAB, &config);
        let (balances, balances_task) = balances::State::new(&config.assets);
        let fonts_task = Typefaces::load(&config.assets);

        let app = Self {
            i18n,
            theme,
            route: defaults::DEFAULT_TAB.to_string(),
            tab_bar,
            balances,
            fonts: Typefaces::default(),
            warning,
        };

        let task = Task::batch([
            tab_bar_task.map(Message::TabBar),
            balances_task.map(Message::Balances),
            fonts_task.map(Message::Fonts),
        ]);
        (app, task)
    }

    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabBar(message) => {
                let event = self.tab_bar.update(message, Instant::now());
                self.handle_tab_bar_event(event);
            }
            Message::Tick(now) => {
                self.tab_bar.update(tab_bar::Message::Tick(now), now);
            }
            Message::Balances(message) => self.balances.update(message),
            Message::Fonts(message) => self.fonts.update(message),
        }
        Task::none()
    }

    fn handle_tab_bar_event(&mut self, event: tab_bar::Event) {
        match event {
            tab_bar::Event::Selected(label) => {
                tracing::info!(route = %label, "route changed");
                self.tab_bar.set_selected(label.clone());
                self.route = label;
            }
            tab_bar::Event::None => {}
        }
    }

    pub fn title(&self) -> String {
        let route = self.i18n.tr(&format!("tab-{}", self.route.to_lowercase()));
        self.i18n
            .tr_with_args("window-title-route", &[("route", route.as_str())])
    }

    pub fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme: &self.theme,
            fonts: self.fonts,
            balances: &self.balances,
            tab_bar: &self.tab_bar,
            warning: self.warning.as_deref().map(|key| self.i18n.tr(key)),
            now: Instant::now(),
        })
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let keyboard_sub = subscription::create_keyboard_subscription();
        let tick_sub = subscription::create_tick_subscription(self.tab_bar.is_animating(Instant::now()));
        Subscription::batch([keyboard_sub, tick_sub])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let flags = Flags {
            lang: Some("en-US".to_string()),
            ..Flags::default()
        };
        let (app, _task) = App::with_config(flags, Config::default(), None);
        app
    }

    fn click(app: &mut App, index: usize) {
        let _ = app.update(Message::TabBar(tab_bar::Message::PointerDown(index)));
        let _ = app.update(Message::TabBar(tab_bar::Message::PointerUp(index)));
    }

    #[test]
    fn starts_on_home() {
        let app = app();
        assert_eq!(app.route(), "Home");
        assert_eq!(app.title(), "Home - Payo");
    }

    #[test]
    fn clicking_a_tab_changes_route_and_title() {
        let mut app = app();
        click(&mut app, 1);
        assert_eq!(app.route(), "Activity");
        assert_eq!(app.title(), "Activity - Payo");
        assert_eq!(app.tab_bar.selected(), "Activity");
    }

    #[test]
    fn keyboard_activation_changes_route() {
        let mut app = app();
        for _ in 0..3 {
            let _ = app.update(Message::TabBar(tab_bar::Message::FocusNext));
        }
        let _ = app.update(Message::TabBar(tab_bar::Message::Activate));
        assert_eq!(app.route(), "Actions");
    }

    #[test]
    fn nav_url_flag_overrides_background() {
        let flags = Flags {
            nav_url: Some("https://cdn.example/nav.svg".to_string()),
            ..Flags::default()
        };
        let (app, _task) = App::with_config(flags, Config::default(), None);
        assert_eq!(
            app.tab_bar.background().loader().url(),
            "https://cdn.example/nav.svg"
        );
    }

    #[test]
    fn french_title_is_translated() {
        let flags = Flags {
            lang: Some("fr".to_string()),
            ..Flags::default()
        };
        let (app, _task) = App::with_config(flags, Config::default(), None);
        assert_eq!(app.title(), "Accueil - Payo");
    }

    #[test]
    fn view_renders_with_warning() {
        let flags = Flags::default();
        let warning = Some("warning-config-load-error".to_string());
        let (app, _task) = App::with_config(flags, Config::default(), warning);
        let _element = app.view();
    }

    #[test]
    fn explicit_dark_mode_maps_to_dark_theme() {
        let mut config = Config::default();
        config.general.theme_mode = crate::ui::theming::ThemeMode::Dark;
        let (app, _task) = App::with_config(Flags::default(), config, None);
        assert_eq!(app.theme(), Theme::Dark);
    }
}
