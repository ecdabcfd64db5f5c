// SPDX-License-Identifier: MPL-2.0
//! SVG graphic fetched from a URL.
//!
//! Wraps an [`AssetLoader`] and renders its three states: an empty
//! placeholder of the reserved size while pending, inline error text when the
//! request failed, and the markup itself once loaded.

use crate::asset::{fetch, AssetLoader, AssetResult, FetchError, FetchTicket};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::typography;
use crate::ui::theming::ColorScheme;
use iced::widget::{svg, Container, Space, Text};
use iced::{Element, Length, Size, Task};

#[derive(Debug, Clone)]
pub enum Message {
    Fetched(FetchTicket, Result<String, FetchError>),
}

#[derive(Debug, Clone)]
pub struct RemoteSvg {
    loader: AssetLoader,
    handle: Option<svg::Handle>,
    size: Size,
}

impl RemoteSvg {
    /// Mounts the graphic and returns the task fetching it.
    pub fn new(url: impl Into<String>, size: Size) -> (Self, Task<Message>) {
        let (loader, ticket) = AssetLoader::new(url);
        let graphic = Self {
            loader,
            handle: None,
            size,
        };
        (graphic, request(ticket))
    }

    /// Switches to another URL. Returns [`Task::none`] if the URL is unchanged.
    pub fn set_url(&mut self, url: impl Into<String>) -> Task<Message> {
        match self.loader.set_url(url) {
            Some(ticket) => {
                self.handle = None;
                request(ticket)
            }
            None => Task::none(),
        }
    }

    pub fn teardown(&mut self) {
        self.loader.teardown();
    }

    /// Applies a fetch completion. Returns `true` if the state changed.
    pub fn update(&mut self, message: Message) -> bool {
        match message {
            Message::Fetched(ticket, outcome) => {
                if !self.loader.complete(&ticket, outcome) {
                    return false;
                }
                if let AssetResult::Loaded(markup) = self.loader.result() {
                    self.handle = Some(svg::Handle::from_memory(markup.clone().into_bytes()));
                }
                true
            }
        }
    }

    #[must_use]
    pub fn loader(&self) -> &AssetLoader {
        &self.loader
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Inline text shown when the request failed, naming the URL and reason.
    #[must_use]
    pub fn failure_message(&self, i18n: &I18n) -> Option<String> {
        match self.loader.result() {
            AssetResult::Failed(reason) => Some(i18n.tr_with_args(
                "asset-load-failed",
                &[("url", self.loader.url()), ("reason", reason.as_str())],
            )),
            _ => None,
        }
    }

    /// Size of the empty box drawn while nothing can be rendered yet.
    #[must_use]
    pub fn placeholder_size(&self) -> Option<Size> {
        match (self.loader.result(), &self.handle) {
            (AssetResult::Loaded(_), Some(_)) | (AssetResult::Failed(_), _) => None,
            _ => Some(self.size),
        }
    }

    pub fn view<'a>(&'a self, i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
        let width = Length::Fixed(self.size.width);
        let height = Length::Fixed(self.size.height);

        if let Some(message) = self.failure_message(i18n) {
            return Container::new(
                Text::new(message)
                    .size(typography::CHIP)
                    .color(colors.failure_text),
            )
            .width(width)
            .into();
        }

        match (&self.handle, self.placeholder_size()) {
            (Some(handle), None) => svg::Svg::new(handle.clone())
                .width(width)
                .height(height)
                .into(),
            (_, reserved) => {
                let reserved = reserved.unwrap_or(self.size);
                Space::new()
                    .width(Length::Fixed(reserved.width))
                    .height(Length::Fixed(reserved.height))
                    .into()
            }
        }
    }
}

/// Builds the fetch task for one ticket. The ticket travels back with the
/// outcome so stale completions can be recognised.
fn request(ticket: FetchTicket) -> Task<Message> {
    let url = ticket.url().to_string();
    Task::perform(
        async move {
            let client = fetch::client()?;
            fetch::fetch_text(&client, &url).await
        },
        move |outcome| Message::Fetched(ticket, outcome),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://cdn.example/flag.svg";

    #[test]
    fn starts_pending_without_handle() {
        let (graphic, _task) = RemoteSvg::new(URL, Size::new(32.0, 32.0));
        assert!(graphic.loader().is_pending());
        assert!(graphic.handle.is_none());
        assert_eq!(graphic.size(), Size::new(32.0, 32.0));
    }

    #[test]
    fn stale_completion_is_ignored_after_url_change() {
        let (mut graphic, _task) = RemoteSvg::new(URL, Size::new(32.0, 32.0));
        let (_, first) = AssetLoader::new(URL);
        let _task = graphic.set_url("https://cdn.example/other.svg");

        let changed = graphic.update(Message::Fetched(first, Ok("<svg/>".into())));
        assert!(!changed);
        assert!(graphic.loader().is_pending());
    }

    #[test]
    fn teardown_blocks_completion() {
        let (mut graphic, _task) = RemoteSvg::new(URL, Size::new(32.0, 32.0));
        let (_, ticket) = AssetLoader::new(URL);
        graphic.teardown();
        assert!(!graphic.update(Message::Fetched(ticket, Ok("<svg/>".into()))));
        assert!(graphic.handle.is_none());
    }

    #[test]
    fn loaded_markup_creates_handle() {
        let (mut graphic, _task) = RemoteSvg::new(URL, Size::new(32.0, 32.0));
        let (_, ticket) = AssetLoader::new(URL);
        assert!(graphic.update(Message::Fetched(ticket, Ok("<svg/>".into()))));
        assert!(graphic.loader().is_loaded());
        assert!(graphic.handle.is_some());
    }

    #[test]
    fn failure_keeps_reason() {
        let (mut graphic, _task) = RemoteSvg::new(URL, Size::new(32.0, 32.0));
        let (_, ticket) = AssetLoader::new(URL);
        let outcome = Err(FetchError::Status {
            code: 404,
            reason: Some("Not Found".into()),
        });
        assert!(graphic.update(Message::Fetched(ticket, outcome)));
        assert_eq!(
            graphic.loader().result(),
            &AssetResult::Failed("HTTP 404 Not Found".into())
        );
    }

    #[test]
    fn unchanged_url_keeps_request_alive() {
        let (mut graphic, _task) = RemoteSvg::new(URL, Size::new(32.0, 32.0));
        let _task = graphic.set_url(URL);
        let (_, initial) = AssetLoader::new(URL);
        assert!(graphic.update(Message::Fetched(initial, Ok("<svg/>".into()))));
    }

    #[test]
    fn pending_reserves_configured_size() {
        let i18n = I18n::default();
        let (graphic, _task) = RemoteSvg::new(URL, Size::new(48.0, 24.0));
        assert_eq!(graphic.placeholder_size(), Some(Size::new(48.0, 24.0)));
        assert!(graphic.failure_message(&i18n).is_none());
    }

    #[test]
    fn failure_message_names_url_and_reason() {
        let i18n = I18n::default();
        let (mut graphic, _task) = RemoteSvg::new(URL, Size::new(32.0, 32.0));
        let (_, ticket) = AssetLoader::new(URL);
        let outcome = Err(FetchError::Status {
            code: 404,
            reason: Some("Not Found".into()),
        });
        graphic.update(Message::Fetched(ticket, outcome));

        let message = graphic.failure_message(&i18n).expect("failed state has a message");
        assert!(message.contains(URL));
        assert!(message.contains("404"));
        assert_eq!(graphic.placeholder_size(), None);
    }

    #[test]
    fn loaded_state_has_no_placeholder() {
        let (mut graphic, _task) = RemoteSvg::new(URL, Size::new(32.0, 32.0));
        let (_, ticket) = AssetLoader::new(URL);
        graphic.update(Message::Fetched(ticket, Ok("<svg/>".into())));
        assert_eq!(graphic.placeholder_size(), None);
    }

    #[test]
    fn view_renders_every_state() {
        let i18n = I18n::default();
        let colors = ColorScheme::light();

        let (mut graphic, _task) = RemoteSvg::new(URL, Size::new(32.0, 32.0));
        {
            let _pending = graphic.view(&i18n, &colors);
        }

        let (_, ticket) = AssetLoader::new(URL);
        graphic.update(Message::Fetched(ticket, Err(FetchError::Transport("refused".into()))));
        let _failed = graphic.view(&i18n, &colors);
    }
}
