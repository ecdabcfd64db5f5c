// SPDX-License-Identifier: MPL-2.0
//! Remote typeface loading.
//!
//! Both weights of the brand family are fetched at startup and registered
//! with Iced. Text falls back to the default font until a weight has been
//! registered, and stays on it if loading fails.

use crate::asset::{fetch, FetchError};
use crate::config::defaults::FONT_FAMILY;
use crate::config::AssetsConfig;
use iced::font::Weight;
use iced::{Font, Task};
use std::fmt;

/// Brand family at regular weight.
pub const REGULAR: Font = Font::with_name(FONT_FAMILY);

/// Brand family at demi-bold weight.
pub const DEMI: Font = Font {
    weight: Weight::Semibold,
    ..REGULAR
};

/// Default font at demi-bold weight, used before the brand family loads.
const FALLBACK_DEMI: Font = Font {
    weight: Weight::Semibold,
    ..Font::DEFAULT
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Regular,
    Demi,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FontError {
    Fetch(FetchError),
    /// The bytes were fetched but Iced rejected them.
    Register,
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::Fetch(err) => write!(f, "{err}"),
            FontError::Register => write!(f, "font data could not be registered"),
        }
    }
}

impl std::error::Error for FontError {}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Face, Result<(), FontError>),
}

/// Which weights are ready to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Typefaces {
    regular: bool,
    demi: bool,
}

impl Typefaces {
    /// Starts fetching both weights.
    pub fn load(assets: &AssetsConfig) -> Task<Message> {
        Task::batch([
            load_face(Face::Regular, assets.font_regular_url().to_string()),
            load_face(Face::Demi, assets.font_demi_url().to_string()),
        ])
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Loaded(face, Ok(())) => {
                tracing::debug!(?face, "font registered");
                match face {
                    Face::Regular => self.regular = true,
                    Face::Demi => self.demi = true,
                }
            }
            Message::Loaded(face, Err(err)) => {
                tracing::warn!(?face, error = %err, "font unavailable, using fallback");
            }
        }
    }

    #[must_use]
    pub fn regular(&self) -> Font {
        if self.regular {
            REGULAR
        } else {
            Font::DEFAULT
        }
    }

    #[must_use]
    pub fn demi(&self) -> Font {
        if self.demi {
            DEMI
        } else {
            FALLBACK_DEMI
        }
    }
}

fn load_face(face: Face, url: String) -> Task<Message> {
    Task::perform(
        async move {
            let client = fetch::client()?;
            fetch::fetch_bytes(&client, &url).await
        },
        std::convert::identity,
    )
    .then(move |outcome| match outcome {
        Ok(bytes) => iced::font::load(bytes)
            .map(move |registered| Message::Loaded(face, registered.map_err(|_| FontError::Register))),
        Err(err) => Task::done(Message::Loaded(face, Err(FontError::Fetch(err)))),
    })
}
