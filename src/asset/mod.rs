// SPDX-License-Identifier: MPL-2.0
//! Remote asset loading with a teardown-safe state machine.
//!
//! An [`AssetLoader`] owns the three-state [`AssetResult`] for one URL. Each
//! request is identified by a [`FetchTicket`] carrying the loader's
//! generation at the time the request began. Changing the URL or tearing the
//! loader down bumps the generation, so a completion that arrives late is
//! recognised as stale and dropped instead of overwriting newer state.
//!
//! # Trusted content
//!
//! Loaded markup is kept byte-for-byte and handed to the renderer verbatim.
//! Assets come from a fixed, known origin configured by the application, and
//! the loader deliberately performs no sanitization.
//!
//! # Example
//!
//! ```
//! use payo::asset::{AssetLoader, AssetResult};
//!
//! let (mut loader, ticket) = AssetLoader::new("https://example.com/bar.svg");
//! assert!(loader.is_pending());
//!
//! assert!(loader.complete(&ticket, Ok("<svg/>".to_string())));
//! assert_eq!(loader.result(), &AssetResult::Loaded("<svg/>".to_string()));
//! ```

pub mod fetch;

pub use fetch::FetchError;

/// Outcome of an asset request as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AssetResult {
    /// The request is in flight.
    #[default]
    Pending,
    /// The asset text, unmodified.
    Loaded(String),
    /// Human-readable failure reason (status code or transport cause).
    Failed(String),
}

/// Handle identifying one in-flight request.
///
/// Returned when a request begins and passed back with its completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    url: String,
    generation: u64,
}

impl FetchTicket {
    /// URL this request targets.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Loader generation the request belongs to.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// State machine for a single remote asset.
#[derive(Debug, Clone)]
pub struct AssetLoader {
    url: String,
    generation: u64,
    torn_down: bool,
    result: AssetResult,
}

impl AssetLoader {
    /// Mounts a loader for `url` and returns the ticket for its first request.
    pub fn new(url: impl Into<String>) -> (Self, FetchTicket) {
        let loader = Self {
            url: url.into(),
            generation: 0,
            torn_down: false,
            result: AssetResult::Pending,
        };
        let ticket = loader.ticket();
        (loader, ticket)
    }

    /// Points the loader at a new URL.
    ///
    /// Returns a fresh ticket when a new request must be issued. The previous
    /// request, if still in flight, is invalidated. Setting the current URL on
    /// a live loader is a no-op and returns `None`.
    pub fn set_url(&mut self, url: impl Into<String>) -> Option<FetchTicket> {
        let url = url.into();
        if url == self.url && !self.torn_down {
            return None;
        }

        self.generation += 1;
        self.url = url;
        self.torn_down = false;
        self.result = AssetResult::Pending;
        tracing::debug!(url = %self.url, generation = self.generation, "asset url changed");
        Some(self.ticket())
    }

    /// Ends the loader's lifetime. Completions arriving afterwards are ignored.
    pub fn teardown(&mut self) {
        self.generation += 1;
        self.torn_down = true;
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// Returns `true` when the state transitioned. Stale tickets, completions
    /// after teardown and repeated completions leave the state untouched.
    pub fn complete(&mut self, ticket: &FetchTicket, outcome: Result<String, FetchError>) -> bool {
        if self.torn_down || ticket.generation != self.generation {
            tracing::debug!(url = %ticket.url, "discarding stale asset result");
            return false;
        }
        if !self.is_pending() {
            return false;
        }

        self.result = match outcome {
            Ok(content) => {
                tracing::debug!(url = %self.url, bytes = content.len(), "asset loaded");
                AssetResult::Loaded(content)
            }
            Err(err) => {
                tracing::warn!(url = %self.url, error = %err, "asset failed to load");
                AssetResult::Failed(err.to_string())
            }
        };
        true
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn result(&self) -> &AssetResult {
        &self.result
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.result, AssetResult::Pending)
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self.result, AssetResult::Loaded(_))
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self.result, AssetResult::Failed(_))
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn ticket(&self) -> FetchTicket {
        FetchTicket {
            url: self.url.clone(),
            generation: self.generation,
        }
    }
}
