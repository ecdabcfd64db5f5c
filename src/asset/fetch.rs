// SPDX-License-Identifier: MPL-2.0
//! HTTP retrieval of remote assets.
//!
//! Every call issues exactly one GET request: no retry, no timeout and no
//! response caching (`Cache-Control: no-store` is sent on each request).
//! Any non-2xx status is reported as [`FetchError::Status`], which callers
//! treat exactly like a transport failure.

use reqwest::header::CACHE_CONTROL;
use reqwest::{Client, Response, Url};
use std::fmt;

/// User agent sent with every asset request.
pub const USER_AGENT: &str = concat!("Payo/", env!("CARGO_PKG_VERSION"));

/// Maximum number of redirects followed before giving up.
const MAX_REDIRECTS: usize = 10;

/// Errors that can occur while fetching a remote asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The URL could not be parsed.
    InvalidUrl(String),
    /// Connection, TLS, DNS or redirect failure.
    Transport(String),
    /// The server answered with a non-success status code.
    Status { code: u16, reason: Option<String> },
    /// The body could not be read or decoded.
    Body(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::InvalidUrl(msg) => write!(f, "invalid URL: {msg}"),
            FetchError::Transport(msg) => write!(f, "transport error: {msg}"),
            FetchError::Status {
                code,
                reason: Some(reason),
            } => write!(f, "HTTP {code} {reason}"),
            FetchError::Status { code, reason: None } => write!(f, "HTTP {code}"),
            FetchError::Body(msg) => write!(f, "failed to read response body: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Builds the HTTP client shared by all asset requests.
///
/// The client is cheap to clone; clones share one connection pool. Sharing
/// the pool does not share responses, so each request still hits the network.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn client() -> Result<Client, FetchError> {
    Client::builder()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| FetchError::Transport(e.to_string()))
}

/// Fetches `url` and returns the body as text.
///
/// # Errors
///
/// Returns [`FetchError::Status`] for any non-2xx response, and
/// [`FetchError::Transport`] when the request could not complete.
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = send(client, url).await?;
    response
        .text()
        .await
        .map_err(|e| FetchError::Body(e.to_string()))
}

/// Fetches `url` and returns the raw body bytes.
///
/// # Errors
///
/// Same contract as [`fetch_text`].
pub async fn fetch_bytes(client: &Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let response = send(client, url).await?;
    response
        .bytes()
        .await
        .map(|bytes| bytes.to_vec())
        .map_err(|e| FetchError::Body(e.to_string()))
}

async fn send(client: &Client, url: &str) -> Result<Response, FetchError> {
    let url = Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

    let response = client
        .get(url)
        .header(CACHE_CONTROL, "no-store")
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            code: status.as_u16(),
            reason: status.canonical_reason().map(str::to_string),
        });
    }

    Ok(response)
}
