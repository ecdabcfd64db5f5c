// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const ENV_LOG: &str = "PAYO_LOG";

const DEFAULT_FILTER: &str = "info";

/// Returns the filter directives from `PAYO_LOG`, or `info` when unset.
#[must_use]
pub fn filter_directives() -> String {
    match std::env::var(ENV_LOG) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Installs the global fmt subscriber. Calling it twice is harmless.
pub fn init() {
    let filter = EnvFilter::try_new(filter_directives())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
