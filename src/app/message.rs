// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::fonts;
use crate::ui::balances;
use crate::ui::tab_bar;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    TabBar(tab_bar::Message),
    Balances(balances::Message),
    Fonts(fonts::Message),
    /// Animation frame while a highlight transition runs.
    Tick(Instant),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PAYO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional URL replacing the tab bar background graphic.
    pub nav_url: Option<String>,
    /// Write the effective settings to settings.toml at startup.
    pub write_config: bool,
}
