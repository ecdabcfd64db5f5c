// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[assets]` - Remote asset URLs (navigation graphic, fonts, flags)
//! - `[tab_bar]` - Bottom navigation geometry
//! - `[motion]` - Highlight transition timing
//!
//! Every field is optional; missing values resolve to the constants in
//! [`defaults`].
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `PAYO_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use payo::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Remote asset locations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AssetsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav_background_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_regular_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_demi_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag_us_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag_eu_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag_uk_url: Option<String>,
}

impl AssetsConfig {
    #[must_use]
    pub fn nav_background_url(&self) -> &str {
        non_empty_or(&self.nav_background_url, DEFAULT_NAV_BACKGROUND_URL)
    }

    #[must_use]
    pub fn font_regular_url(&self) -> &str {
        non_empty_or(&self.font_regular_url, DEFAULT_FONT_REGULAR_URL)
    }

    #[must_use]
    pub fn font_demi_url(&self) -> &str {
        non_empty_or(&self.font_demi_url, DEFAULT_FONT_DEMI_URL)
    }

    #[must_use]
    pub fn flag_us_url(&self) -> &str {
        non_empty_or(&self.flag_us_url, DEFAULT_FLAG_US_URL)
    }

    #[must_use]
    pub fn flag_eu_url(&self) -> &str {
        non_empty_or(&self.flag_eu_url, DEFAULT_FLAG_EU_URL)
    }

    #[must_use]
    pub fn flag_uk_url(&self) -> &str {
        non_empty_or(&self.flag_uk_url, DEFAULT_FLAG_UK_URL)
    }
}

/// Bottom navigation geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TabBarConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_width: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_height: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_top: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_radius: Option<f32>,
}

impl TabBarConfig {
    #[must_use]
    pub fn width(&self) -> f32 {
        positive_or(self.width, DEFAULT_TAB_BAR_WIDTH)
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        positive_or(self.height, DEFAULT_TAB_BAR_HEIGHT)
    }

    #[must_use]
    pub fn highlight_width(&self) -> f32 {
        positive_or(self.highlight_width, DEFAULT_HIGHLIGHT_WIDTH)
    }

    #[must_use]
    pub fn highlight_height(&self) -> f32 {
        positive_or(self.highlight_height, DEFAULT_HIGHLIGHT_HEIGHT)
    }

    /// Top offset may legitimately be zero.
    #[must_use]
    pub fn highlight_top(&self) -> f32 {
        match self.highlight_top {
            Some(value) if value.is_finite() && value >= 0.0 => value,
            _ => DEFAULT_HIGHLIGHT_TOP,
        }
    }

    #[must_use]
    pub fn highlight_radius(&self) -> f32 {
        match self.highlight_radius {
            Some(value) if value.is_finite() && value >= 0.0 => value,
            _ => DEFAULT_HIGHLIGHT_RADIUS,
        }
    }
}

/// Highlight transition timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MotionConfig {
    /// Duration in milliseconds when a highlight becomes more visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap_in_ms: Option<u64>,

    /// Duration in milliseconds when a highlight fades.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap_out_ms: Option<u64>,
}

impl MotionConfig {
    /// Never longer than [`Self::tap_out`]: highlights appear at least as
    /// fast as they fade.
    #[must_use]
    pub fn tap_in(&self) -> Duration {
        let tap_in = Duration::from_millis(
            self.tap_in_ms
                .unwrap_or(DEFAULT_TAP_IN_MS)
                .min(MAX_TRANSITION_MS),
        );
        tap_in.min(self.tap_out())
    }

    #[must_use]
    pub fn tap_out(&self) -> Duration {
        Duration::from_millis(
            self.tap_out_ms
                .unwrap_or(DEFAULT_TAP_OUT_MS)
                .min(MAX_TRANSITION_MS),
        )
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub tab_bar: TabBarConfig,

    #[serde(default)]
    pub motion: MotionConfig,
}

fn non_empty_or<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    match value.as_deref() {
        Some(url) if !url.trim().is_empty() => url,
        _ => default,
    }
}

fn positive_or(value: Option<f32>, default: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => default,
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("warning-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<PathBuf> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory and returns the file path.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<PathBuf> {
    let path = get_config_path_with_override(base_dir)
        .ok_or_else(|| Error::Config("no config directory available".to_string()))?;
    save_to_path(config, &path)?;
    Ok(path)
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            assets: AssetsConfig {
                nav_background_url: Some("https://cdn.example/nav.svg".to_string()),
                ..AssetsConfig::default()
            },
            tab_bar: TabBarConfig {
                width: Some(360.0),
                ..TabBarConfig::default()
            },
            motion: MotionConfig {
                tap_in_ms: Some(90),
                tap_out_ms: Some(200),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_resolves_to_defaults() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.assets.nav_background_url(), DEFAULT_NAV_BACKGROUND_URL);
        assert_eq!(config.assets.flag_eu_url(), DEFAULT_FLAG_EU_URL);
        assert_eq!(config.tab_bar.width(), DEFAULT_TAB_BAR_WIDTH);
        assert_eq!(config.tab_bar.highlight_top(), DEFAULT_HIGHLIGHT_TOP);
        assert_eq!(config.motion.tap_in(), Duration::from_millis(DEFAULT_TAP_IN_MS));
        assert_eq!(config.motion.tap_out(), Duration::from_millis(DEFAULT_TAP_OUT_MS));
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r#"
[tab_bar]
width = 400.0

[motion]
tap_out_ms = 300
"#,
        )
        .expect("write config");

        let loaded = load_from_path(&config_path).expect("partial config loads");
        assert_eq!(loaded.tab_bar.width(), 400.0);
        assert_eq!(loaded.tab_bar.height(), DEFAULT_TAB_BAR_HEIGHT);
        assert_eq!(loaded.motion.tap_out(), Duration::from_millis(300));
        assert_eq!(loaded.motion.tap_in(), Duration::from_millis(DEFAULT_TAP_IN_MS));
        assert_eq!(loaded.general.language, None);
    }

    #[test]
    fn nonsensical_geometry_falls_back_to_defaults() {
        let tab_bar = TabBarConfig {
            width: Some(-10.0),
            height: Some(0.0),
            highlight_width: Some(f32::NAN),
            highlight_top: Some(-1.0),
            ..TabBarConfig::default()
        };
        assert_eq!(tab_bar.width(), DEFAULT_TAB_BAR_WIDTH);
        assert_eq!(tab_bar.height(), DEFAULT_TAB_BAR_HEIGHT);
        assert_eq!(tab_bar.highlight_width(), DEFAULT_HIGHLIGHT_WIDTH);
        assert_eq!(tab_bar.highlight_top(), DEFAULT_HIGHLIGHT_TOP);
    }

    #[test]
    fn blank_urls_fall_back_to_defaults() {
        let assets = AssetsConfig {
            nav_background_url: Some("   ".to_string()),
            ..AssetsConfig::default()
        };
        assert_eq!(assets.nav_background_url(), DEFAULT_NAV_BACKGROUND_URL);
    }

    #[test]
    fn motion_durations_are_capped() {
        let motion = MotionConfig {
            tap_in_ms: Some(60_000),
            tap_out_ms: Some(60_000),
        };
        assert_eq!(motion.tap_in(), Duration::from_millis(MAX_TRANSITION_MS));
        assert_eq!(motion.tap_out(), Duration::from_millis(MAX_TRANSITION_MS));
    }

    #[test]
    fn tap_in_never_exceeds_tap_out() {
        let motion = MotionConfig {
            tap_in_ms: Some(300),
            tap_out_ms: None,
        };
        assert_eq!(motion.tap_in(), Duration::from_millis(DEFAULT_TAP_OUT_MS));
        assert_eq!(motion.tap_out(), Duration::from_millis(DEFAULT_TAP_OUT_MS));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("de".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };

        let written = save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        assert_eq!(written, base_dir.join("settings.toml"));

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.language, Some("de".to_string()));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("warning-config-load-error"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save config");
        let content = fs::read_to_string(&config_path).expect("read config");

        assert!(content.contains("[general]"), "should have [general] section");
        assert!(content.contains("[motion]"), "should have [motion] section");
    }
}
