// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[carousel]` - Auto-advance period and countdown restart policy
//! - `[animation]` - Reveal delay and per-group entrance timing
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_ONBOARDING_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_onboarding::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.carousel.auto_advance_secs = Some(5);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::onboarding::{AutoAdvanceInterval, RevealDelay, RevealDuration, StaggerDelay};
use crate::error::{Error, Result};
use crate::onboarding::{AnimationTimings, CarouselSettings, GroupTiming};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Appearance override (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Carousel behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Seconds between automatic page advances.
    #[serde(
        default = "default_auto_advance_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_advance_secs: Option<u32>,

    /// Restart the auto-advance countdown after a tap, swipe or page selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restart_timer_on_interaction: Option<bool>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_secs: default_auto_advance_secs(),
            restart_timer_on_interaction: Some(false),
        }
    }
}

/// Entrance animation timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Delay between a page change and the start of its entrance (ms).
    #[serde(
        default = "default_reveal_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub reveal_delay_ms: Option<u32>,

    /// Entrance duration of the artwork (ms).
    #[serde(
        default = "default_image_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_duration_ms: Option<u32>,

    /// Entrance duration of the title and subtitle (ms).
    #[serde(
        default = "default_text_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub text_duration_ms: Option<u32>,

    /// Extra delay before the artwork starts entering (ms).
    #[serde(
        default = "default_image_stagger_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_stagger_ms: Option<u32>,

    /// Extra delay before the text starts entering (ms).
    #[serde(
        default = "default_text_stagger_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub text_stagger_ms: Option<u32>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: default_reveal_delay_ms(),
            image_duration_ms: default_image_duration_ms(),
            text_duration_ms: default_text_duration_ms(),
            image_stagger_ms: default_image_stagger_ms(),
            text_stagger_ms: default_text_stagger_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Carousel behavior settings.
    #[serde(default)]
    pub carousel: CarouselConfig,

    /// Entrance animation timing.
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl Config {
    /// Resolves the carousel settings, substituting defaults for missing
    /// values and clamping the rest into range.
    #[must_use]
    pub fn carousel_settings(&self) -> CarouselSettings {
        let animation = &self.animation;
        let defaults = AnimationTimings::default();

        let timings = AnimationTimings {
            reveal_delay: animation
                .reveal_delay_ms
                .map_or(defaults.reveal_delay, RevealDelay::new),
            image: GroupTiming {
                stagger: animation
                    .image_stagger_ms
                    .map_or(defaults.image.stagger, StaggerDelay::new),
                duration: animation
                    .image_duration_ms
                    .map_or(defaults.image.duration, RevealDuration::new),
                easing: defaults.image.easing,
            },
            text: GroupTiming {
                stagger: animation
                    .text_stagger_ms
                    .map_or(defaults.text.stagger, StaggerDelay::new),
                duration: animation
                    .text_duration_ms
                    .map_or(defaults.text.duration, RevealDuration::new),
                easing: defaults.text.easing,
            },
        };

        CarouselSettings {
            auto_advance: self
                .carousel
                .auto_advance_secs
                .map_or_else(AutoAdvanceInterval::default, AutoAdvanceInterval::new),
            restart_timer_on_interaction: self
                .carousel
                .restart_timer_on_interaction
                .unwrap_or(false),
            timings,
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_auto_advance_secs() -> Option<u32> {
    Some(DEFAULT_AUTO_ADVANCE_SECS)
}

fn default_reveal_delay_ms() -> Option<u32> {
    Some(DEFAULT_REVEAL_DELAY_MS)
}

fn default_image_duration_ms() -> Option<u32> {
    Some(DEFAULT_IMAGE_DURATION_MS)
}

fn default_text_duration_ms() -> Option<u32> {
    Some(DEFAULT_TEXT_DURATION_MS)
}

fn default_image_stagger_ms() -> Option<u32> {
    Some(DEFAULT_IMAGE_STAGGER_MS)
}

fn default_text_stagger_ms() -> Option<u32> {
    Some(DEFAULT_TEXT_STAGGER_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<ThemeMode>().map_err(D::Error::custom)
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
/// default config with a warning message key explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None).map(|_| ())
}

/// Saves the configuration to a custom directory.
///
/// Returns the path written to, or `None` when no config directory exists.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<Option<PathBuf>> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        save_to_path(config, &path)?;
        return Ok(Some(path));
    }
    Ok(None)
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
