// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme style
//! - `[customizer]` - Starting values of a new session (height, weight, build, color)
//! - `[preview]` - Which preview opens first
//! - `[assets]` - Location of garment photos and the 3D model
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI flag or `ICED_TEE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_tee::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::{Build, Customization, GarmentColor, Height, Weight};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

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

    /// Visual style (minimal, modern, or retro).
    #[serde(default, deserialize_with = "deserialize_theme_style")]
    pub theme: ThemeStyle,
}

/// Starting values for the customization form.
///
/// Values are stored loosely and validated when a session starts, so a
/// hand-edited file with an out-of-range height still loads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CustomizerConfig {
    /// Height in centimetres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u16>,

    /// Weight in kilograms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,

    /// Build name (lean, regular, athletic, big).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,

    /// Garment color name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Preview pane settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreviewConfig {
    /// Open the 3D preview instead of the 2D one.
    #[serde(default = "default_start_in_3d", skip_serializing_if = "Option::is_none")]
    pub start_in_3d: Option<bool>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            start_in_3d: default_start_in_3d(),
        }
    }
}

/// Asset location settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AssetsConfig {
    /// Directory containing `images/` and `models/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
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
    pub customizer: CustomizerConfig,

    #[serde(default)]
    pub preview: PreviewConfig,

    #[serde(default)]
    pub assets: AssetsConfig,
}

impl Config {
    /// Builds the customization a new session starts from.
    ///
    /// Out-of-range numbers are clamped. Unknown build or color names fall
    /// back to the defaults.
    #[must_use]
    pub fn initial_customization(&self) -> Customization {
        let section = &self.customizer;
        Customization {
            height: section.height.map(Height::new).unwrap_or_default(),
            weight: section.weight.map(Weight::new).unwrap_or_default(),
            build: section
                .build
                .as_deref()
                .and_then(Build::from_name)
                .unwrap_or_default(),
            color: section
                .color
                .as_deref()
                .map(GarmentColor::from_name_or_default)
                .unwrap_or_default(),
            ..Customization::default()
        }
    }

    #[must_use]
    pub fn start_in_3d(&self) -> bool {
        self.preview.start_in_3d.unwrap_or(DEFAULT_START_IN_3D)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_start_in_3d() -> Option<bool> {
    Some(DEFAULT_START_IN_3D)
}

fn deserialize_theme_style<'de, D>(deserializer: D) -> std::result::Result<ThemeStyle, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "minimal" => Ok(ThemeStyle::Minimal),
        "modern" => Ok(ThemeStyle::Modern),
        "retro" => Ok(ThemeStyle::Retro),
        other => Err(D::Error::custom(format!("invalid theme: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

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
/// the default config with the i18n key of a warning to show the user.
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
                    log::warn!("Ignoring unreadable config {}: {}", path.display(), err);
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
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
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
