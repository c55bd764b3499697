// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[api]` - Gallery API base URL and request timeout
//! - `[gallery]` - Preview strip length and thumbnail cache size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument
//! 3. Set `COMMUNITY_GALLERY_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use community_gallery::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("ta".to_string());
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
    /// UI language code (e.g., "en-US", "ta").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Remote gallery API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiConfig {
    /// Base URL of the gallery API (e.g., `https://example.org`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Gallery presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Number of images in the home preview strip.
    #[serde(
        default = "default_preview_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub preview_count: Option<usize>,

    /// Number of decoded thumbnails kept in memory.
    #[serde(
        default = "default_thumbnail_cache_entries",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_cache_entries: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            preview_count: default_preview_count(),
            thumbnail_cache_entries: default_thumbnail_cache_entries(),
        }
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
    pub api: ApiConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    /// Request timeout, clamped to the supported range.
    #[must_use]
    pub fn api_timeout(&self) -> Duration {
        let secs = self
            .api
            .timeout_secs
            .unwrap_or(DEFAULT_API_TIMEOUT_SECS)
            .clamp(MIN_API_TIMEOUT_SECS, MAX_API_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// Preview strip length, clamped to the supported range.
    #[must_use]
    pub fn preview_count(&self) -> usize {
        self.gallery
            .preview_count
            .unwrap_or(DEFAULT_PREVIEW_COUNT)
            .clamp(MIN_PREVIEW_COUNT, MAX_PREVIEW_COUNT)
    }

    /// Thumbnail cache size, clamped to the supported range.
    #[must_use]
    pub fn thumbnail_cache_entries(&self) -> usize {
        self.gallery
            .thumbnail_cache_entries
            .unwrap_or(DEFAULT_THUMBNAIL_CACHE_ENTRIES)
            .clamp(MIN_THUMBNAIL_CACHE_ENTRIES, MAX_THUMBNAIL_CACHE_ENTRIES)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_preview_count() -> Option<usize> {
    Some(DEFAULT_PREVIEW_COUNT)
}

fn default_thumbnail_cache_entries() -> Option<usize> {
    Some(DEFAULT_THUMBNAIL_CACHE_ENTRIES)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// API Base Resolution
// =============================================================================

/// Resolves the gallery API base URL.
///
/// Priority: CLI `--api-base`, then `COMMUNITY_GALLERY_API_BASE`, then
/// `[api] base_url`, then [`DEFAULT_API_BASE_URL`]. Empty values are skipped.
#[must_use]
pub fn resolve_api_base(cli: Option<&str>, config: &Config) -> String {
    let env = std::env::var(ENV_API_BASE).ok();
    resolve_api_base_from(cli, env.as_deref(), config)
}

fn resolve_api_base_from(cli: Option<&str>, env: Option<&str>, config: &Config) -> String {
    [cli, env, config.api.base_url.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .to_string()
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
/// default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (
                    Config::default(),
                    Some("notification-config-load-error".to_string()),
                ),
            };
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
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("ta".to_string()),
                theme_mode: ThemeMode::Light,
            },
            api: ApiConfig {
                base_url: Some("https://gallery.example.org".to_string()),
                timeout_secs: Some(30),
            },
            gallery: GalleryConfig {
                preview_count: Some(8),
                thumbnail_cache_entries: Some(128),
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

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_on_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\nlanguage=")
            .expect("failed to write file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[api]\nbase_url = \"http://10.0.0.2:5000\"\n")
            .expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.api.base_url.as_deref(), Some("http://10.0.0.2:5000"));
        assert_eq!(loaded.gallery.preview_count, Some(DEFAULT_PREVIEW_COUNT));
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("valid toml");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn numeric_settings_are_clamped() {
        let mut config = Config::default();
        config.api.timeout_secs = Some(0);
        config.gallery.preview_count = Some(1000);
        config.gallery.thumbnail_cache_entries = Some(1);

        assert_eq!(config.api_timeout(), Duration::from_secs(MIN_API_TIMEOUT_SECS));
        assert_eq!(config.preview_count(), MAX_PREVIEW_COUNT);
        assert_eq!(config.thumbnail_cache_entries(), MIN_THUMBNAIL_CACHE_ENTRIES);
    }

    #[test]
    fn api_base_priority_is_cli_env_config_default() {
        let mut config = Config::default();
        assert_eq!(resolve_api_base_from(None, None, &config), DEFAULT_API_BASE_URL);

        config.api.base_url = Some("http://config:5000".into());
        assert_eq!(resolve_api_base_from(None, None, &config), "http://config:5000");
        assert_eq!(
            resolve_api_base_from(None, Some("http://env:5000"), &config),
            "http://env:5000"
        );
        assert_eq!(
            resolve_api_base_from(Some("http://cli:5000"), Some("http://env:5000"), &config),
            "http://cli:5000"
        );
    }

    #[test]
    fn empty_api_base_values_are_skipped() {
        let config = Config::default();
        assert_eq!(
            resolve_api_base_from(Some("  "), Some(""), &config),
            DEFAULT_API_BASE_URL
        );
    }
}
