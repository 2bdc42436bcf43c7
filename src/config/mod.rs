// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language
//! - `[toasts]` - Display durations, animations, anchor and stacking
//! - `[diagnostics]` - Size of the warning/error history
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_TOASTS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Keep errors on screen a little longer
//! config.toasts.error_ms = Some(8000);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::diagnostics::BufferCapacity;
use crate::error::{Error, Result};
use crate::notifications::Position;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning shown when `settings.toml` cannot be parsed.
pub const LOAD_ERROR_KEY: &str = "toast-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Notification settings.
///
/// Durations are signed so a hand-edited `0` or negative value can be read
/// and then replaced by the severity default instead of failing the load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    #[serde(default = "default_success_ms", skip_serializing_if = "Option::is_none")]
    pub success_ms: Option<i64>,

    #[serde(default = "default_info_ms", skip_serializing_if = "Option::is_none")]
    pub info_ms: Option<i64>,

    #[serde(default = "default_warning_ms", skip_serializing_if = "Option::is_none")]
    pub warning_ms: Option<i64>,

    #[serde(default = "default_error_ms", skip_serializing_if = "Option::is_none")]
    pub error_ms: Option<i64>,

    /// Enter transition length (0 disables the animation).
    #[serde(
        default = "default_enter_animation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub enter_animation_ms: Option<u64>,

    /// Exit transition length (0 disables the animation).
    #[serde(
        default = "default_exit_animation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub exit_animation_ms: Option<u64>,

    /// Edge used when a notification does not pick one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    /// Banners shown at once per edge; the rest wait their turn.
    #[serde(default = "default_max_visible", skip_serializing_if = "Option::is_none")]
    pub max_visible: Option<usize>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            success_ms: default_success_ms(),
            info_ms: default_info_ms(),
            warning_ms: default_warning_ms(),
            error_ms: default_error_ms(),
            enter_animation_ms: default_enter_animation_ms(),
            exit_animation_ms: default_exit_animation_ms(),
            position: Some(Position::default()),
            max_visible: default_max_visible(),
        }
    }
}

impl ToastConfig {
    /// Returns `max_visible` clamped to the supported range.
    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.max_visible
            .unwrap_or(DEFAULT_MAX_VISIBLE)
            .clamp(MIN_MAX_VISIBLE, MAX_MAX_VISIBLE)
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of warning/error notifications kept in memory.
    #[serde(default = "default_capacity", skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl DiagnosticsConfig {
    #[must_use]
    pub fn buffer_capacity(&self) -> BufferCapacity {
        BufferCapacity::new(self.capacity.unwrap_or(DEFAULT_DIAGNOSTICS_CAPACITY))
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
    pub toasts: ToastConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_success_ms() -> Option<i64> {
    i64::try_from(DEFAULT_SUCCESS_MS).ok()
}

fn default_info_ms() -> Option<i64> {
    i64::try_from(DEFAULT_INFO_MS).ok()
}

fn default_warning_ms() -> Option<i64> {
    i64::try_from(DEFAULT_WARNING_MS).ok()
}

fn default_error_ms() -> Option<i64> {
    i64::try_from(DEFAULT_ERROR_MS).ok()
}

fn default_enter_animation_ms() -> Option<u64> {
    Some(DEFAULT_ENTER_ANIMATION_MS)
}

fn default_exit_animation_ms() -> Option<u64> {
    Some(DEFAULT_EXIT_ANIMATION_MS)
}

fn default_max_visible() -> Option<usize> {
    Some(DEFAULT_MAX_VISIBLE)
}

fn default_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_CAPACITY)
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
/// default config with the i18n key of a warning to show the user.
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
                    tracing::warn!(path = %path.display(), %err, "ignoring unreadable settings");
                    return (Config::default(), Some(LOAD_ERROR_KEY.to_string()));
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
                language: Some("fr".to_string()),
            },
            toasts: ToastConfig {
                error_ms: Some(9000),
                position: Some(Position::Bottom),
                max_visible: Some(5),
                ..ToastConfig::default()
            },
            diagnostics: DiagnosticsConfig { capacity: Some(64) },
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
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[toasts]\nwarning_ms = 6000\n").expect("write");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.toasts.warning_ms, Some(6000));
        assert_eq!(loaded.toasts.success_ms, Some(3000));
        assert_eq!(loaded.toasts.error_ms, Some(5000));
        assert_eq!(loaded.general, GeneralConfig::default());
        assert_eq!(loaded.diagnostics, DiagnosticsConfig::default());
    }

    #[test]
    fn non_positive_durations_are_read_not_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[toasts]\nsuccess_ms = 0\nerror_ms = -5\n").expect("write");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.toasts.success_ms, Some(0));
        assert_eq!(loaded.toasts.error_ms, Some(-5));
    }

    #[test]
    fn unknown_position_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[toasts]\nposition = \"left\"\n").expect("write");

        assert!(matches!(
            load_from_path(&config_path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn load_with_override_reports_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config = Config::default();

        save_with_override(&config, Some(temp_dir.path().to_path_buf())).expect("save");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn max_visible_is_clamped() {
        let mut toasts = ToastConfig::default();
        assert_eq!(toasts.max_visible(), DEFAULT_MAX_VISIBLE);

        toasts.max_visible = Some(0);
        assert_eq!(toasts.max_visible(), MIN_MAX_VISIBLE);

        toasts.max_visible = Some(500);
        assert_eq!(toasts.max_visible(), MAX_MAX_VISIBLE);
    }

    #[test]
    fn diagnostics_capacity_is_clamped() {
        let diagnostics = DiagnosticsConfig { capacity: Some(1) };
        assert_eq!(diagnostics.buffer_capacity().value(), MIN_DIAGNOSTICS_CAPACITY);
    }
}
