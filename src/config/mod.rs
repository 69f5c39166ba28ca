// SPDX-License-Identifier: MPL-2.0
//! This module handles the session configuration, including loading and saving
//! it to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use loop_player::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.controller.deferred_pause_ms = 250;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.controller.deferred_pause_ms, 250);
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::diagnostics::JournalCapacity;
use crate::domain::video::DeferredPauseDelay;
use crate::error::Result;
use crate::player::catalog::standard_entries;
use crate::player::{EffectRegistry, FilterCatalog, FilterEntry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "LoopPlayer";

/// Initial settings of a playback session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub source: String,
    pub looping: bool,
    pub muted: bool,
    pub autoplay: bool,
    pub brightness: f32,
    pub contrast: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            looping: DEFAULT_LOOPING,
            muted: DEFAULT_MUTED,
            autoplay: DEFAULT_AUTOPLAY,
            brightness: DEFAULT_BRIGHTNESS,
            contrast: DEFAULT_CONTRAST,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    pub deferred_pause_ms: u64,
    /// When false, a pending deferred pause always fires, even if the user
    /// pressed play in the meantime.
    pub cancel_pending_pause: bool,
}

impl ControllerSettings {
    #[must_use]
    pub fn deferred_pause_delay(&self) -> DeferredPauseDelay {
        DeferredPauseDelay::from_millis(self.deferred_pause_ms)
    }
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            deferred_pause_ms: DEFAULT_DEFERRED_PAUSE_MS,
            cancel_pending_pause: DEFAULT_CANCEL_PENDING_PAUSE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsSettings {
    pub journal_capacity: usize,
}

impl DiagnosticsSettings {
    #[must_use]
    pub fn capacity(&self) -> JournalCapacity {
        JournalCapacity::new(self.journal_capacity)
    }
}

impl Default for DiagnosticsSettings {
    fn default() -> Self {
        Self {
            journal_capacity: DEFAULT_JOURNAL_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub player: PlayerSettings,
    #[serde(default)]
    pub controller: ControllerSettings,
    #[serde(default)]
    pub diagnostics: DiagnosticsSettings,
    /// Replaces the standard filter catalog when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<FilterEntry>>,
}

impl Config {
    /// Builds the filter catalog this configuration describes, falling back
    /// to the standard entries when no `[[filters]]` are configured.
    ///
    /// # Errors
    ///
    /// Returns a catalog error if the configured filter list does not start
    /// with the "None" entry.
    pub fn catalog(&self, registry: &EffectRegistry) -> Result<FilterCatalog> {
        let entries = self.filters.clone().unwrap_or_else(standard_entries);
        Ok(FilterCatalog::new(entries, registry)?)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads a configuration file. Unparseable content yields the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            warn!(path = %path.display(), %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CatalogError, Error};
    use crate::player::params::ParamValue;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut config = Config::default();
        config.player.autoplay = false;
        config.player.source = "swipe".to_string();
        config.controller.deferred_pause_ms = 250;
        config.controller.cancel_pending_pause = false;
        config.filters = Some(vec![
            FilterEntry::new("None"),
            FilterEntry::new("pixellate").with("scale", 8.0),
        ]);

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let err = load_from_path(&temp_dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [player]
            muted = false

            [[filters]]
            name = "None"

            [[filters]]
            name = "gloom"
            parameters = { radius = 10, intensity = 0.75 }
            "#,
        )
        .expect("valid toml");

        assert!(!config.player.muted);
        assert!(config.player.autoplay);
        assert_eq!(config.controller, ControllerSettings::default());

        let filters = config.filters.as_ref().expect("filters present");
        assert_eq!(filters[1].parameters["radius"], ParamValue::Number(10.0));
    }

    #[test]
    fn default_config_matches_constants() {
        let config = Config::default();
        assert_eq!(config.player.source, DEFAULT_SOURCE);
        assert!(config.player.muted);
        assert!(config.player.autoplay);
        assert_eq!(
            config.controller.deferred_pause_delay().millis(),
            DEFAULT_DEFERRED_PAUSE_MS
        );
        assert_eq!(
            config.diagnostics.capacity().value(),
            DEFAULT_JOURNAL_CAPACITY
        );
        assert!(config.filters.is_none());
    }

    #[test]
    fn catalog_uses_standard_list_by_default() {
        let catalog = Config::default()
            .catalog(&EffectRegistry::standard())
            .expect("standard catalog");
        assert_eq!(catalog.len(), FilterCatalog::standard().len());
    }

    #[test]
    fn catalog_rejects_list_without_sentinel() {
        let config = Config {
            filters: Some(vec![FilterEntry::new("gloom")]),
            ..Config::default()
        };
        assert_eq!(
            config.catalog(&EffectRegistry::standard()).unwrap_err(),
            Error::Catalog(CatalogError::MissingSentinel)
        );
    }
}
