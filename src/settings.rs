//! Persisted application settings, stored as a TOML file.
//!
//! Settings live in the OS-standard config directory:
//! - Windows: %APPDATA%\vitrine\settings.toml
//! - macOS: ~/Library/Application Support/vitrine/settings.toml
//! - Linux: ~/.config/vitrine/settings.toml
//!
//! The file is human-readable and editable. Loading never fails: a
//! missing or unparsable file yields defaults. The record is shared
//! mutably between the host application and the collection pane
//! through a [`SettingsHandle`]; component callbacks write through it
//! and flush to disk best-effort.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

use crate::collection::AlbumOrder;

/// Application settings.
///
/// A `Settings` value optionally carries the path it was loaded from;
/// [`Settings::save`] writes back to that path. A value built with
/// [`Settings::in_memory`] has no backing file and saves are no-ops,
/// which is what tests and hosts with their own persistence use.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Width of the albums pane's right half, in percent (0-100)
    pub albums_right_pane_width_percent: u8,

    /// Sort order last applied to the album list
    pub albums_active_order: AlbumOrder,

    /// Album key of the last selected album, if any
    pub albums_selected_album: Option<String>,

    /// Backing file, set when loaded from disk
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            albums_right_pane_width_percent: 30,
            albums_active_order: AlbumOrder::default(),
            albums_selected_album: None,
            path: None,
        }
    }
}

/// Settings record shared between the host and the collection pane.
pub type SettingsHandle = Arc<RwLock<Settings>>;

impl Settings {
    /// Settings without a backing file; saves are no-ops.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Wrap settings in the shared handle the pane expects.
    pub fn into_handle(self) -> SettingsHandle {
        Arc::new(RwLock::new(self))
    }

    /// Load settings from the default location.
    ///
    /// Returns defaults (still backed by the default path, so later
    /// saves create the file) if the file is missing or unparsable.
    /// Logs warnings but doesn't fail - we always return usable
    /// settings.
    pub fn load() -> Settings {
        let Some(path) = settings_path() else {
            tracing::warn!(target: "settings", "Could not determine config directory, using defaults");
            return Settings::default();
        };
        Self::load_from(path)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: PathBuf) -> Settings {
        let mut settings = if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(settings) => {
                        tracing::info!(target: "settings", "Loaded settings from {:?}", path);
                        settings
                    }
                    Err(e) => {
                        tracing::error!(target: "settings", "Failed to parse settings file {:?}: {}", path, e);
                        tracing::warn!(target: "settings", "Using default settings");
                        Settings::default()
                    }
                },
                Err(e) => {
                    tracing::error!(target: "settings", "Failed to read settings file {:?}: {}", path, e);
                    Settings::default()
                }
            }
        } else {
            tracing::info!(target: "settings", "No settings file found at {:?}, using defaults", path);
            Settings::default()
        };
        settings.path = Some(path);
        settings
    }

    /// Save settings to the backing file, if there is one.
    ///
    /// Creates the parent directory if needed. Writes atomically
    /// (write to temp, then rename).
    pub fn save(&self) -> Result<(), SettingsError> {
        let Some(path) = &self.path else {
            tracing::debug!(target: "settings", "In-memory settings, skipping save");
            return Ok(());
        };

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .map_err(|e| SettingsError::CreateDir(dir.to_path_buf(), e))?;
        }

        let contents = toml::to_string_pretty(self).map_err(SettingsError::Serialize)?;

        let temp_path = path.with_extension("toml.tmp");
        std::fs::write(&temp_path, &contents)
            .map_err(|e| SettingsError::Write(temp_path.clone(), e))?;
        std::fs::rename(&temp_path, path)
            .map_err(|e| SettingsError::Rename(temp_path, path.clone(), e))?;

        tracing::debug!(target: "settings", "Saved settings to {:?}", path);
        Ok(())
    }
}

/// Get the config directory path.
pub fn settings_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("vitrine"))
}

/// Get the full path to the settings file.
pub fn settings_path() -> Option<PathBuf> {
    settings_dir().map(|d| d.join("settings.toml"))
}

/// Flush a shared settings record to disk, logging failures.
///
/// Component callbacks are infallible by contract, so disk problems
/// are reported here and the in-memory record stays authoritative for
/// the session.
pub fn flush(settings: &SettingsHandle) {
    if let Err(e) = settings.read().save() {
        tracing::error!(target: "settings", "Failed to save settings: {}", e);
    }
}

/// Settings persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize settings: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write settings to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}
