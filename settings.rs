/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Persisted editor settings.
//!
//! Stored as TOML under the platform config dir. A missing or unreadable
//! settings file degrades to defaults with a warning; settings are never a
//! reason to fail startup.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

/// Most-recent-first cap for the recent-projects menu.
pub const RECENT_PROJECTS_CAP: usize = 10;

#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Recently saved or opened project files, most recent first,
    /// deduplicated, capped at [`RECENT_PROJECTS_CAP`].
    pub recent_projects: Vec<PathBuf>,
}

impl EditorSettings {
    /// Record `path` as the most recently used project location.
    pub fn note_recent_project(&mut self, path: &Path) {
        self.recent_projects.retain(|p| p != path);
        self.recent_projects.insert(0, path.to_path_buf());
        self.recent_projects.truncate(RECENT_PROJECTS_CAP);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    Io(String),
    Encode(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {e}"),
            SettingsError::Encode(e) => write!(f, "Encode error: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {}

/// Default on-disk location for the settings file, if the platform exposes
/// a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("graphdeck").join("settings.toml"))
}

/// Load settings from `path`, falling back to defaults on any problem.
pub fn load_settings(path: &Path) -> EditorSettings {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return EditorSettings::default();
        }
        Err(e) => {
            warn!("Failed to read settings from {}: {e}", path.display());
            return EditorSettings::default();
        }
    };
    match toml::from_str(&raw) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Ignoring invalid settings file {}: {e}", path.display());
            EditorSettings::default()
        }
    }
}

/// Write settings to `path`, creating parent directories as needed.
pub fn save_settings(path: &Path, settings: &EditorSettings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SettingsError::Io(format!("{e}")))?;
    }
    let encoded =
        toml::to_string_pretty(settings).map_err(|e| SettingsError::Encode(format!("{e}")))?;
    fs::write(path, encoded).map_err(|e| SettingsError::Io(format!("{e}")))
}
