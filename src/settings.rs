//! Encoder settings
//!
//! Stored as JSON in `<config dir>/mustup/opus.json`. Every field is optional
//! in the file; missing fields take their defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Build-environment settings for the opus encoder rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderSettings {
    /// Encoder program placed first in every command
    pub program: String,
    /// Flag token placed after the program, usually a tup config variable
    pub flags_placeholder: String,
}

impl Default for EncoderSettings {
    fn default() -> Self {
        Self {
            program: "opusenc".to_string(),
            flags_placeholder: "@(OPUSENC_FLAGS)".to_string(),
        }
    }
}

impl EncoderSettings {
    const SETTINGS_FILE: &'static str = "opus.json";

    /// Default settings file location (~/.config/mustup/opus.json on Linux)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("mustup").join(Self::SETTINGS_FILE))
    }

    /// Load settings from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            log::debug!("Could not determine config directory, using default encoder settings");
            return Self::default();
        };

        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                log::debug!("Loaded encoder settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default encoder settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings {}: {}", path.display(), e))?;

        serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse settings {}: {}", path.display(), e))
    }

    /// Save settings to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create settings directory: {}", e))?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        std::fs::write(path, json).map_err(|e| format!("Failed to write settings: {}", e))?;

        log::debug!("Saved encoder settings to {}", path.display());
        Ok(())
    }
}
