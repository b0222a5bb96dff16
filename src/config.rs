// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

use crate::constants::{sound, ui};
use crate::errors::{ControlsError, ControlsResult};

/// User configuration for the on-screen controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Animate orientation changes when the device rotates
    pub animate_orientation: bool,
    /// Play sound effects for camera actions
    pub sound_enabled: bool,
    /// Sound effect volume (0.0 - 1.0)
    pub sound_volume: f32,
    /// Directory containing the sound clip files
    pub sound_theme_dir: Option<PathBuf>,
    /// Hold duration before a shutter press counts as a long press, in
    /// milliseconds
    pub long_press_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            animate_orientation: true, // Controls rotate smoothly by default
            sound_enabled: true,
            sound_volume: sound::DEFAULT_VOLUME,
            sound_theme_dir: None, // No sounds until a theme is installed
            long_press_ms: ui::LONG_PRESS_THRESHOLD.as_millis() as u64,
        }
    }
}

impl Config {
    /// Path of the configuration file under the user config directory
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("camera-controls").join("config.json"))
    }

    /// Load the configuration, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            warn!("No config directory available, using defaults");
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Invalid config file, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Write the configuration to disk.
    pub fn save(&self) -> ControlsResult<()> {
        let Some(path) = Self::path() else {
            return Err(ControlsError::Config(
                "no config directory available".to_string(),
            ));
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ControlsError::Config(e.to_string()))?;
        std::fs::write(&path, contents)?;
        Ok(())
    }

    /// Long-press threshold as a duration
    pub fn long_press_threshold(&self) -> Duration {
        Duration::from_millis(self.long_press_ms)
    }
}
