//! Demo settings with persistence
//!
//! Settings are saved to `~/.config/edgecam/settings.toml`

use std::fs;
use std::path::PathBuf;

use edgecam_rig::RigConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// All demo settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSettings {
    pub viewport: ViewportSettings,
    pub rig: RigConfig,
}

impl AppSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("edgecam"))
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(dir) = Self::config_dir() else {
            anyhow::bail!("Could not determine config directory");
        };

        let path = dir.join("settings.toml");

        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}

/// Viewport size handed to the rig as the zone-layout surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportSettings {
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_toml_round_trip() {
        let mut settings = AppSettings::default();
        settings.rig.axis_range_length = 25.0;
        settings.viewport.width = 1280;

        let text = toml::to_string_pretty(&settings).unwrap();
        let parsed: AppSettings = toml::from_str(&text).unwrap();
        assert_eq!(parsed.rig.axis_range_length, 25.0);
        assert_eq!(parsed.viewport.width, 1280);
    }
}
