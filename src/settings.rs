//! Player preferences
//!
//! Persisted separately from the high score, as JSON under its own key.

use serde::{Deserialize, Serialize};

use crate::error::PlatformError;
use crate::platform::Storage;

/// Player preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sound effects on/off (the in-game sound toggle)
    pub sound_enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,

    // === Visual Effects ===
    /// Explosion particles
    pub particles: bool,
    /// Background stars
    pub starfield: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            master_volume: 0.8,
            particles: true,
            starfield: true,
        }
    }
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "space_shooter_settings";

    /// Volume actually applied to sound effects
    pub fn effective_volume(&self) -> f32 {
        if self.sound_enabled {
            self.master_volume.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Load settings, falling back to defaults when missing or unreadable
    pub fn load(storage: &impl Storage) -> Self {
        match storage.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings: {}", e);
                    Self::default()
                }
            },
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Settings unavailable: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, storage: &mut impl Storage) -> Result<(), PlatformError> {
        let json = serde_json::to_string(self).map_err(|e| PlatformError::StorageWrite {
            key: Self::STORAGE_KEY.to_string(),
            reason: e.to_string(),
        })?;
        storage.set(Self::STORAGE_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
