//! Game settings and tuning
//!
//! Every field has a compile-time default from [`crate::consts`]. A JSON file
//! can override any subset of them; missing keys keep their defaults.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::disc::{FlightNumbers, PhysicsParams};
use crate::sim::generate::CourseParams;

/// Environment variable naming a settings file
pub const SETTINGS_ENV: &str = "DISC_GOLF_SETTINGS";

/// Failure to read a settings file
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "could not read settings: {}", e),
            SettingsError::Parse(e) => write!(f, "invalid settings JSON: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Physics ===
    pub physics: PhysicsParams,
    /// Launch speed at full power (m/s)
    pub max_throw_speed: f32,
    /// Flight numbers of the player's disc
    pub disc: FlightNumbers,

    // === Course ===
    pub course: CourseParams,

    // === Camera ===
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub zoom: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            physics: PhysicsParams::default(),
            max_throw_speed: MAX_THROW_SPEED,
            disc: FlightNumbers::default(),

            course: CourseParams::default(),

            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            zoom: ZOOM_DEFAULT,
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the file named by `DISC_GOLF_SETTINGS`, falling back to defaults
    pub fn load() -> Self {
        let Ok(path) = std::env::var(SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("{} ({}), using defaults", e, path);
                Self::default()
            }
        }
    }
}
