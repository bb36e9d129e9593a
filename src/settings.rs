//! Game settings
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ROUNDS, DEFAULT_SWAP_INTERVAL, DEFAULT_TICK_HZ};

/// Settings that failed to load or validate
#[derive(Debug)]
pub enum SettingsError {
    /// Settings file could not be read
    Io(std::io::Error),
    /// Settings file is not valid JSON for [`Settings`]
    Parse(serde_json::Error),
    /// A run needs at least one play round
    ZeroRounds,
    /// Swap interval is a divisor
    ZeroSwapInterval,
    /// Host loop cannot step at 0 Hz
    ZeroTickRate,
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "Failed to read settings: {}", e),
            SettingsError::Parse(e) => write!(f, "Failed to parse settings: {}", e),
            SettingsError::ZeroRounds => write!(f, "rounds must be at least 1"),
            SettingsError::ZeroSwapInterval => write!(f, "swap_interval must be at least 1"),
            SettingsError::ZeroTickRate => write!(f, "tick_hz must be at least 1"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            _ => None,
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

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed for reproducible runs (random when absent)
    pub seed: Option<u64>,

    // === Difficulty ===
    /// Correct answers needed to win
    pub rounds: u32,
    /// One extra swap every `swap_interval` rounds
    pub swap_interval: u32,

    // === Host loop ===
    /// Simulation steps per second
    pub tick_hz: u32,
    /// Let the game answer itself (demo mode)
    pub autoplay: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            rounds: DEFAULT_ROUNDS,
            swap_interval: DEFAULT_SWAP_INTERVAL,
            tick_hz: DEFAULT_TICK_HZ,
            autoplay: false,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a settings file
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{} ({}), using default settings", e, path.display());
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.rounds == 0 {
            return Err(SettingsError::ZeroRounds);
        }
        if self.swap_interval == 0 {
            return Err(SettingsError::ZeroSwapInterval);
        }
        if self.tick_hz == 0 {
            return Err(SettingsError::ZeroTickRate);
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
