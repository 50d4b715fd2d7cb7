//! Game configuration
//!
//! Uses RON (Rusty Object Notation) for a human-readable config file. Every
//! field has a default, so a file only needs the settings it changes:
//!
//! ```ron
//! (
//!     window: (width: 1280, height: 720),
//!     fps_limit: Fps30,
//!     audio: (volume: 0.5),
//! )
//! ```
//!
//! Gameplay tuning (speeds, spawn rates, damage) is fixed in code and is not
//! part of the config.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file name looked up in the working directory
pub const CONFIG_FILE: &str = "roadrush.ron";

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// FPS limit setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FpsLimit {
    Fps30,
    #[default]
    Fps60,
    /// As fast as possible (vsync permitting)
    Unlocked,
}

impl FpsLimit {
    /// Get the target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsLimit::Fps30 => Some(1.0 / 30.0),
            FpsLimit::Fps60 => Some(1.0 / 60.0),
            FpsLimit::Unlocked => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub resizable: bool,
    pub high_dpi: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Road Rush".to_string(),
            width: 800,
            height: 600,
            resizable: true,
            high_dpi: false,
        }
    }
}

/// Where the images and the sound live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub dir: String,
    pub background: String,
    pub car: String,
    pub gasoline: String,
    pub cone: String,
    pub person: String,
    /// Played on every hit and pickup
    pub sound: String,
}

impl AssetPaths {
    /// Full path of an asset file inside `dir`
    pub fn path(&self, file: &str) -> String {
        if self.dir.is_empty() {
            file.to_string()
        } else {
            format!("{}/{}", self.dir.trim_end_matches('/'), file)
        }
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            dir: "assets".to_string(),
            background: "road.png".to_string(),
            car: "car.png".to_string(),
            gasoline: "gasoline.png".to_string(),
            cone: "cone3.png".to_string(),
            person: "miha.png".to_string(),
            sound: "pick.wav".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// 0.0 - 1.0
    pub volume: f32,
    pub muted: bool,
}

impl AudioSettings {
    /// Volume to play at, or None when muted/silent
    pub fn effective_volume(&self) -> Option<f32> {
        let volume = self.volume.clamp(0.0, 1.0);
        if self.muted || volume <= 0.0 {
            None
        } else {
            Some(volume)
        }
    }
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self { volume: 1.0, muted: false }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowSettings,
    pub assets: AssetPaths,
    pub audio: AudioSettings,
    pub fps_limit: FpsLimit,
    /// tracing filter directive, e.g. "info" or "roadrush=debug"
    pub log_filter: String,
    /// Fixed RNG seed for reproducible spawns (None = seed from clock)
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            assets: AssetPaths::default(),
            audio: AudioSettings::default(),
            fps_limit: FpsLimit::default(),
            log_filter: "info".to_string(),
            seed: None,
        }
    }
}

/// Where the config came from. Reported after the logger is up.
#[derive(Debug)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
    /// The file exists but could not be used; defaults were taken instead
    Invalid(PathBuf, ConfigError),
}

impl Config {
    /// Parse a config from RON text
    pub fn from_ron(s: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(s)?)
    }

    /// Load a config from a file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron(&contents)
    }

    /// Load from the first config file that exists, falling back to defaults
    pub fn load() -> (Self, ConfigSource) {
        Self::load_first(&candidate_paths())
    }

    fn load_first(candidates: &[PathBuf]) -> (Self, ConfigSource) {
        for path in candidates {
            if !path.exists() {
                continue;
            }
            return match Self::load_from(path) {
                Ok(config) => (config, ConfigSource::File(path.clone())),
                Err(e) => (Self::default(), ConfigSource::Invalid(path.clone(), e)),
            };
        }
        (Self::default(), ConfigSource::Defaults)
    }
}

/// Config file locations, in lookup order
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    paths.extend(user_config_path());
    paths
}

#[cfg(not(target_arch = "wasm32"))]
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("roadrush").join("config.ron"))
}

#[cfg(target_arch = "wasm32")]
fn user_config_path() -> Option<PathBuf> {
    None
}
