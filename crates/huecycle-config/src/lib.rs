//! Configuration for huecycle.
//!
//! Settings live in a TOML file under the platform config directory
//! (for example `~/.config/huecycle/config.toml` on Linux). Every key is
//! optional; anything left out keeps its default.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use huecycle_core::{AnimationSpeed, HueCycle, HueState};
use serde::{Deserialize, Serialize};

/// Name of the config file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors raised while locating, reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine a config directory for this platform")]
    NoConfigDir,
    #[error("failed to read config file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write config file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Hue step preset.
    pub speed: AnimationSpeed,
    /// HSL saturation, 0-100.
    pub saturation: f32,
    /// HSL lightness, 0-100.
    pub lightness: f32,
    /// Delay between frames in milliseconds.
    pub frame_interval_ms: u64,
    /// Travel the hue wheel backwards.
    pub reversed: bool,
    /// Draw the hue readout and key help over the color.
    pub show_help: bool,
    /// Quit when a mouse button is pressed.
    pub mouse_quit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed: AnimationSpeed::Normal,
            saturation: 100.0,
            lightness: 50.0,
            frame_interval_ms: 16,
            reversed: false,
            show_help: true,
            mouse_quit: true,
        }
    }
}

impl Config {
    /// Platform directories for huecycle, if the platform has a home.
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "huecycle")
    }

    /// Location of the default config file.
    pub fn default_path() -> Result<PathBuf> {
        Self::project_dirs()
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load settings from `path`, or from the default location when `None`.
    ///
    /// An explicitly given file must exist. A missing default file, or a
    /// platform without a config directory, yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_or_default(Self::default_path().ok().as_deref()),
        }
    }

    /// Load from `path` if it names an existing file, otherwise use the
    /// defaults.
    fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load_from(path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and validate settings from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write settings to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = self.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, text).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the animation cannot work with.
    ///
    /// Saturation and lightness outside 0-100 are accepted as-is; they only
    /// push the color out of gamut.
    pub fn validate(&self) -> Result<()> {
        if !self.saturation.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "saturation must be a finite number, got {}",
                self.saturation
            )));
        }
        if !self.lightness.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "lightness must be a finite number, got {}",
                self.lightness
            )));
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "frame_interval_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Build the hue animation described by these settings, starting at 0.
    pub fn hue_cycle(&self) -> HueCycle {
        HueCycle::new(HueState::default(), self.speed)
            .with_saturation(self.saturation)
            .with_lightness(self.lightness)
            .with_reversed(self.reversed)
    }
}
