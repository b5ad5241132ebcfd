use crate::marker::{Marker, MarkerKind};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("home directory not found")]
    HomeDirNotFound,
    #[error("Failed to load config at path: {0} - error: {1}")]
    Io(PathBuf, std::io::Error),
    #[error("Failed to deserialize config at path: {0} - error: {1}")]
    Yaml(PathBuf, serde_yaml::Error),
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// User-facing config for the detector and the markers it produces
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub markers: MarkerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            markers: MarkerConfig::default(),
        }
    }
}

impl Config {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(self.log_level.as_str())
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Badge, tooltip, and emphasis color used when rendering duplicated tabs
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MarkerConfig {
    #[serde(default = "default_badge")]
    pub badge: String,
    #[serde(default = "default_tooltip")]
    pub tooltip: String,
    /// The theme color applied to the active duplicate.  `null` disables emphasis.
    #[serde(default = "default_active_color")]
    pub active_color: Option<String>,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            badge: default_badge(),
            tooltip: default_tooltip(),
            active_color: default_active_color(),
        }
    }
}

impl MarkerConfig {
    /// Builds the marker rendered for the given kind
    pub fn marker(&self, kind: MarkerKind) -> Marker {
        let color = match kind {
            MarkerKind::ActiveDuplicate => self.active_color.clone(),
            MarkerKind::OtherDuplicate => None,
        };

        Marker {
            kind,
            badge: self.badge.clone(),
            tooltip: self.tooltip.clone(),
            color,
        }
    }
}

fn default_badge() -> String {
    "🖇️".to_string()
}

fn default_tooltip() -> String {
    "File open in multiple groups".to_string()
}

fn default_active_color() -> Option<String> {
    Some("charts.blue".to_string())
}

pub fn dotdir_path() -> Result<PathBuf, ConfigError> {
    let mut dir = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;

    dir.push(".tabtwin");

    Ok(dir)
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    if let Some(path) = crate::env::config_override() {
        return Ok(path);
    }

    let mut path = dotdir_path()?;
    path.push("tabtwin.yml");
    Ok(path)
}

/// Loads the user config, or returns the default config if the file does not exist
pub fn load_config() -> Result<Config, ConfigError> {
    let path = config_path()?;
    load_config_from(path.as_path())
}

pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.is_file() {
        log::debug!("File {:?} does not exist, using the default config", path);
        return Ok(Config::default());
    }

    let file = File::open(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
    let reader = BufReader::new(file);
    let config: Config =
        serde_yaml::from_reader(reader).map_err(|err| ConfigError::Yaml(path.to_path_buf(), err))?;

    config.level_filter()?;

    Ok(config)
}
