use crate::calc::{UnitMode, DEFAULT_PRECISION};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// File name looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "bmi.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    // Unit mode selected when the calculator starts
    #[serde(default)]
    pub units: UnitMode,

    // Decimals shown for the computed ratio
    #[serde(default = "default_precision")]
    pub precision: u8,
}

fn default_precision() -> u8 {
    DEFAULT_PRECISION
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load `path` if given, otherwise `./bmi.toml` when it exists, otherwise defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_or_default_in(path, Path::new("."))
    }

    /// Same as [`Config::load_or_default`], looking for `bmi.toml` in `dir`
    pub fn load_or_default_in(path: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        let default_path = dir.join(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            log::debug!("Using config file {}", default_path.display());
            Self::load_from_file(default_path)
        } else {
            Ok(Self::empty())
        }
    }

    pub fn empty() -> Self {
        Self {
            units: UnitMode::default(),
            precision: default_precision(),
        }
    }
}
