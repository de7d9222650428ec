//! Configuration file loading.
//!
//! One JSON file carries optional `grid`, `layout` and `style` sections.
//! Missing sections use their defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use trigrid_spec::{GridConfig, LayoutConfig};
use trigrid_style::StyleConfig;

/// File name of the per-user configuration.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Combined configuration for every command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub layout: LayoutConfig,
    pub style: StyleConfig,
}

/// Where the configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built-in defaults; no file was read.
    Defaults,
    /// Read from this file.
    File(PathBuf),
}

impl AppConfig {
    /// Default per-user config path: `<config dir>/trigrid/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("trigrid").join(CONFIG_FILE_NAME))
    }

    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, the per-user file is read if
    /// present, otherwise defaults are used.
    pub fn load(explicit: Option<&str>) -> Result<(Self, ConfigSource)> {
        let path = match explicit {
            Some(path) => PathBuf::from(path),
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => path,
                None => {
                    log::debug!("no config file found, using defaults");
                    return Ok((Self::default(), ConfigSource::Defaults));
                }
            },
        };
        let config = Self::from_file(&path)?;
        log::debug!("loaded config from {}", path.display());
        Ok((config, ConfigSource::File(path)))
    }

    /// Reads and validates a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Checks the grid and layout sections.
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.layout.validate()?;
        Ok(())
    }

    /// Pretty JSON form, without the API key.
    pub fn to_json_redacted(&self) -> Result<String> {
        let mut shown = self.clone();
        shown.style.api_key = None;
        Ok(serde_json::to_string_pretty(&shown)?)
    }
}
