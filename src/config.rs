//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/qwi-sunburst/config.toml`
//! 3. Environment variables: `QWI_*` prefix
//! 4. Command-line arguments (applied by the CLI layer)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::infrastructure::census::DEFAULT_ENDPOINT;
use crate::infrastructure::traits::QwiQuery;

/// Tool settings. All fields have compiled defaults, so a missing config
/// file is not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// QWI timeseries endpoint
    pub endpoint: String,
    /// Census API key; requests work without one at low volume
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Indicator to chart: Emp, EarnS, FrmJbGn or FrmJbLs
    pub indicator: String,
    /// FIPS state code
    pub state: String,
    pub year: String,
    pub quarter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            indicator: "Emp".to_string(),
            state: "02".to_string(),
            year: "2012".to_string(),
            quarter: "1".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the global config location and environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings from an explicit config file (or defaults when absent),
    /// then apply `QWI_*` environment overrides.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = Settings::default();

        let mut builder = Config::builder()
            .set_default("endpoint", defaults.endpoint)?
            .set_default("indicator", defaults.indicator)?
            .set_default("state", defaults.state)?
            .set_default("year", defaults.year)?
            .set_default("quarter", defaults.quarter)?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path.to_path_buf()).required(false));
        }

        builder
            .add_source(Environment::with_prefix("QWI"))
            .build()?
            .try_deserialize()
    }

    /// Selector derived from these settings.
    pub fn query(&self) -> QwiQuery {
        QwiQuery {
            indicator: self.indicator.clone(),
            state: self.state.clone(),
            year: self.year.clone(),
            quarter: self.quarter.clone(),
        }
    }
}

/// `$XDG_CONFIG_HOME/qwi-sunburst/config.toml`, if a home directory exists.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "qwi-sunburst").map(|dirs| dirs.config_dir().join("config.toml"))
}
