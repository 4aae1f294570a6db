// property-types-rs/src/config.rs
// Settings file loader for the price predictor

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::locality::LocalityCatalog;

/// Environment variable naming the settings file
pub const CONFIG_PATH_ENV: &str = "PREDICTOR_CONFIG_PATH";

/// Settings file used when `PREDICTOR_CONFIG_PATH` is not set
pub const DEFAULT_CONFIG_PATH: &str = "./config/predictor.toml";

/// Local address and API prefix of the prediction backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Main settings structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PredictorSettings {
    #[serde(default)]
    pub service: ServiceSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServiceSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CatalogSettings {
    #[serde(default)]
    pub localities: LocalityCatalog,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl PredictorSettings {
    /// Path of the settings file: `PREDICTOR_CONFIG_PATH` or the default
    pub fn config_path() -> PathBuf {
        env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Read and parse a settings file
    pub fn load_from(path: impl AsRef<Path>) -> Result<PredictorSettings, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let contents = fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded predictor settings");
        Ok(settings)
    }

    /// Like [`PredictorSettings::load_from`], but a missing file yields the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<PredictorSettings, ConfigError> {
        match Self::load_from(path) {
            Err(ConfigError::FileNotFound(missing)) => {
                tracing::debug!(path = %missing, "no settings file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Parse settings from TOML text and validate them
    pub fn from_toml_str(contents: &str) -> Result<PredictorSettings, ConfigError> {
        let settings: PredictorSettings =
            toml::from_str(contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue("service.base_url must not be empty".to_string()));
        }
        if self.service.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue(
                "service.timeout_seconds must be greater than zero".to_string(),
            ));
        }
        if self.catalog.localities.is_empty() {
            return Err(ConfigError::InvalidValue(
                "catalog.localities must list at least one locality".to_string(),
            ));
        }
        Ok(())
    }
}
