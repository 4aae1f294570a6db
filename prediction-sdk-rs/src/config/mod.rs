//! Configuration management for the prediction client
//!
//! Key/value providers (environment, in-memory, composite) layered over the
//! TOML settings from `property_types`. Keys are lower snake_case; the
//! environment provider maps `base_url` to `PREDICTOR_BASE_URL`.

use std::collections::HashMap;
use std::env;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::Lazy;
use property_types::{ServiceSettings, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use url::Url;

use crate::error::{Result, ServiceError};
use crate::util::parse_duration;

/// Prefix of every environment variable read by the default provider
pub const ENV_PREFIX: &str = "PREDICTOR";

/// Provider key for the service base URL
pub const BASE_URL_KEY: &str = "base_url";

/// Provider key for the request timeout ("30s", "500ms", "2m" or seconds)
pub const TIMEOUT_KEY: &str = "timeout";

/// Base trait for configuration providers
pub trait ConfigProvider: Send + Sync {
    /// Get a string configuration value
    fn get_string(&self, key: &str) -> Result<String>;
}

/// Extension methods for configuration providers
pub trait ConfigProviderExt: ConfigProvider {
    /// Get an integer configuration value
    fn get_int(&self, key: &str) -> Result<i64> {
        let value = self.get_string(key)?;
        value
            .trim()
            .parse::<i64>()
            .map_err(|e| ServiceError::configuration(format!("Invalid integer for key {}: {}", key, e)))
    }

    /// Get a boolean configuration value
    fn get_bool(&self, key: &str) -> Result<bool> {
        let value = self.get_string(key)?;
        match value.to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(true),
            "false" | "no" | "0" | "off" => Ok(false),
            _ => Err(ServiceError::configuration(format!(
                "Invalid boolean value for key {}: {}",
                key, value
            ))),
        }
    }

    /// Get a duration configuration value
    fn get_duration(&self, key: &str) -> Result<Duration> {
        let value = self.get_string(key)?;
        parse_duration(&value)
            .ok_or_else(|| ServiceError::configuration(format!("Invalid duration for key {}: {}", key, value)))
    }

    /// Get a string configuration value with a default
    fn get_string_or(&self, key: &str, default: &str) -> String {
        self.get_string(key).unwrap_or_else(|_| default.to_string())
    }

    /// Get an integer configuration value with a default
    fn get_int_or(&self, key: &str, default: i64) -> i64 {
        self.get_int(key).unwrap_or(default)
    }

    /// Get a boolean configuration value with a default
    fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.get_bool(key).unwrap_or(default)
    }
}

impl<T: ConfigProvider + ?Sized> ConfigProviderExt for T {}

impl<P: ConfigProvider + ?Sized> ConfigProvider for Box<P> {
    fn get_string(&self, key: &str) -> Result<String> {
        (**self).get_string(key)
    }
}

impl<P: ConfigProvider + ?Sized> ConfigProvider for Arc<P> {
    fn get_string(&self, key: &str) -> Result<String> {
        (**self).get_string(key)
    }
}

/// Environment variable based configuration provider
#[derive(Debug, Clone, Default)]
pub struct EnvConfigProvider {
    /// Optional prefix for environment variables
    prefix: Option<String>,
}

impl EnvConfigProvider {
    /// Create a new environment variable config provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a prefix for environment variables
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Format a configuration key as an environment variable
    pub fn format_key(&self, key: &str) -> String {
        let mut env_key = String::new();

        if let Some(ref prefix) = self.prefix {
            env_key.push_str(prefix);
            env_key.push('_');
        }

        env_key.push_str(&key.to_uppercase().replace(|c: char| !c.is_ascii_alphanumeric(), "_"));

        env_key
    }
}

impl ConfigProvider for EnvConfigProvider {
    fn get_string(&self, key: &str) -> Result<String> {
        let env_key = self.format_key(key);

        env::var(&env_key).map_err(|e| match e {
            env::VarError::NotPresent => {
                ServiceError::configuration(format!("Environment variable not set: {}", env_key))
            }
            env::VarError::NotUnicode(_) => {
                ServiceError::configuration(format!("Environment variable is not valid unicode: {}", env_key))
            }
        })
    }
}

/// In-memory config provider for tests and command-line overrides
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigProvider {
    values: HashMap<String, String>,
}

impl MemoryConfigProvider {
    /// Create a new empty memory config provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory config provider with initial values
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Set a configuration value
    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: ToString,
    {
        self.values.insert(key.into(), value.to_string());
    }

    /// Set a configuration value only when one is given
    pub fn set_opt<K, V>(&mut self, key: K, value: Option<V>)
    where
        K: Into<String>,
        V: ToString,
    {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ConfigProvider for MemoryConfigProvider {
    fn get_string(&self, key: &str) -> Result<String> {
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| ServiceError::configuration(format!("Configuration key not found: {}", key)))
    }
}

/// A composite config provider that tries multiple providers in order
#[derive(Debug, Clone)]
pub struct CompositeConfigProvider<P: ConfigProvider> {
    providers: Vec<P>,
}

impl<P: ConfigProvider> Default for CompositeConfigProvider<P> {
    fn default() -> Self {
        Self { providers: Vec::new() }
    }
}

impl<P: ConfigProvider> CompositeConfigProvider<P> {
    /// Create a new composite config provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a provider to the chain; earlier providers win
    pub fn add_provider(&mut self, provider: P) {
        self.providers.push(provider);
    }

    /// Create a new provider with an initial list
    pub fn with_providers(providers: Vec<P>) -> Self {
        Self { providers }
    }
}

impl<P: ConfigProvider> ConfigProvider for CompositeConfigProvider<P> {
    fn get_string(&self, key: &str) -> Result<String> {
        self.providers
            .iter()
            .find_map(|provider| provider.get_string(key).ok())
            .ok_or_else(|| {
                ServiceError::configuration(format!("Configuration key not found in any provider: {}", key))
            })
    }
}

/// Global default configuration provider
pub static DEFAULT_PROVIDER: Lazy<Arc<EnvConfigProvider>> =
    Lazy::new(|| Arc::new(EnvConfigProvider::new().with_prefix(ENV_PREFIX)));

/// Trait for service-specific configuration
pub trait ServiceConfig: Debug + Send + Sync {
    /// Validate this configuration
    fn validate(&self) -> Result<()>;

    /// Service name
    fn service_name(&self) -> &str;
}

/// Connection settings for the prediction service
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionServiceConfig {
    /// Base URL including the API prefix, e.g. `http://localhost:8000/api/v1`
    pub base_url: String,

    /// Transport timeout for every request
    pub timeout: Duration,
}

impl Default for PredictionServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

impl PredictionServiceConfig {
    /// Start from the `[service]` section of a settings file
    pub fn from_settings(settings: &ServiceSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            timeout: Duration::from_secs(settings.timeout_seconds),
        }
    }

    /// Load configuration from a config provider, falling back to defaults
    /// for missing keys
    pub fn from_provider<P: ConfigProvider + ?Sized>(provider: &P) -> Result<Self> {
        let config = Self::default().with_overrides(provider)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace values the provider knows about. A present but unparsable
    /// timeout is an error rather than a silent fallback.
    pub fn with_overrides<P: ConfigProvider + ?Sized>(mut self, provider: &P) -> Result<Self> {
        if let Ok(base_url) = provider.get_string(BASE_URL_KEY) {
            self.base_url = base_url;
        }

        if provider.get_string(TIMEOUT_KEY).is_ok() {
            self.timeout = provider.get_duration(TIMEOUT_KEY)?;
        }

        Ok(self)
    }

    /// Settings file values overridden by the default environment provider
    pub fn resolve(settings: &ServiceSettings) -> Result<Self> {
        let config = Self::from_settings(settings).with_overrides(&**DEFAULT_PROVIDER)?;
        config.validate()?;
        Ok(config)
    }

    /// The base URL parsed, with a trailing slash so relative joins keep the
    /// API prefix
    pub fn base(&self) -> Result<Url> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Url::parse(&raw)
            .map_err(|e| ServiceError::configuration(format!("Invalid base URL '{}': {}", self.base_url, e)))
    }
}

impl ServiceConfig for PredictionServiceConfig {
    fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ServiceError::configuration("Prediction service base URL is required"));
        }

        let url = self.base()?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ServiceError::configuration(format!(
                "Prediction service base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.timeout.is_zero() {
            return Err(ServiceError::configuration("Request timeout must be greater than zero"));
        }

        Ok(())
    }

    fn service_name(&self) -> &str {
        "prediction"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_config_provider() {
        let mut provider = MemoryConfigProvider::new();
        provider.set("key1", "value1");
        provider.set("key2", "123");

        assert_eq!(provider.get_string("key1").unwrap(), "value1");
        assert_eq!(provider.get_int("key2").unwrap(), 123);
        assert!(provider.get_string("key3").is_err());
    }

    #[test]
    fn test_env_key_format() {
        let provider = EnvConfigProvider::new().with_prefix(ENV_PREFIX);

        assert_eq!(provider.format_key(BASE_URL_KEY), "PREDICTOR_BASE_URL");
        assert_eq!(provider.format_key(TIMEOUT_KEY), "PREDICTOR_TIMEOUT");
        assert_eq!(provider.format_key("config-path"), "PREDICTOR_CONFIG_PATH");
    }

    #[test]
    fn test_composite_config_provider() {
        let mut flags = MemoryConfigProvider::new();
        flags.set(BASE_URL_KEY, "http://flags");

        let mut env = MemoryConfigProvider::new();
        env.set(BASE_URL_KEY, "http://env");
        env.set(TIMEOUT_KEY, "5s");

        let provider = CompositeConfigProvider::with_providers(vec![flags, env]);

        assert_eq!(provider.get_string(BASE_URL_KEY).unwrap(), "http://flags");
        assert_eq!(provider.get_duration(TIMEOUT_KEY).unwrap(), Duration::from_secs(5));
        assert!(provider.get_string("missing").is_err());
    }

    #[test]
    fn test_from_provider_defaults() {
        let config = PredictionServiceConfig::from_provider(&MemoryConfigProvider::new()).unwrap();
        assert_eq!(config, PredictionServiceConfig::default());
        assert_eq!(config.base_url, "http://localhost:8000/api/v1");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_invalid_timeout_is_an_error() {
        let mut provider = MemoryConfigProvider::new();
        provider.set(TIMEOUT_KEY, "eventually");
        assert!(PredictionServiceConfig::from_provider(&provider).is_err());

        provider.set(TIMEOUT_KEY, "0s");
        assert!(PredictionServiceConfig::from_provider(&provider).is_err());
    }

    #[test]
    fn test_validate_base_url() {
        let mut config = PredictionServiceConfig::default();
        assert!(config.validate().is_ok());

        config.base_url = "   ".to_string();
        assert!(config.validate().is_err());

        config.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        config.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_base_keeps_api_prefix() {
        let config = PredictionServiceConfig::default();
        let url = config.base().unwrap().join("prediction/predict").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/v1/prediction/predict");

        let config = PredictionServiceConfig {
            base_url: "http://localhost:8000/api/v1/".to_string(),
            ..Default::default()
        };
        let url = config.base().unwrap().join("prediction/predict").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/v1/prediction/predict");
    }

    #[test]
    fn test_from_settings() {
        let settings = ServiceSettings {
            base_url: "https://predict.example.com/api/v1".to_string(),
            timeout_seconds: 12,
        };
        let config = PredictionServiceConfig::from_settings(&settings);
        assert_eq!(config.base_url, "https://predict.example.com/api/v1");
        assert_eq!(config.timeout, Duration::from_secs(12));
    }
}
