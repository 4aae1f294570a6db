//! Price Predictor CLI Library
//!
//! Command-line front end for the property price prediction service:
//!
//! - **predict**: validate a property description and request an estimate
//! - **history**: recent estimates recorded for a locality
//! - **localities**: the configured locality catalog
//! - **health**: probe the prediction service
//!
//! # Example
//!
//! ```bash
//! price-predictor predict --locality Vashi --bhk 3 --area 1200 --lift --parking
//! price-predictor --base-url http://localhost:8000/api/v1 history Vashi --limit 5
//! ```
//!
//! Connection settings are layered: command-line flags, then `PREDICTOR_*`
//! environment variables, then the TOML settings file, then built-in defaults.

pub mod commands;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use prediction_sdk::config::{
    CompositeConfigProvider, ConfigProvider, MemoryConfigProvider, BASE_URL_KEY, DEFAULT_PROVIDER, TIMEOUT_KEY,
};
use prediction_sdk::util::parse_duration;
use prediction_sdk::{PredictionClient, PredictionServiceConfig, ServiceConfig};
use property_types::PredictorSettings;
use tracing::debug;

pub use commands::{HealthCommand, HistoryCommand, LocalitiesCommand, PredictCommand};

/// Exit status when the service could not produce an answer
pub const EXIT_REQUEST_FAILED: u8 = 1;

/// Exit status when local validation rejected the input
pub const EXIT_INVALID_INPUT: u8 = 2;

/// Property price estimates for Navi Mumbai localities
#[derive(Parser, Debug)]
#[command(name = "price-predictor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file (TOML). Defaults to $PREDICTOR_CONFIG_PATH, then
    /// ./config/predictor.toml when present
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the prediction API, e.g. http://localhost:8000/api/v1
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout, e.g. 30s, 500ms, 2m
    #[arg(long, global = true, value_name = "DURATION", value_parser = parse_timeout)]
    pub timeout: Option<Duration>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate the price of a property
    Predict(PredictCommand),

    /// Show recent estimates for a locality
    History(HistoryCommand),

    /// List the supported localities
    Localities(LocalitiesCommand),

    /// Check that the prediction service is up
    Health(HealthCommand),
}

/// Settings and client shared by the network commands
#[derive(Debug, Clone)]
pub struct AppContext {
    pub settings: PredictorSettings,
    pub client: PredictionClient,
}

/// Result type alias for CLI operations
pub type CliResult<T> = anyhow::Result<T>;

fn parse_timeout(raw: &str) -> Result<Duration, String> {
    match parse_duration(raw) {
        Some(d) if !d.is_zero() => Ok(d),
        Some(_) => Err("timeout must be greater than zero".to_string()),
        None => Err(format!("'{}' is not a duration (try 30s, 500ms or 2m)", raw)),
    }
}

impl Cli {
    /// Run the selected command, writing results to `out`
    pub async fn run(&self, out: &mut dyn Write) -> CliResult<ExitCode> {
        match &self.command {
            Commands::Localities(cmd) => cmd.run(&self.load_settings()?, out),
            Commands::Predict(cmd) => cmd.run(&self.context()?, out).await,
            Commands::History(cmd) => cmd.run(&self.context()?, out).await,
            Commands::Health(cmd) => cmd.run(&self.context()?, out).await,
        }
    }

    /// Settings from `--config`, else the default location. An explicit
    /// path must exist; the default one may be absent.
    pub fn load_settings(&self) -> CliResult<PredictorSettings> {
        match &self.config {
            Some(path) => PredictorSettings::load_from(path)
                .with_context(|| format!("Failed to load settings from {}", path.display())),
            None => {
                let path = PredictorSettings::config_path();
                PredictorSettings::load_or_default(&path)
                    .with_context(|| format!("Failed to load settings from {}", path.display()))
            }
        }
    }

    /// Command-line overrides as a config provider
    pub fn overrides(&self) -> MemoryConfigProvider {
        let mut flags = MemoryConfigProvider::new();
        flags.set_opt(BASE_URL_KEY, self.base_url.as_ref());
        flags.set_opt(TIMEOUT_KEY, self.timeout.map(|t| format!("{}ms", t.as_millis())));
        flags
    }

    /// Resolve the service connection: flags, then environment, then file
    pub fn service_config(&self, settings: &PredictorSettings) -> CliResult<PredictionServiceConfig> {
        let providers: Vec<Box<dyn ConfigProvider>> = vec![Box::new(self.overrides()), Box::new(DEFAULT_PROVIDER.clone())];
        let layered = CompositeConfigProvider::with_providers(providers);

        let config = PredictionServiceConfig::from_settings(&settings.service).with_overrides(&layered)?;
        config.validate()?;

        debug!(base_url = %config.base_url, timeout_ms = config.timeout.as_millis() as u64, "service configuration resolved");
        Ok(config)
    }

    /// Settings plus a ready client
    pub fn context(&self) -> CliResult<AppContext> {
        let settings = self.load_settings()?;
        let config = self.service_config(&settings)?;
        let client = PredictionClient::new_with_config(config).context("Failed to create prediction client")?;
        Ok(AppContext { settings, client })
    }
}
