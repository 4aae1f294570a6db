//! Data model shared by the price predictor crates

pub mod config;
pub mod locality;
pub mod prediction;
pub mod property;

pub use config::{
    CatalogSettings, ConfigError, PredictorSettings, ServiceSettings, CONFIG_PATH_ENV, DEFAULT_BASE_URL,
    DEFAULT_CONFIG_PATH, DEFAULT_TIMEOUT_SECONDS,
};
pub use locality::LocalityCatalog;
pub use prediction::{PredictionHistory, PredictionId, PredictionResult};
pub use property::{PropertyDescription, PropertyDraft, PropertyField};

// Re-export types that might be needed by other crates
pub type Result<T> = std::result::Result<T, ConfigError>;
