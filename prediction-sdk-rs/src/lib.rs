//! # Prediction SDK
//!
//! Client side of the property price estimator.
//!
//! This crate provides:
//!
//! - [`PredictionClient`]: typed HTTP client for the prediction backend
//! - [`PredictionRequestError`]: one display message per failed call, on top
//!   of the [`ServiceError`] taxonomy
//! - [`presenter`]: crore/lakh currency formatting and confidence rendering
//! - [`PredictionSession`]: draft, pending flag and last outcome of one form
//! - Configuration providers layered over the TOML settings file
//!
//! ## Architecture
//!
//! - `ServiceClient`: identity and health of a remote service
//! - `RequestExecutor`: typed GET/POST against a base URL
//! - `Predictor`: the seam between a session and the transport
//!
//! The library logs through `tracing` and never installs a subscriber.

pub mod core;
pub use core::{ClientBuilder, Predictor, RequestExecutor, ServiceClient};

pub mod services;
pub use services::prediction::{PredictionClient, PredictionClientBuilder};
pub use services::UserAgent;

pub mod error;
pub use error::{
    ErrorContext, PredictionRequestError, Result, ServiceError, GENERIC_HISTORY_ERROR, GENERIC_PREDICTION_ERROR,
};

pub mod config;
pub use config::{ConfigProvider, ConfigProviderExt, PredictionServiceConfig, ServiceConfig};

pub mod presenter;
pub use presenter::{format_currency, ConfidenceDisplay, PredictionView};

pub mod session;
pub use session::{PredictionSession, SessionError, SubmissionOutcome};

// Utility module for common functionality
pub mod util;

#[cfg(test)]
mod tests;

/// Create a prediction client builder
pub fn client() -> PredictionClientBuilder {
    PredictionClient::builder()
}
