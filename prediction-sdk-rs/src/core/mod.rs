//! Core abstractions for the prediction SDK
//!
//! - `ServiceClient`: identity and health of a remote service
//! - `RequestExecutor`: typed GET/POST against the service base URL
//! - `Predictor`: the single operation a submission session needs
//! - `ClientBuilder`: builder for the underlying HTTP client

pub mod builder;
pub use builder::ClientBuilder;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use property_types::{PredictionResult, PropertyDescription};

use crate::error::{PredictionRequestError, Result};

/// Base trait for all service clients
#[async_trait]
pub trait ServiceClient: Send + Sync {
    /// The client name/identifier
    fn name(&self) -> &str;

    /// The base URL for the service
    fn base_url(&self) -> &str;

    /// Service version
    fn version(&self) -> &str;

    /// Health check for the service. `Ok(false)` means the service answered
    /// but is not healthy or could not be reached.
    async fn health_check(&self) -> Result<bool>;
}

/// Trait responsible for executing HTTP requests with strong typing.
/// Endpoints are relative to the client's base URL.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Execute a GET request
    async fn get<R>(&self, endpoint: &str, query_params: &[(&str, String)]) -> Result<R>
    where
        R: DeserializeOwned + Send;

    /// Execute a POST request with a JSON body
    async fn post<T, R>(&self, endpoint: &str, body: &T) -> Result<R>
    where
        T: Serialize + Send + Sync,
        R: DeserializeOwned + Send;
}

/// Anything that can turn a validated description into an estimate
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Predictor: Send + Sync {
    async fn predict(
        &self,
        description: &PropertyDescription,
    ) -> std::result::Result<PredictionResult, PredictionRequestError>;
}
