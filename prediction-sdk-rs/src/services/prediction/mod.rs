//! Prediction service client
//!
//! Talks to the price prediction backend:
//!
//! - `POST {base}/prediction/predict` with a [`PropertyDescription`]
//! - `GET {base}/prediction/history/{locality}?limit=N`
//! - `GET {origin}/health`
//!
//! Every request carries a fresh `X-Request-ID`. Nothing is retried; a failed
//! call surfaces as a [`PredictionRequestError`] whose message is the server's
//! `detail` when it sent one.

mod models;
pub use models::*;

use std::time::Duration;

use async_trait::async_trait;
use property_types::{PredictionHistory, PredictionResult, PropertyDescription};
use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};
use url::Url;

use crate::config::{PredictionServiceConfig, ServiceConfig, DEFAULT_PROVIDER};
use crate::core::{ClientBuilder, Predictor, RequestExecutor, ServiceClient};
use crate::error::{
    PredictionRequestError, Result, ServiceError, GENERIC_HISTORY_ERROR, GENERIC_PREDICTION_ERROR,
};
use crate::services::common::{create_error_context, parse_error_response, UserAgent};
use crate::util::{generate_request_id, measure_time_async};

/// Name used in logs and error contexts
pub const SERVICE_NAME: &str = "prediction";

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Endpoint of the prediction call, relative to the base URL
pub const PREDICT_ENDPOINT: &str = "prediction/predict";

const HISTORY_ENDPOINT: &str = "prediction/history/";

/// Client for the prediction backend
#[derive(Debug, Clone)]
pub struct PredictionClient {
    /// HTTP client, built once and reused
    http_client: Client,

    /// Configuration
    config: PredictionServiceConfig,

    /// Base URL with a trailing slash
    base: Url,
}

impl PredictionClient {
    /// Create a client from settings-file values overridden by `PREDICTOR_*`
    /// environment variables
    pub fn from_settings(settings: &property_types::ServiceSettings) -> Result<Self> {
        Self::new_with_config(PredictionServiceConfig::resolve(settings)?)
    }

    /// Create a new client with custom configuration
    pub fn new_with_config(config: PredictionServiceConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    /// Create a new builder for the prediction client
    pub fn builder() -> PredictionClientBuilder {
        PredictionClientBuilder::default()
    }

    pub fn config(&self) -> &PredictionServiceConfig {
        &self.config
    }

    /// Request a price estimate for a validated property
    pub async fn predict(
        &self,
        description: &PropertyDescription,
    ) -> std::result::Result<PredictionResult, PredictionRequestError> {
        let (result, elapsed): (Result<PredictionResult>, Duration) =
            measure_time_async(|| self.post(PREDICT_ENDPOINT, description)).await;

        match result {
            Ok(prediction) => {
                info!(
                    locality = %description.locality_name,
                    bhk = description.bhk,
                    predicted_total_price = prediction.predicted_total_price,
                    confidence = prediction.confidence_score,
                    latency_ms = elapsed.as_millis() as u64,
                    "prediction received"
                );
                Ok(prediction)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    status = ?e.status_code(),
                    latency_ms = elapsed.as_millis() as u64,
                    "prediction request failed"
                );
                Err(PredictionRequestError::from_service_error(e, GENERIC_PREDICTION_ERROR))
            }
        }
    }

    /// Most recent predictions stored for a locality, newest first
    pub async fn history(
        &self,
        locality: &str,
        limit: u32,
    ) -> std::result::Result<PredictionHistory, PredictionRequestError> {
        let result = match self.history_url(locality) {
            Ok(url) => {
                let request = self.http_client.get(url).query(&HistoryQuery { limit });
                self.send(request, HISTORY_ENDPOINT).await
            }
            Err(e) => Err(e),
        };

        result
            .map(|history: PredictionHistory| {
                debug!(locality, count = history.len(), "history received");
                history
            })
            .map_err(|e| {
                warn!(locality, error = %e, "history request failed");
                PredictionRequestError::from_service_error(e, GENERIC_HISTORY_ERROR)
            })
    }

    /// Resolve an endpoint against the base URL, keeping the API prefix
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        self.base
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| ServiceError::validation(format!("Invalid endpoint '{}': {}", endpoint, e)))
    }

    /// History URL with the locality as a single percent-encoded path segment
    fn history_url(&self, locality: &str) -> Result<Url> {
        let mut url = self.endpoint_url(HISTORY_ENDPOINT)?;
        url.path_segments_mut()
            .map_err(|_| ServiceError::validation(format!("Base URL cannot carry a path: {}", self.base)))?
            .pop_if_empty()
            .push(locality);
        Ok(url)
    }

    fn health_url(&self) -> Result<Url> {
        self.base
            .join("/health")
            .map_err(|e| ServiceError::validation(format!("Invalid health URL: {}", e)))
    }

    /// Send a prepared request and decode a success body as `R`
    async fn send<R>(&self, request: RequestBuilder, endpoint: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let request_id = generate_request_id();
        debug!(endpoint, request_id = %request_id, "sending request");

        let response = request
            .header(REQUEST_ID_HEADER, &request_id)
            .send()
            .await
            .map_err(|e| {
                ServiceError::from(e).with_context(create_error_context(
                    SERVICE_NAME,
                    endpoint,
                    Some(&request_id),
                    None,
                ))
            })?;

        let status = response.status();
        debug!(endpoint, request_id = %request_id, status = status.as_u16(), "response received");

        if !status.is_success() {
            return Err(parse_error_response(SERVICE_NAME, endpoint, Some(&request_id), response).await);
        }

        response.json::<R>().await.map_err(|e| {
            ServiceError::parsing(format!("Failed to parse response: {}", e)).with_context(
                create_error_context(SERVICE_NAME, endpoint, Some(&request_id), Some(status)),
            )
        })
    }
}

#[async_trait]
impl ServiceClient for PredictionClient {
    fn name(&self) -> &str {
        SERVICE_NAME
    }

    fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn version(&self) -> &str {
        "v1"
    }

    async fn health_check(&self) -> Result<bool> {
        let url = self.health_url()?;

        match self.send::<HealthStatus>(self.http_client.get(url), "health").await {
            Ok(status) if status.is_healthy() => Ok(true),
            Ok(status) => {
                warn!(status = %status.status, "prediction service reports unhealthy");
                Ok(false)
            }
            Err(e) => {
                warn!(error = %e, "prediction service health check failed");
                Ok(false)
            }
        }
    }
}

#[async_trait]
impl RequestExecutor for PredictionClient {
    async fn get<R>(&self, endpoint: &str, query_params: &[(&str, String)]) -> Result<R>
    where
        R: DeserializeOwned + Send,
    {
        let url = self.endpoint_url(endpoint)?;
        self.send(self.http_client.get(url).query(query_params), endpoint).await
    }

    async fn post<T, R>(&self, endpoint: &str, body: &T) -> Result<R>
    where
        T: Serialize + Send + Sync,
        R: DeserializeOwned + Send,
    {
        let url = self.endpoint_url(endpoint)?;
        self.send(self.http_client.post(url).json(body), endpoint).await
    }
}

#[async_trait]
impl Predictor for PredictionClient {
    async fn predict(
        &self,
        description: &PropertyDescription,
    ) -> std::result::Result<PredictionResult, PredictionRequestError> {
        PredictionClient::predict(self, description).await
    }
}

/// Builder for the prediction client
#[derive(Debug, Default)]
pub struct PredictionClientBuilder {
    /// Complete configuration; environment defaults are used when absent
    config: Option<PredictionServiceConfig>,

    /// Base URL override
    base_url: Option<String>,

    /// Timeout override
    timeout: Option<Duration>,

    /// User agent sent with every request
    user_agent: Option<UserAgent>,
}

impl PredictionClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a complete configuration
    pub fn config(mut self, config: PredictionServiceConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the transport timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: UserAgent) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    /// Build the prediction client
    pub fn build(self) -> Result<PredictionClient> {
        let mut config = match self.config {
            Some(config) => config,
            None => PredictionServiceConfig::from_provider(&**DEFAULT_PROVIDER).unwrap_or_else(|e| {
                warn!(error = %e, "invalid prediction service environment, using defaults");
                PredictionServiceConfig::default()
            }),
        };

        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }

        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }

        config.validate()?;
        let base = config.base()?;

        let http_client = ClientBuilder::new()
            .base_url(base.as_str())
            .timeout(config.timeout)
            .user_agent(self.user_agent.unwrap_or_default().to_string())
            .header("Accept", "application/json")
            .build_http_client()?;

        debug!(base_url = %base, timeout_ms = config.timeout.as_millis() as u64, "prediction client ready");

        Ok(PredictionClient {
            http_client,
            config,
            base,
        })
    }
}
