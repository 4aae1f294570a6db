//! Client builder implementation
//!
//! Builds the `reqwest::Client` shared by every request of a service client.

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client as ReqwestClient;

use crate::error::{Result, ServiceError};

/// Unified client builder for service clients
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    /// Base URL for the service
    base_url: Option<String>,

    /// Custom headers to include with all requests
    custom_headers: HashMap<String, String>,

    /// Request timeout
    timeout: Option<Duration>,

    /// User agent
    user_agent: Option<String>,

    /// Accept gzip-compressed responses
    compression: bool,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            custom_headers: HashMap::new(),
            timeout: Some(Duration::from_secs(30)),
            user_agent: None,
            compression: true,
        }
    }
}

impl ClientBuilder {
    /// Create a new client builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the service
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Add a custom header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.insert(key.into(), value.into());
        self
    }

    /// Set request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Enable or disable compression
    pub fn compression(mut self, enabled: bool) -> Self {
        self.compression = enabled;
        self
    }

    pub fn get_base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn get_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Build an HTTP client with the configured settings
    pub fn build_http_client(&self) -> Result<ReqwestClient> {
        let mut builder = ReqwestClient::builder();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(ref user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        builder = builder.gzip(self.compression);

        let mut headers = HeaderMap::new();
        for (key, value) in &self.custom_headers {
            let header_name = HeaderName::from_str(key)
                .map_err(|e| ServiceError::configuration(format!("Invalid header name: {}", e)))?;

            let header_value = HeaderValue::from_str(value)
                .map_err(|e| ServiceError::configuration(format!("Invalid header value: {}", e)))?;

            headers.insert(header_name, header_value);
        }

        builder = builder.default_headers(headers);

        builder
            .build()
            .map_err(|e| ServiceError::configuration(format!("Failed to build HTTP client: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let builder = ClientBuilder::new();
        assert_eq!(builder.get_timeout(), Some(Duration::from_secs(30)));
        assert!(builder.get_base_url().is_none());
        assert!(builder.build_http_client().is_ok());
    }

    #[test]
    fn test_invalid_header_rejected() {
        let result = ClientBuilder::new().header("bad header", "value").build_http_client();
        assert!(matches!(result, Err(ServiceError::Configuration(_))));
    }

    #[test]
    fn test_settings_applied() {
        let builder = ClientBuilder::new()
            .base_url("http://localhost:8000/api/v1")
            .timeout(Duration::from_millis(250))
            .user_agent("price-predictor/0.1.0")
            .header("Accept", "application/json")
            .compression(false);

        assert_eq!(builder.get_base_url(), Some("http://localhost:8000/api/v1"));
        assert_eq!(builder.get_timeout(), Some(Duration::from_millis(250)));
        assert!(builder.build_http_client().is_ok());
    }
}
