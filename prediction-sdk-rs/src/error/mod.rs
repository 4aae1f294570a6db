//! Error handling for the prediction SDK
//!
//! Two layers:
//! - [`ServiceError`] classifies what went wrong on the wire (network,
//!   timeout, non-success status, undecodable body, bad configuration) and
//!   carries an [`ErrorContext`] with the status, endpoint and any
//!   server-supplied `detail`.
//! - [`PredictionRequestError`] is what callers show to the user: a single
//!   display message, taken from the server's `detail` when present and a
//!   generic fallback otherwise.

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

pub mod mapping;

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Message shown when a prediction fails without a server-supplied detail
pub const GENERIC_PREDICTION_ERROR: &str = "Error generating prediction";

/// Message shown when a history lookup fails without a server-supplied detail
pub const GENERIC_HISTORY_ERROR: &str = "Error fetching prediction history";

/// Main error type for the SDK
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Network or connection errors
    #[error("Network error: {0}")]
    Network(String),

    /// Timeout errors
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Non-success answer from the service
    #[error("Service error: {0}")]
    Service(String),

    /// Resource not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request could not be built (bad URL, unserializable body)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Response parsing errors
    #[error("Parsing error: {0}")]
    Parsing(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unexpected or internal errors
    #[error("Internal error: {0}")]
    Internal(String),

    /// Errors with additional context
    #[error("{inner}")]
    WithContext {
        inner: Box<ServiceError>,
        context: ErrorContext,
    },
}

impl ServiceError {
    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        ServiceError::Network(message.into())
    }

    /// Create a timeout error
    pub fn timeout(message: impl Into<String>) -> Self {
        ServiceError::Timeout(message.into())
    }

    /// Create a service-specific error
    pub fn service(message: impl Into<String>) -> Self {
        ServiceError::Service(message.into())
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        ServiceError::NotFound(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::Validation(message.into())
    }

    /// Create a parsing error
    pub fn parsing(message: impl Into<String>) -> Self {
        ServiceError::Parsing(message.into())
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        ServiceError::Configuration(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        ServiceError::Internal(message.into())
    }

    /// Add context to an existing error
    pub fn with_context(self, context: ErrorContext) -> Self {
        ServiceError::WithContext {
            inner: Box::new(self),
            context,
        }
    }

    /// Add a single context key/value to an existing error
    pub fn with_context_value(self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        let mut context = ErrorContext::new();
        context.add(key, value);
        self.with_context(context)
    }

    /// The error without any context wrappers
    pub fn root(&self) -> &ServiceError {
        match self {
            ServiceError::WithContext { inner, .. } => inner.root(),
            other => other,
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            ServiceError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the service name if available
    pub fn service_name(&self) -> Option<&str> {
        self.context().map(|c| c.service.as_str())
    }

    /// Get the HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ServiceError::WithContext { inner, context } => context.status_code.or_else(|| inner.status_code()),
            _ => None,
        }
    }

    /// Get the request ID if available
    pub fn request_id(&self) -> Option<&str> {
        match self {
            ServiceError::WithContext { inner, context } => {
                context.request_id.as_deref().or_else(|| inner.request_id())
            }
            _ => None,
        }
    }

    /// Server-supplied `detail` message, if the error body carried one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ServiceError::WithContext { inner, context } => context.detail.as_deref().or_else(|| inner.detail()),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self.root(), ServiceError::Timeout(_))
    }
}

/// Error context information
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Service that generated the error
    pub service: String,

    /// Time the error was recorded
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,

    /// HTTP status code if applicable
    pub status_code: Option<u16>,

    /// Request ID for tracing
    pub request_id: Option<String>,

    /// Endpoint that was called
    pub endpoint: Option<String>,

    /// `detail` field of the error body, verbatim
    pub detail: Option<String>,

    /// Additional context data
    pub data: HashMap<String, String>,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            service: "unknown".to_string(),
            timestamp: Some(chrono::Utc::now()),
            status_code: None,
            request_id: None,
            endpoint: None,
            detail: None,
            data: HashMap::new(),
        }
    }
}

impl ErrorContext {
    /// Create a new error context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new error context for a specific service
    pub fn for_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            ..Self::default()
        }
    }

    /// Add an HTTP status code
    pub fn status_code(mut self, code: u16) -> Self {
        self.status_code = Some(code);
        self
    }

    /// Add a request ID
    pub fn request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    /// Add an endpoint
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Add a context value
    pub fn add<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: fmt::Display,
    {
        self.data.insert(key.into(), value.to_string());
    }

    /// Add a context value and return self (builder pattern)
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: fmt::Display,
    {
        self.add(key, value);
        self
    }
}

/// User-facing failure of a remote call. Displays as its message only.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct PredictionRequestError {
    message: String,
    #[source]
    source: ServiceError,
}

impl PredictionRequestError {
    /// Wrap a service error, preferring the server's `detail` over `fallback`
    pub fn from_service_error(source: ServiceError, fallback: &str) -> Self {
        let message = source
            .detail()
            .filter(|d| !d.is_empty())
            .unwrap_or(fallback)
            .to_string();
        Self { message, source }
    }

    /// Message to show the user
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status of the failed call, if the service answered at all
    pub fn status_code(&self) -> Option<u16> {
        self.source.status_code()
    }

    /// The classified transport-level error
    pub fn cause(&self) -> &ServiceError {
        &self.source
    }
}

/// Convert reqwest errors to ServiceError
impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        let context = ErrorContext::for_service("http_client");

        let service_error = if err.is_timeout() {
            ServiceError::timeout(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            ServiceError::network(format!("Connection error: {}", err))
        } else if err.is_builder() {
            ServiceError::validation(format!("Invalid request: {}", err))
        } else if err.is_redirect() {
            ServiceError::network(format!("Too many redirects: {}", err))
        } else if err.is_decode() {
            ServiceError::parsing(format!("Response decode error: {}", err))
        } else if err.is_request() || err.is_body() {
            ServiceError::network(format!("Request failed: {}", err))
        } else {
            ServiceError::internal(format!("HTTP client error: {}", err))
        };

        // Add status code if available
        if let Some(status) = err.status() {
            service_error.with_context(context.status_code(status.as_u16()))
        } else {
            service_error.with_context(context)
        }
    }
}

/// Convert serde_json errors to ServiceError
impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::parsing(format!("JSON error: {}", err)).with_context(ErrorContext::for_service("json"))
    }
}
