//! Common utilities for service clients

use std::fmt;

use crate::error::{mapping, ErrorContext, ServiceError};

/// UserAgent structure for identifying the client to upstream services
#[derive(Debug, Clone)]
pub struct UserAgent {
    /// Application name
    pub app_name: String,

    /// Version string
    pub version: String,

    /// Optional extra info
    pub extra: Option<String>,
}

impl Default for UserAgent {
    fn default() -> Self {
        Self {
            app_name: "price-predictor".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            extra: Some("prediction-sdk".to_string()),
        }
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.app_name, self.version)?;

        if let Some(ref extra) = self.extra {
            write!(f, " ({})", extra)?;
        }

        Ok(())
    }
}

/// Create error context for HTTP requests
pub fn create_error_context(
    service_name: &str,
    endpoint: &str,
    request_id: Option<&str>,
    status: Option<reqwest::StatusCode>,
) -> ErrorContext {
    let mut context = ErrorContext::for_service(service_name).endpoint(endpoint);

    if let Some(id) = request_id {
        context = context.request_id(id);
    }

    if let Some(status_code) = status {
        context = context.status_code(status_code.as_u16());
    }

    context
}

/// Turn a non-success response into a ServiceError carrying the status, the
/// endpoint and any `detail` from the body
pub async fn parse_error_response(
    service_name: &str,
    endpoint: &str,
    request_id: Option<&str>,
    response: reqwest::Response,
) -> ServiceError {
    let status = response.status();
    let mut context = create_error_context(service_name, endpoint, request_id, Some(status))
        .with("category", mapping::classify_http_error(status));

    // An unreadable body is treated like an empty one
    let body = response.text().await.unwrap_or_default();

    mapping::map_http_error(status, &body, &mut context).with_context(context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_display() {
        let ua = UserAgent {
            app_name: "price-predictor".to_string(),
            version: "1.2.3".to_string(),
            extra: None,
        };
        assert_eq!(ua.to_string(), "price-predictor/1.2.3");

        let ua = UserAgent::default();
        assert!(ua.to_string().ends_with("(prediction-sdk)"));
    }

    #[test]
    fn test_create_error_context() {
        let context = create_error_context(
            "prediction",
            "prediction/predict",
            Some("req-1"),
            Some(reqwest::StatusCode::BAD_REQUEST),
        );
        assert_eq!(context.service, "prediction");
        assert_eq!(context.endpoint.as_deref(), Some("prediction/predict"));
        assert_eq!(context.request_id.as_deref(), Some("req-1"));
        assert_eq!(context.status_code, Some(400));
    }
}
