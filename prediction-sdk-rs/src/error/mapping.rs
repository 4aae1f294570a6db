//! Error mapping for the prediction API
//!
//! The backend reports failures FastAPI-style: a JSON body with a `detail`
//! field. Validation failures (422) send `detail` as a list of objects, which
//! is not a user-facing message and is therefore not extracted.

use reqwest::StatusCode;
use serde_json::Value;

use super::{ErrorContext, ServiceError};
use crate::util::truncate_string;

/// Longest slice of a raw error body kept in an error message
const MAX_BODY_IN_MESSAGE: usize = 100;

/// Extract a non-empty string `detail` field from an error body
pub fn extract_detail(json: &Value) -> Option<String> {
    json.get("detail")
        .and_then(Value::as_str)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

/// Map a non-success HTTP answer to a ServiceError, recording the status and
/// any `detail` in the context
pub fn map_http_error(status: StatusCode, body: &str, context: &mut ErrorContext) -> ServiceError {
    context.status_code = Some(status.as_u16());

    let message = match serde_json::from_str::<Value>(body) {
        Ok(json) => {
            let detail = extract_detail(&json);
            context.detail = detail.clone();

            detail
                .or_else(|| {
                    json.get("message")
                        .or_else(|| json.get("error"))
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or_else(|| status_message(status, body))
        }
        Err(_) => status_message(status, body),
    };

    match status {
        StatusCode::NOT_FOUND => ServiceError::not_found(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => ServiceError::timeout(message),
        _ => ServiceError::service(message),
    }
}

fn status_message(status: StatusCode, body: &str) -> String {
    if body.is_empty() {
        status.to_string()
    } else {
        format!("{}: {}", status, truncate_string(body, MAX_BODY_IN_MESSAGE))
    }
}

/// Helper function to classify HTTP errors by category
pub fn classify_http_error(status: StatusCode) -> &'static str {
    match status.as_u16() {
        400 => "bad_request",
        404 => "not_found",
        408 | 504 => "timeout",
        422 => "unprocessable",
        400..=499 => "client",
        500..=599 => "server",
        _ => "unknown",
    }
}
