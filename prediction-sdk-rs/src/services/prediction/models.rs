//! Wire models specific to the prediction service

use serde::{Deserialize, Serialize};

/// Answer of `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,

    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(default)]
    pub service: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Query string of the history endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryQuery {
    pub limit: u32,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// Number of history entries the backend returns when none is asked for
pub const DEFAULT_HISTORY_LIMIT: u32 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status() {
        let status: HealthStatus = serde_json::from_str(
            r#"{"status": "healthy", "timestamp": "2024-01-01T00:00:00", "service": "Navi Mumbai House Price Predictor"}"#,
        )
        .unwrap();
        assert!(status.is_healthy());

        let status: HealthStatus = serde_json::from_str(r#"{"status": "degraded"}"#).unwrap();
        assert!(!status.is_healthy());
        assert!(status.service.is_none());
    }
}
