// property-types-rs/src/prediction.rs
// Response payloads produced by the prediction service

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque prediction reference. The service currently sends integers, but
/// nothing here depends on that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for PredictionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictionId::Numeric(id) => write!(f, "{}", id),
            PredictionId::Text(id) => f.write_str(id),
        }
    }
}

/// Price estimate returned for a submitted property description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub id: PredictionId,
    pub predicted_total_price: f64,
    pub predicted_price_per_sqft: f64,
    /// Lower bound of the 80% interval
    pub lower_bound: f64,
    /// Upper bound of the 80% interval
    pub upper_bound: f64,
    pub confidence_score: f64,
    pub model_version: String,

    // Echoes of the request, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bhk: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carpet_area_sqft: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl PredictionResult {
    /// True when lower <= predicted <= upper, which the service is expected
    /// (but not guaranteed) to hold.
    pub fn interval_is_ordered(&self) -> bool {
        self.lower_bound <= self.predicted_total_price
            && self.predicted_total_price <= self.upper_bound
    }
}

/// Recent predictions for one locality
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionHistory {
    #[serde(default)]
    pub predictions: Vec<PredictionResult>,
}

impl PredictionHistory {
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }
}
