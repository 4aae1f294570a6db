//! Result panel rendering

use std::fmt;

use property_types::{PredictionHistory, PredictionResult};

use super::confidence::ConfidenceDisplay;
use super::currency::{format_currency, format_price_per_sqft};

/// Cells in the terminal confidence bar
const CONFIDENCE_BAR_CELLS: usize = 20;

/// Every display string of a prediction result
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    pub total_price: String,
    pub price_per_sqft: String,
    pub lower_bound: String,
    pub upper_bound: String,
    pub confidence: ConfidenceDisplay,
    pub prediction_id: String,
    pub model_version: String,
}

impl PredictionView {
    pub fn from_result(result: &PredictionResult) -> Self {
        Self {
            total_price: format_currency(Some(result.predicted_total_price)),
            price_per_sqft: format_price_per_sqft(result.predicted_price_per_sqft),
            lower_bound: format_currency(Some(result.lower_bound)),
            upper_bound: format_currency(Some(result.upper_bound)),
            confidence: ConfidenceDisplay::from_score(result.confidence_score),
            prediction_id: result.id.to_string(),
            model_version: result.model_version.clone(),
        }
    }
}

impl fmt::Display for PredictionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Estimated Total Price: {}", self.total_price)?;
        writeln!(f, "                       {}", self.price_per_sqft)?;
        writeln!(f, "Lower Bound (80% CI):  {}", self.lower_bound)?;
        writeln!(f, "Upper Bound (80% CI):  {}", self.upper_bound)?;
        writeln!(
            f,
            "Confidence Score:      {} {}",
            self.confidence.text_bar(CONFIDENCE_BAR_CELLS),
            self.confidence.label
        )?;
        writeln!(f, "Prediction ID: {}", self.prediction_id)?;
        write!(f, "Model: {}", self.model_version)
    }
}

/// One line per past prediction, newest first as delivered
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryView {
    pub locality: String,
    pub rows: Vec<String>,
}

impl HistoryView {
    pub fn from_history(locality: &str, history: &PredictionHistory) -> Self {
        let rows = history
            .predictions
            .iter()
            .map(|p| {
                let size = match (p.bhk, p.carpet_area_sqft) {
                    (Some(bhk), Some(area)) => format!("{} BHK, {:.0} sq.ft.", bhk, area),
                    (Some(bhk), None) => format!("{} BHK", bhk),
                    (None, Some(area)) => format!("{:.0} sq.ft.", area),
                    (None, None) => "-".to_string(),
                };
                format!(
                    "#{} {} | {} | {} | {}{}",
                    p.id,
                    format_currency(Some(p.predicted_total_price)),
                    format_price_per_sqft(p.predicted_price_per_sqft),
                    size,
                    ConfidenceDisplay::from_score(p.confidence_score).label,
                    p.created_at.as_deref().map(|at| format!(" | {}", at)).unwrap_or_default(),
                )
            })
            .collect();

        Self {
            locality: locality.to_string(),
            rows,
        }
    }
}

impl fmt::Display for HistoryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return write!(f, "No predictions recorded for {}", self.locality);
        }

        write!(f, "Recent predictions for {}:", self.locality)?;
        for row in &self.rows {
            write!(f, "\n  {}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use property_types::PredictionId;

    fn result() -> PredictionResult {
        PredictionResult {
            id: PredictionId::Numeric(42),
            predicted_total_price: 12_345_678.0,
            predicted_price_per_sqft: 10_288.07,
            lower_bound: 11_000_000.0,
            upper_bound: 13_500_000.0,
            confidence_score: 0.73,
            model_version: "xgb-1.0".to_string(),
            locality_name: Some("Vashi".to_string()),
            bhk: Some(3),
            carpet_area_sqft: Some(1200.0),
            created_at: None,
        }
    }

    #[test]
    fn test_from_result() {
        let view = PredictionView::from_result(&result());
        assert_eq!(view.total_price, "₹ 1.23 Cr");
        assert_eq!(view.price_per_sqft, "₹10288/sq.ft.");
        assert_eq!(view.lower_bound, "₹ 1.10 Cr");
        assert_eq!(view.upper_bound, "₹ 1.35 Cr");
        assert_eq!(view.confidence.label, "73%");
        assert_eq!(view.prediction_id, "42");
        assert_eq!(view.model_version, "xgb-1.0");
    }

    #[test]
    fn test_display() {
        let text = PredictionView::from_result(&result()).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Estimated Total Price: ₹ 1.23 Cr");
        assert!(lines[4].ends_with("] 73%"));
        assert_eq!(lines[6], "Model: xgb-1.0");
    }

    #[test]
    fn test_history_view() {
        let empty = HistoryView::from_history("Ulwe", &PredictionHistory::default());
        assert_eq!(empty.to_string(), "No predictions recorded for Ulwe");

        let history = PredictionHistory {
            predictions: vec![result()],
        };
        let view = HistoryView::from_history("Vashi", &history);
        assert_eq!(view.rows, vec!["#42 ₹ 1.23 Cr | ₹10288/sq.ft. | 3 BHK, 1200 sq.ft. | 73%"]);
        assert!(view.to_string().starts_with("Recent predictions for Vashi:\n  #42"));
    }
}
