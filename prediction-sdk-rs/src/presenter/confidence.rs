//! Confidence score rendering

/// Decimal places kept in the CSS width, as a power of ten
const WIDTH_SCALE: f64 = 10_000.0;

/// Display form of a model confidence score
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceDisplay {
    /// Whole percentage, e.g. `73%`
    pub label: String,

    /// Bar fill as a fraction of full width. Not clamped: a score outside
    /// [0, 1] is passed through as reported.
    pub width_fraction: f64,
}

impl ConfidenceDisplay {
    pub fn from_score(score: f64) -> Self {
        Self {
            label: format!("{:.0}%", (score * 100.0).round()),
            width_fraction: score,
        }
    }

    /// CSS width of the bar fill, e.g. `73%` or `12.5%`. The percentage is
    /// rounded to four decimals so float noise such as `56.99999999999999`
    /// does not reach the output; out-of-range scores are still not clamped.
    pub fn width_css(&self) -> String {
        let percent = (self.width_fraction * 100.0 * WIDTH_SCALE).round() / WIDTH_SCALE;
        format!("{}%", percent)
    }

    /// Terminal bar of `cells` characters. Only the drawing is bounded; the
    /// fraction itself is left as is.
    pub fn text_bar(&self, cells: usize) -> String {
        let filled = if self.width_fraction.is_nan() {
            0
        } else {
            ((self.width_fraction * cells as f64).round().max(0.0) as usize).min(cells)
        };
        format!("[{}{}]", "#".repeat(filled), "-".repeat(cells - filled))
    }
}
