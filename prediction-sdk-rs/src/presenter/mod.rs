//! Display formatting for prediction results
//!
//! Pure functions only: nothing here touches the network or mutates a result.

mod confidence;
mod currency;
mod view;

pub use confidence::ConfidenceDisplay;
pub use currency::{format_currency, format_price_per_sqft, group_indian_digits, CRORE, LAKH, ZERO_CURRENCY};
pub use view::{HistoryView, PredictionView};
