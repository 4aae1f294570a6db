//! CLI Command Implementations
//!
//! - [`predict`]: validate a property and request an estimate
//! - [`history`]: recent estimates for a locality
//! - [`localities`]: the configured catalog
//! - [`health`]: service probe

mod health;
mod history;
mod localities;
mod predict;

pub use health::HealthCommand;
pub use history::HistoryCommand;
pub use localities::LocalitiesCommand;
pub use predict::PredictCommand;
