//! # Input Validation Library
//!
//! Field-level validation for property drafts collected from a user before
//! they are sent for price prediction.
//!
//! ## Features
//!
//! - Validators for required values, numeric ranges and allowed names
//! - A fluent [`ValidationBuilder`] for chaining checks on one field
//! - [`InputCollector`], which turns a draft into a validated snapshot or a
//!   set of per-field errors

mod builder;
mod collector;
mod errors;
pub mod validators;

pub use builder::ValidationBuilder;
pub use collector::{InputCollector, MAX_BHK, MIN_BHK, MIN_CARPET_AREA_SQFT};
pub use errors::{FieldError, FieldErrors, ValidationError, ValidationResult};

use property_types::{LocalityCatalog, PropertyDescription, PropertyDraft};

/// Re-export commonly used validators for convenience
pub mod prelude {
    pub use crate::builder::ValidationBuilder;
    pub use crate::collector::InputCollector;
    pub use crate::errors::{FieldError, FieldErrors, ValidationError, ValidationResult};
    pub use crate::validators;
}

/// Version of the validation library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Start a validation chain for a single value
pub fn validate<T>(input: T) -> ValidationBuilder<T> {
    ValidationBuilder::new(input)
}

/// Validate a draft against a catalog without keeping a collector around
pub fn validate_draft(
    draft: &PropertyDraft,
    catalog: &LocalityCatalog,
) -> Result<PropertyDescription, FieldErrors> {
    InputCollector::new(catalog.clone()).validate(draft)
}
