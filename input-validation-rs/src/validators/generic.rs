//! Generic validators
//!
//! Helpers for optional values that apply to any field type.

use crate::errors::{ValidationError, ValidationResult};

/// Require a value to be present, returning it
pub fn required<T>(option: Option<T>, message: &str) -> ValidationResult<T> {
    option.ok_or_else(|| ValidationError::Required(message.to_string()))
}

/// Validate an option value if it's Some
pub fn optional<T, F>(option: Option<T>, validator: F) -> ValidationResult<Option<T>>
where
    F: FnOnce(&T) -> ValidationResult<()>,
{
    match option {
        Some(value) => {
            validator(&value)?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}
