//! Validation builder pattern
//!
//! This module provides a fluent API for chaining the checks applied to a
//! single field. The first failing check wins; later checks are skipped.

use std::fmt::Display;

use crate::errors::{ValidationError, ValidationResult};
use crate::validators::numeric;

/// Builder for chaining validation rules
#[derive(Debug, Clone)]
pub struct ValidationBuilder<T> {
    /// The value being validated
    value: T,
    /// Any previous error encountered during validation
    error: Option<ValidationError>,
}

impl<T> ValidationBuilder<T> {
    /// Create a new validation builder
    pub fn new(value: T) -> Self {
        Self { value, error: None }
    }

    /// Apply a validation function
    pub fn validate<F>(mut self, validator: F) -> Self
    where
        F: FnOnce(&T) -> ValidationResult<()>,
    {
        // Only apply validation if there's no previous error
        if self.error.is_none() {
            if let Err(err) = validator(&self.value) {
                self.error = Some(err);
            }
        }
        self
    }

    /// Apply a predicate with a custom error message
    pub fn custom<F>(self, f: F, message: &str) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        self.validate(|value| {
            if f(value) {
                Ok(())
            } else {
                Err(ValidationError::new(message))
            }
        })
    }

    /// Finish validation and return the result
    pub fn finish(self) -> ValidationResult<T> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.value),
        }
    }

    /// Get a reference to the value (if validation succeeded so far)
    pub fn value(&self) -> Option<&T> {
        if self.error.is_none() {
            Some(&self.value)
        } else {
            None
        }
    }

    /// Get the error (if any)
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

// Numeric validation extension for labelled comparisons
impl<T: PartialOrd + Display + Copy> ValidationBuilder<T> {
    /// Validate that the value is at least `min`
    pub fn min(self, label: &str, min: T) -> Self {
        self.validate(|value| numeric::min(label, *value, min))
    }

    /// Validate that the value is at most `max`
    pub fn max(self, label: &str, max: T) -> Self {
        self.validate(|value| numeric::max(label, *value, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_wins() {
        let result = ValidationBuilder::new(0_i64)
            .min("bhk", 1)
            .custom(|_| false, "never reached")
            .finish();

        assert_eq!(
            result,
            Err(ValidationError::OutOfRange("bhk must be greater than or equal to 1".to_string()))
        );
    }

    #[test]
    fn test_chain_passes() {
        let builder = ValidationBuilder::new(3_i64).min("bhk", 1).max("bhk", 5);
        assert!(builder.is_valid());
        assert_eq!(builder.value(), Some(&3));
        assert!(builder.error().is_none());
        assert_eq!(builder.finish(), Ok(3));
    }

    #[test]
    fn test_custom_message() {
        let builder = ValidationBuilder::new("Vashi").custom(|s| s.len() > 10, "too short");
        assert!(builder.value().is_none());
        assert_eq!(builder.error().map(ValidationError::message), Some("too short"));
    }
}
