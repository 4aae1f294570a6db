//! Error handling for the validation library
//!
//! Validation failures are reported per field: each failing field carries
//! exactly one [`ValidationError`], and a whole draft's failures are gathered
//! into [`FieldErrors`].

use std::fmt;

use property_types::PropertyField;
use serde::Serialize;
use thiserror::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Enum representing different validation error types
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum ValidationError {
    /// A required value was not provided
    #[error("Missing required value: {0}")]
    Required(String),

    /// Input is outside numeric range
    #[error("Value is outside allowed range: {0}")]
    OutOfRange(String),

    /// Input is not one of the allowed values
    #[error("Value is not allowed: {0}")]
    NotAllowed(String),

    /// Input format is invalid
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Generic validation error
    #[error("{0}")]
    Generic(String),
}

impl ValidationError {
    /// Create a new generic validation error with a message
    pub fn new<S: Into<String>>(message: S) -> Self {
        ValidationError::Generic(message.into())
    }

    /// The bare message, suitable for showing next to the field
    pub fn message(&self) -> &str {
        match self {
            ValidationError::Required(msg)
            | ValidationError::OutOfRange(msg)
            | ValidationError::NotAllowed(msg)
            | ValidationError::InvalidFormat(msg)
            | ValidationError::Generic(msg) => msg,
        }
    }
}

/// Validation error tied to the field that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// The field where the error occurred
    pub field: PropertyField,
    /// The validation error
    pub error: ValidationError,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: PropertyField, error: ValidationError) -> Self {
        Self { field, error }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error.message())
    }
}

/// All field errors found in one draft, in field order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field. A field keeps its first error only.
    pub fn push(&mut self, field: PropertyField, error: ValidationError) {
        if self.get(field).is_none() {
            self.errors.push(FieldError::new(field, error));
        }
    }

    /// Unwrap a per-field result, recording the error if there is one
    pub fn collect<T>(&mut self, field: PropertyField, result: ValidationResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.push(field, error);
                None
            }
        }
    }

    pub fn get(&self, field: PropertyField) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field).map(|e| &e.error)
    }

    /// Inline message for a field, if it failed
    pub fn message_for(&self, field: PropertyField) -> Option<&str> {
        self.get(field).map(ValidationError::message)
    }

    pub fn contains(&self, field: PropertyField) -> bool {
        self.get(field).is_some()
    }

    pub fn fields(&self) -> impl Iterator<Item = PropertyField> + '_ {
        self.errors.iter().map(|e| e.field)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.errors.len())?;
        for err in &self.errors {
            write!(f, "\n  {}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
