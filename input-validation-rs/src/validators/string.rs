//! String validators

use crate::errors::{ValidationError, ValidationResult};

/// Validate that a string is not empty
pub fn not_empty(s: &str, message: &str) -> ValidationResult<()> {
    if s.is_empty() {
        Err(ValidationError::Required(message.to_string()))
    } else {
        Ok(())
    }
}

/// Validate that a string is one of the allowed names (exact match)
pub fn one_of_names<'a, I>(s: &str, allowed: I) -> ValidationResult<()>
where
    I: IntoIterator<Item = &'a str>,
{
    if allowed.into_iter().any(|name| name == s) {
        Ok(())
    } else {
        Err(ValidationError::NotAllowed(format!("'{}' is not a supported value", s)))
    }
}
