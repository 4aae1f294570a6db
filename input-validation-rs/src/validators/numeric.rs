//! Numeric validators
//!
//! Messages name the field by its wire label, e.g.
//! `carpet_area_sqft must be greater than or equal to 300`.

use std::fmt::Display;

use crate::errors::{ValidationError, ValidationResult};

/// Validate that a numeric value is within a range (inclusive)
pub fn between<T>(label: &str, value: T, min_value: T, max_value: T) -> ValidationResult<()>
where
    T: PartialOrd + Display + Copy,
{
    min(label, value, min_value)?;
    max(label, value, max_value)
}

/// Validate that a numeric value is at least a minimum
pub fn min<T>(label: &str, value: T, min: T) -> ValidationResult<()>
where
    T: PartialOrd + Display,
{
    if value < min {
        Err(ValidationError::OutOfRange(format!(
            "{} must be greater than or equal to {}",
            label, min
        )))
    } else {
        Ok(())
    }
}

/// Validate that a numeric value is at most a maximum
pub fn max<T>(label: &str, value: T, max: T) -> ValidationResult<()>
where
    T: PartialOrd + Display,
{
    if value > max {
        Err(ValidationError::OutOfRange(format!(
            "{} must be less than or equal to {}",
            label, max
        )))
    } else {
        Ok(())
    }
}

/// Validate that a numeric value is non-negative
pub fn non_negative<T>(label: &str, value: T) -> ValidationResult<()>
where
    T: PartialOrd + Default + Display,
{
    min(label, value, T::default())
}

/// Validate that a float is an actual number (not NaN or infinite)
pub fn finite(label: &str, value: f64) -> ValidationResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat(format!("{} must be a number", label)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between() {
        assert!(between("bhk", 1, 1, 5).is_ok());
        assert!(between("bhk", 5, 1, 5).is_ok());
        assert_eq!(
            between("bhk", 0, 1, 5).unwrap_err().message(),
            "bhk must be greater than or equal to 1"
        );
        assert_eq!(
            between("bhk", 6, 1, 5).unwrap_err().message(),
            "bhk must be less than or equal to 5"
        );
    }

    #[test]
    fn test_float_labels_render_without_fraction() {
        assert_eq!(
            min("carpet_area_sqft", 250.0, 300.0).unwrap_err().message(),
            "carpet_area_sqft must be greater than or equal to 300"
        );
        assert_eq!(
            non_negative("building_age_years", -1.0).unwrap_err().message(),
            "building_age_years must be greater than or equal to 0"
        );
        assert!(non_negative("building_age_years", 0.0).is_ok());
    }

    #[test]
    fn test_finite() {
        assert!(finite("carpet_area_sqft", 1200.0).is_ok());
        assert!(matches!(
            finite("carpet_area_sqft", f64::NAN),
            Err(ValidationError::InvalidFormat(_))
        ));
        assert!(finite("carpet_area_sqft", f64::INFINITY).is_err());
    }
}
