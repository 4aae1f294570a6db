//! Input collector
//!
//! Turns a mutable [`PropertyDraft`] into an immutable [`PropertyDescription`]
//! snapshot, or reports every failing field at once.
//!
//! Rules:
//! - `locality_name` must be non-empty and one of the configured localities
//! - `bhk` is required and must be within 1..=5
//! - `carpet_area_sqft` is required and must be at least 300
//! - `building_age_years` must not be negative when given
//! - `floor_number` and `total_floors` are passed through unchecked; in
//!   particular a floor above the building's total is accepted

use property_types::{LocalityCatalog, PropertyDescription, PropertyDraft, PropertyField};
use tracing::debug;

use crate::builder::ValidationBuilder;
use crate::errors::{FieldErrors, ValidationError, ValidationResult};
use crate::validators::{generic, numeric, string};

pub const MIN_BHK: i64 = 1;
pub const MAX_BHK: i64 = 5;
pub const MIN_CARPET_AREA_SQFT: f64 = 300.0;

/// Validates drafts against a fixed locality catalog
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    catalog: LocalityCatalog,
}

impl InputCollector {
    pub fn new(catalog: LocalityCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &LocalityCatalog {
        &self.catalog
    }

    /// Check a draft and produce the request snapshot. Pure: the draft is
    /// only read.
    pub fn validate(&self, draft: &PropertyDraft) -> Result<PropertyDescription, FieldErrors> {
        let mut errors = FieldErrors::new();

        let locality = errors.collect(PropertyField::LocalityName, self.check_locality(&draft.locality_name));
        let bhk = errors.collect(PropertyField::Bhk, check_bhk(draft.bhk));
        let area = errors.collect(PropertyField::CarpetAreaSqft, check_carpet_area(draft.carpet_area_sqft));
        let age = errors.collect(
            PropertyField::BuildingAgeYears,
            check_building_age(draft.building_age_years),
        );

        match (locality, bhk, area, age) {
            (Some(locality_name), Some(bhk), Some(carpet_area_sqft), Some(building_age_years)) => {
                Ok(PropertyDescription {
                    locality_name,
                    bhk,
                    carpet_area_sqft,
                    floor_number: draft.floor_number,
                    total_floors: draft.total_floors,
                    building_age_years,
                    lift: draft.lift,
                    parking: draft.parking,
                    gym: draft.gym,
                    swimming_pool: draft.swimming_pool,
                    gated_society: draft.gated_society,
                    cctv: draft.cctv,
                })
            }
            _ => {
                debug!(
                    fields = ?errors.fields().map(|f| f.as_str()).collect::<Vec<_>>(),
                    "draft rejected"
                );
                Err(errors)
            }
        }
    }

    fn check_locality(&self, name: &str) -> ValidationResult<String> {
        ValidationBuilder::new(name)
            .validate(|s| string::not_empty(s, "Locality is required"))
            .validate(|s| {
                string::one_of_names(s, self.catalog.iter()).map_err(|_| {
                    ValidationError::NotAllowed(format!("Locality '{}' is not supported", s))
                })
            })
            .finish()
            .map(str::to_string)
    }
}

fn check_bhk(bhk: Option<i64>) -> ValidationResult<u8> {
    let bhk = generic::required(bhk, "BHK is required")?;
    let bhk = ValidationBuilder::new(bhk)
        .min("bhk", MIN_BHK)
        .max("bhk", MAX_BHK)
        .finish()?;
    u8::try_from(bhk).map_err(|_| ValidationError::OutOfRange(format!("bhk must be less than or equal to {}", MAX_BHK)))
}

fn check_carpet_area(area: Option<f64>) -> ValidationResult<f64> {
    let area = generic::required(area, "Carpet area is required")?;
    ValidationBuilder::new(area)
        .validate(|a| numeric::finite("carpet_area_sqft", *a))
        .min("carpet_area_sqft", MIN_CARPET_AREA_SQFT)
        .finish()
}

fn check_building_age(age: Option<f64>) -> ValidationResult<Option<f64>> {
    generic::optional(age, |a| {
        numeric::finite("building_age_years", *a)?;
        numeric::non_negative("building_age_years", *a)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn collector() -> InputCollector {
        InputCollector::default()
    }

    fn valid_draft() -> PropertyDraft {
        PropertyDraft::new().locality("Vashi").bhk(3).carpet_area(1200.0)
    }

    #[test]
    fn test_accepts_valid_draft() {
        let description = collector().validate(&valid_draft()).unwrap();
        assert_eq!(description.locality_name, "Vashi");
        assert_eq!(description.bhk, 3);
        assert_eq!(description.carpet_area_sqft, 1200.0);
        assert_eq!(description.floor_number, None);
        assert_eq!(description.building_age_years, None);
        assert!(!description.lift);
    }

    #[test_case(0, "bhk must be greater than or equal to 1" ; "zero bedrooms")]
    #[test_case(6, "bhk must be less than or equal to 5" ; "six bedrooms")]
    #[test_case(-2, "bhk must be greater than or equal to 1" ; "negative bedrooms")]
    fn test_rejects_bhk_out_of_range(bhk: i64, message: &str) {
        let errors = collector().validate(&valid_draft().bhk(bhk)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message_for(PropertyField::Bhk), Some(message));
    }

    #[test_case(1 ; "one")]
    #[test_case(5 ; "five")]
    fn test_accepts_bhk_bounds(bhk: i64) {
        assert!(collector().validate(&valid_draft().bhk(bhk)).is_ok());
    }

    #[test]
    fn test_rejects_small_carpet_area() {
        let errors = collector().validate(&valid_draft().carpet_area(250.0)).unwrap_err();
        assert_eq!(
            errors.message_for(PropertyField::CarpetAreaSqft),
            Some("carpet_area_sqft must be greater than or equal to 300")
        );
        assert!(collector().validate(&valid_draft().carpet_area(300.0)).is_ok());
    }

    #[test]
    fn test_rejects_non_numeric_carpet_area() {
        let errors = collector().validate(&valid_draft().carpet_area(f64::NAN)).unwrap_err();
        assert!(matches!(
            errors.get(PropertyField::CarpetAreaSqft),
            Some(ValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_empty_locality() {
        let errors = collector().validate(&valid_draft().locality("")).unwrap_err();
        assert_eq!(errors.message_for(PropertyField::LocalityName), Some("Locality is required"));
    }

    #[test]
    fn test_rejects_unknown_locality() {
        let errors = collector().validate(&valid_draft().locality("Andheri")).unwrap_err();
        assert_eq!(
            errors.message_for(PropertyField::LocalityName),
            Some("Locality 'Andheri' is not supported")
        );
    }

    #[test]
    fn test_catalog_is_injected() {
        let collector = InputCollector::new(LocalityCatalog::new(["Andheri"]));
        assert!(collector.validate(&valid_draft().locality("Andheri")).is_ok());
        assert!(collector.validate(&valid_draft()).is_err());
    }

    #[test]
    fn test_missing_required_fields_reported_together() {
        let errors = collector().validate(&PropertyDraft::new()).unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![PropertyField::LocalityName, PropertyField::Bhk, PropertyField::CarpetAreaSqft]
        );
        assert_eq!(errors.message_for(PropertyField::Bhk), Some("BHK is required"));
        assert_eq!(errors.message_for(PropertyField::CarpetAreaSqft), Some("Carpet area is required"));
    }

    #[test]
    fn test_building_age() {
        let errors = collector().validate(&valid_draft().building_age(-1.0)).unwrap_err();
        assert_eq!(
            errors.message_for(PropertyField::BuildingAgeYears),
            Some("building_age_years must be greater than or equal to 0")
        );

        let description = collector().validate(&valid_draft().building_age(0.0)).unwrap();
        assert_eq!(description.building_age_years, Some(0.0));
    }

    #[test]
    fn test_floor_numbers_are_not_cross_checked() {
        let draft = valid_draft().floor(12, Some(4));
        let description = collector().validate(&draft).unwrap();
        assert_eq!(description.floor_number, Some(12));
        assert_eq!(description.total_floors, Some(4));

        let draft = valid_draft().floor(-1, None);
        assert_eq!(collector().validate(&draft).unwrap().floor_number, Some(-1));
    }

    #[test]
    fn test_amenities_carried_into_snapshot() {
        let draft = valid_draft()
            .amenity(PropertyField::Parking, true)
            .amenity(PropertyField::Cctv, true);
        let description = collector().validate(&draft).unwrap();
        assert_eq!(description.amenities(), vec!["parking", "cctv"]);
    }

    #[test]
    fn test_validate_does_not_touch_draft() {
        let draft = valid_draft().bhk(9);
        let before = draft.clone();
        let _ = collector().validate(&draft);
        assert_eq!(draft, before);
    }
}
