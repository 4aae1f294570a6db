// property-types-rs/src/property.rs
// Property description payload and the mutable draft it is built from

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields of a property description, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyField {
    LocalityName,
    Bhk,
    CarpetAreaSqft,
    FloorNumber,
    TotalFloors,
    BuildingAgeYears,
    Lift,
    Parking,
    Gym,
    SwimmingPool,
    GatedSociety,
    Cctv,
}

impl PropertyField {
    pub const ALL: [PropertyField; 12] = [
        PropertyField::LocalityName,
        PropertyField::Bhk,
        PropertyField::CarpetAreaSqft,
        PropertyField::FloorNumber,
        PropertyField::TotalFloors,
        PropertyField::BuildingAgeYears,
        PropertyField::Lift,
        PropertyField::Parking,
        PropertyField::Gym,
        PropertyField::SwimmingPool,
        PropertyField::GatedSociety,
        PropertyField::Cctv,
    ];

    /// Wire name of the field in the JSON payload
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyField::LocalityName => "locality_name",
            PropertyField::Bhk => "bhk",
            PropertyField::CarpetAreaSqft => "carpet_area_sqft",
            PropertyField::FloorNumber => "floor_number",
            PropertyField::TotalFloors => "total_floors",
            PropertyField::BuildingAgeYears => "building_age_years",
            PropertyField::Lift => "lift",
            PropertyField::Parking => "parking",
            PropertyField::Gym => "gym",
            PropertyField::SwimmingPool => "swimming_pool",
            PropertyField::GatedSociety => "gated_society",
            PropertyField::Cctv => "cctv",
        }
    }

    /// Whether the field is one of the boolean amenity flags
    pub fn is_amenity(&self) -> bool {
        matches!(
            self,
            PropertyField::Lift
                | PropertyField::Parking
                | PropertyField::Gym
                | PropertyField::SwimmingPool
                | PropertyField::GatedSociety
                | PropertyField::Cctv
        )
    }
}

impl fmt::Display for PropertyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated, immutable request payload for the prediction endpoint.
///
/// Only `input_validation::InputCollector` is expected to build one from a
/// draft; the fields stay public so callers can read the snapshot back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescription {
    pub locality_name: String,
    pub bhk: u8,
    pub carpet_area_sqft: f64,
    pub floor_number: Option<i32>,
    pub total_floors: Option<i32>,
    pub building_age_years: Option<f64>,
    #[serde(default)]
    pub lift: bool,
    #[serde(default)]
    pub parking: bool,
    #[serde(default)]
    pub gym: bool,
    #[serde(default)]
    pub swimming_pool: bool,
    #[serde(default)]
    pub gated_society: bool,
    #[serde(default)]
    pub cctv: bool,
}

impl PropertyDescription {
    /// Names of the amenities that are switched on
    pub fn amenities(&self) -> Vec<&'static str> {
        [
            (self.lift, PropertyField::Lift),
            (self.parking, PropertyField::Parking),
            (self.gym, PropertyField::Gym),
            (self.swimming_pool, PropertyField::SwimmingPool),
            (self.gated_society, PropertyField::GatedSociety),
            (self.cctv, PropertyField::Cctv),
        ]
        .into_iter()
        .filter(|(on, _)| *on)
        .map(|(_, field)| field.as_str())
        .collect()
    }
}

/// Mutable form state, edited field by field before submission.
///
/// Numeric fields are optional so that "not entered yet" is distinct from
/// any entered value; out-of-range values are representable on purpose and
/// rejected at validation time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyDraft {
    pub locality_name: String,
    pub bhk: Option<i64>,
    pub carpet_area_sqft: Option<f64>,
    pub floor_number: Option<i32>,
    pub total_floors: Option<i32>,
    pub building_age_years: Option<f64>,
    pub lift: bool,
    pub parking: bool,
    pub gym: bool,
    pub swimming_pool: bool,
    pub gated_society: bool,
    pub cctv: bool,
}

impl PropertyDraft {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-filled the way the estimate form opens: 2 BHK, 1000 sq. ft.
    pub fn form_defaults() -> Self {
        Self {
            bhk: Some(2),
            carpet_area_sqft: Some(1000.0),
            ..Self::default()
        }
    }

    pub fn locality(mut self, name: impl Into<String>) -> Self {
        self.locality_name = name.into();
        self
    }

    pub fn bhk(mut self, bhk: i64) -> Self {
        self.bhk = Some(bhk);
        self
    }

    pub fn carpet_area(mut self, sqft: f64) -> Self {
        self.carpet_area_sqft = Some(sqft);
        self
    }

    pub fn floor(mut self, floor: i32, total_floors: Option<i32>) -> Self {
        self.floor_number = Some(floor);
        self.total_floors = total_floors;
        self
    }

    pub fn building_age(mut self, years: f64) -> Self {
        self.building_age_years = Some(years);
        self
    }

    /// Set an amenity flag by field. Non-amenity fields are ignored.
    pub fn set_amenity(&mut self, field: PropertyField, on: bool) {
        match field {
            PropertyField::Lift => self.lift = on,
            PropertyField::Parking => self.parking = on,
            PropertyField::Gym => self.gym = on,
            PropertyField::SwimmingPool => self.swimming_pool = on,
            PropertyField::GatedSociety => self.gated_society = on,
            PropertyField::Cctv => self.cctv = on,
            _ => {}
        }
    }

    /// Builder form of [`PropertyDraft::set_amenity`]
    pub fn amenity(mut self, field: PropertyField, on: bool) -> Self {
        self.set_amenity(field, on);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> PropertyDescription {
        PropertyDescription {
            locality_name: "Vashi".to_string(),
            bhk: 3,
            carpet_area_sqft: 1200.0,
            floor_number: Some(4),
            total_floors: None,
            building_age_years: None,
            lift: true,
            parking: false,
            gym: false,
            swimming_pool: false,
            gated_society: true,
            cctv: false,
        }
    }

    #[test]
    fn test_description_wire_format() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "locality_name": "Vashi",
                "bhk": 3,
                "carpet_area_sqft": 1200.0,
                "floor_number": 4,
                "total_floors": null,
                "building_age_years": null,
                "lift": true,
                "parking": false,
                "gym": false,
                "swimming_pool": false,
                "gated_society": true,
                "cctv": false
            })
        );
    }

    #[test]
    fn test_amenities_listing() {
        assert_eq!(sample().amenities(), vec!["lift", "gated_society"]);
    }

    #[test]
    fn test_draft_defaults() {
        let empty = PropertyDraft::new();
        assert!(empty.locality_name.is_empty());
        assert_eq!(empty.bhk, None);
        assert_eq!(empty.carpet_area_sqft, None);

        let form = PropertyDraft::form_defaults();
        assert_eq!(form.bhk, Some(2));
        assert_eq!(form.carpet_area_sqft, Some(1000.0));
        assert!(!form.lift && !form.cctv);
    }

    #[test]
    fn test_set_amenity_ignores_non_flags() {
        let mut draft = PropertyDraft::new();
        draft.set_amenity(PropertyField::Gym, true);
        draft.set_amenity(PropertyField::Bhk, true);
        assert!(draft.gym);
        assert_eq!(draft.bhk, None);
        assert!(PropertyField::SwimmingPool.is_amenity());
        assert!(!PropertyField::FloorNumber.is_amenity());
        assert_eq!(PropertyField::CarpetAreaSqft.to_string(), "carpet_area_sqft");
    }
}
