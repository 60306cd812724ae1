use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::ResolvedLocation;

/// Top-level property type offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    Apartment,
    House,
    Other,
}

impl PropertyType {
    /// Label matching the training data's `Type_of_Property` values.
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Other => "Other",
        }
    }

    /// The fixed subtype list conditioned on this type.
    pub fn subtypes(&self) -> &'static [&'static str] {
        match self {
            PropertyType::Apartment => &[
                "PENTHOUSE",
                "APARTMENT",
                "APARTMENT_BLOCK",
                "DUPLEX",
                "FLAT_STUDIO",
                "TRIPLEX",
                "GROUND_FLOOR",
                "LOFT",
                "SERVICE_FLAT",
                "KOT",
            ],
            PropertyType::House => &[
                "HOUSE",
                "VILLA",
                "TOWN_HOUSE",
                "COUNTRY_COTTAGE",
                "BUNGALOW",
                "MANSION",
                "CHALET",
                "FARMHOUSE",
                "MANOR_HOUSE",
            ],
            PropertyType::Other => {
                &["MIXED_USE_BUILDING", "EXCEPTIONAL_PROPERTY", "OTHER_PROPERTY"]
            }
        }
    }

    /// Room count and living area ranges the form enforces for this type.
    pub fn range_rules(&self) -> RangeRules {
        match self {
            PropertyType::Apartment => RangeRules {
                rooms: 1..=5,
                living_area: 30.0..=150.0,
            },
            PropertyType::House => RangeRules {
                rooms: 3..=10,
                living_area: 100.0..=500.0,
            },
            PropertyType::Other => RangeRules {
                rooms: 1..=10,
                living_area: 50.0..=300.0,
            },
        }
    }

    /// Classify a subtype back to its type family. Unlisted subtypes fall
    /// into `Other`, mirroring the form's fallback branch.
    pub fn from_subtype(subtype: &str) -> Self {
        if PropertyType::Apartment.subtypes().contains(&subtype) {
            PropertyType::Apartment
        } else if PropertyType::House.subtypes().contains(&subtype) {
            PropertyType::House
        } else {
            PropertyType::Other
        }
    }
}

/// Allowed form ranges conditioned on the property type.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeRules {
    pub rooms: RangeInclusive<u32>,
    pub living_area: RangeInclusive<f64>,
}

/// The five boolean amenity flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenities {
    pub kitchen: bool,
    pub terrace: bool,
    pub garden: bool,
    pub swimming_pool: bool,
    pub lift: bool,
}

/// Everything the form has captured so far. All prediction-gating fields are
/// optional here; `ReadySelection` is the proof that they are all set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserSelection {
    pub property_type: Option<PropertyType>,
    pub subtype: Option<String>,
    pub building_condition: Option<String>,
    pub rooms: Option<u32>,
    pub living_area: Option<f64>,
    pub facades: Option<u32>,
    #[serde(default)]
    pub amenities: Amenities,
    pub location: Option<ResolvedLocation>,
}

/// A fully specified selection: location resolved, every required field set.
/// Scoring only ever sees this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadySelection {
    pub property_type: PropertyType,
    pub subtype: String,
    pub building_condition: String,
    pub rooms: u32,
    pub living_area: f64,
    pub facades: u32,
    pub amenities: Amenities,
    pub location: ResolvedLocation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtype_family_classification() {
        assert_eq!(PropertyType::from_subtype("PENTHOUSE"), PropertyType::Apartment);
        assert_eq!(PropertyType::from_subtype("FARMHOUSE"), PropertyType::House);
        assert_eq!(PropertyType::from_subtype("MIXED_USE_BUILDING"), PropertyType::Other);
        assert_eq!(PropertyType::from_subtype("CASTLE"), PropertyType::Other);
    }

    #[test]
    fn test_range_rules_per_family() {
        let apartment = PropertyType::Apartment.range_rules();
        assert_eq!(apartment.rooms, 1..=5);
        assert_eq!(apartment.living_area, 30.0..=150.0);

        let house = PropertyType::House.range_rules();
        assert_eq!(house.rooms, 3..=10);
        assert_eq!(house.living_area, 100.0..=500.0);

        let other = PropertyType::Other.range_rules();
        assert_eq!(other.rooms, 1..=10);
        assert_eq!(other.living_area, 50.0..=300.0);
    }
}
