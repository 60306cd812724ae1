use serde::Serialize;

use immoval_core::models::{LocationRecord, PropertyType, ResolvedLocation};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Form rules for one property type: its subtype list and the ranges the
/// form enforces.
#[derive(Debug, Serialize)]
pub struct TypeRules {
    pub name: &'static str,
    pub subtypes: &'static [&'static str],
    pub rooms: [u32; 2],
    pub living_area: [f64; 2],
}

impl TypeRules {
    pub fn for_type(property_type: PropertyType) -> Self {
        let rules = property_type.range_rules();
        Self {
            name: property_type.label(),
            subtypes: property_type.subtypes(),
            rooms: [*rules.rooms.start(), *rules.rooms.end()],
            living_area: [*rules.living_area.start(), *rules.living_area.end()],
        }
    }
}

/// Everything the form needs to populate its controls.
#[derive(Debug, Serialize)]
pub struct DomainsResponse {
    pub localities: Vec<String>,
    pub building_conditions: Vec<String>,
    pub types: Vec<TypeRules>,
    pub facades: [u32; 2],
}

/// One marker on the map.
#[derive(Debug, Serialize)]
pub struct LocationMarker {
    pub postal_code: String,
    pub municipality: String,
    pub province: String,
    pub lat: f64,
    pub lon: f64,
}

impl From<&LocationRecord> for LocationMarker {
    fn from(record: &LocationRecord) -> Self {
        Self {
            postal_code: record.postal_code.clone(),
            municipality: record.municipality.clone(),
            province: record.province.clone(),
            lat: record.lat,
            lon: record.lon,
        }
    }
}

/// The displayed prediction: estimate, fixed-width band, and timing.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub estimate: f64,
    pub estimate_formatted: String,
    pub band_low: f64,
    pub band_high: f64,
    pub band_formatted: String,
    pub elapsed_ms: f64,
    pub location: ResolvedLocation,
}
