use serde::Deserialize;

use immoval_core::models::{Amenities, PropertyType};

/// A clicked map coordinate to resolve against the location table.
#[derive(Debug, Deserialize)]
pub struct LocateRequest {
    pub lat: f64,
    pub lon: f64,
}

/// Visible-bounds query for the marker layer. Every bound is optional: a
/// client that has no viewport yet sends nothing, and the handler falls back
/// to the default envelope around the configured center.
#[derive(Debug, Default, Deserialize)]
pub struct LocationsQuery {
    pub min_lat: Option<f64>,
    pub min_lon: Option<f64>,
    pub max_lat: Option<f64>,
    pub max_lon: Option<f64>,
}

impl LocationsQuery {
    /// The envelope as `((min_lat, min_lon), (max_lat, max_lon))`, or `None`
    /// when any bound is absent, non-finite, or inverted. Absence is a
    /// representable value here, not a swallowed failure.
    pub fn envelope(&self) -> Option<((f64, f64), (f64, f64))> {
        let (min_lat, min_lon, max_lat, max_lon) =
            (self.min_lat?, self.min_lon?, self.max_lat?, self.max_lon?);

        let finite = [min_lat, min_lon, max_lat, max_lon].iter().all(|v| v.is_finite());
        if !finite || min_lat > max_lat || min_lon > max_lon {
            return None;
        }

        Some(((min_lat, min_lon), (max_lat, max_lon)))
    }
}

/// The full form submission: a click coordinate plus every field the form
/// captured so far. Fields left unset are reported back as a 422 warning,
/// not rejected at deserialization.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub property_type: Option<PropertyType>,
    pub subtype: Option<String>,
    pub building_condition: Option<String>,
    pub rooms: Option<u32>,
    pub living_area: Option<f64>,
    pub facades: Option<u32>,
    #[serde(default)]
    pub amenities: Amenities,
}
