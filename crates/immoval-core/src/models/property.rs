use serde::{Deserialize, Serialize};

/// One row of the reference property feature table.
///
/// Loaded once at startup and queried read-only afterwards. Field damage in
/// the source CSV degrades to `0.0` / `"Unknown"` at load time, so a record
/// is always fully populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// Postal-code-level locality identifier
    pub locality: String,
    pub property_type: String,
    pub property_subtype: String,
    pub building_condition: String,
    pub province: String,

    // Socio-economic and geographic covariates
    pub surface_area_plot: f64,
    pub distance_to_brussels: f64,
    pub distance_to_airport: f64,
    pub total_income: f64,
    pub employment_rate: f64,
    pub unemployment_rate: f64,
    pub population_density: f64,
    pub total_area: f64,
    pub total_amenities: f64,
    pub average_room_size: f64,
    pub amenities_ratio: f64,
    pub airport_brussels_interaction: f64,
    pub density_unemployment_ratio: f64,
    /// Precomputed region cluster id from training
    pub region_cluster: f64,
}

impl PropertyRecord {
    /// A record with every covariate at its degraded default.
    pub fn unknown() -> Self {
        Self {
            locality: "Unknown".to_string(),
            property_type: "Unknown".to_string(),
            property_subtype: "Unknown".to_string(),
            building_condition: "Unknown".to_string(),
            province: "Unknown".to_string(),
            surface_area_plot: 0.0,
            distance_to_brussels: 0.0,
            distance_to_airport: 0.0,
            total_income: 0.0,
            employment_rate: 0.0,
            unemployment_rate: 0.0,
            population_density: 0.0,
            total_area: 0.0,
            total_amenities: 0.0,
            average_room_size: 0.0,
            amenities_ratio: 0.0,
            airport_brussels_interaction: 0.0,
            density_unemployment_ratio: 0.0,
            region_cluster: 0.0,
        }
    }
}
