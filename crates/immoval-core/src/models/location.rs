use serde::{Deserialize, Serialize};

/// One row of the location coordinate table: a geographic point plus its
/// administrative identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub postal_code: String,
    pub municipality: String,
    pub province: String,
    pub lat: f64,
    pub lon: f64,
}

impl LocationRecord {
    /// The administrative identifiers of this location, detached from its
    /// coordinates. This is what a resolved map click contributes to a
    /// user selection.
    pub fn resolved(&self) -> ResolvedLocation {
        ResolvedLocation {
            postal_code: self.postal_code.clone(),
            municipality: self.municipality.clone(),
            province: self.province.clone(),
        }
    }
}

/// Administrative identifiers of a location resolved from a map click.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub postal_code: String,
    pub municipality: String,
    pub province: String,
}
