//! CSV loading for the two reference tables.
//!
//! Header damage is fatal (`DataLoad`); cell damage is not. A blank or
//! unparseable cell degrades to `0.0` / `"Unknown"` so a partially damaged
//! table still serves predictions.

use serde::Deserialize;
use std::path::Path;

use immoval_core::error::{ImmovalError, Result};
use immoval_core::models::{LocationRecord, PropertyRecord};

/// Expected header of the property feature table.
const PROPERTY_HEADERS: [&str; 19] = [
    "Locality",
    "Type_of_Property",
    "Subtype_of_Property",
    "State_of_the_Building",
    "Province",
    "Surface_area_plot_of_land",
    "Distance_to_Brussels",
    "Distance_to_Nearest_Airport",
    "total_income",
    "Employment Rate (%)",
    "Unemployment Rate (%)",
    "Population Density",
    "Total_Area",
    "Total_Amenities",
    "Average_Room_Size",
    "Amenities_Ratio",
    "Airport_Brussels_Interaction",
    "Density_Unemployment_Ratio",
    "Region_Cluster",
];

/// Expected header of the location coordinate table.
const LOCATION_HEADERS: [&str; 5] = ["postal_code", "municipality", "province", "lat", "lon"];

/// The property feature table. Non-empty by construction: loading an empty
/// table fails, so `fallback_row` is total.
#[derive(Debug, Clone)]
pub struct PropertyTable {
    rows: Vec<PropertyRecord>,
}

impl PropertyTable {
    pub fn rows(&self) -> &[PropertyRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The fixed representative row the assembler pulls backend covariates
    /// from. Always row 0, regardless of the user's resolved location.
    pub fn fallback_row(&self) -> &PropertyRecord {
        &self.rows[0]
    }

    /// Build a table directly from records. Test and fixture construction;
    /// production tables come from `ReferenceStore::load`.
    pub fn from_records(rows: Vec<PropertyRecord>) -> Result<Self> {
        if rows.is_empty() {
            return Err(ImmovalError::EmptyTable { table: "property_features".to_string() });
        }
        Ok(Self { rows })
    }
}

/// The location coordinate table.
#[derive(Debug, Clone)]
pub struct LocationTable {
    rows: Vec<LocationRecord>,
}

impl LocationTable {
    pub fn rows(&self) -> &[LocationRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn from_records(rows: Vec<LocationRecord>) -> Self {
        Self { rows }
    }
}

/// Both reference tables, loaded once at process start.
#[derive(Debug, Clone)]
pub struct ReferenceStore {
    pub properties: PropertyTable,
    pub locations: LocationTable,
}

impl ReferenceStore {
    /// Load both tables. Any failure here is fatal to startup: the process
    /// cannot serve predictions without its reference data.
    pub fn load(features_path: &Path, locations_path: &Path) -> Result<Self> {
        let properties = load_property_table(features_path)?;
        let locations = load_location_table(locations_path)?;

        tracing::info!(
            property_rows = properties.len(),
            location_rows = locations.len(),
            "Loaded reference tables"
        );

        Ok(Self { properties, locations })
    }
}

#[derive(Debug, Deserialize)]
struct RawPropertyRow {
    #[serde(rename = "Locality", default)]
    locality: Option<String>,
    #[serde(rename = "Type_of_Property", default)]
    property_type: Option<String>,
    #[serde(rename = "Subtype_of_Property", default)]
    property_subtype: Option<String>,
    #[serde(rename = "State_of_the_Building", default)]
    building_condition: Option<String>,
    #[serde(rename = "Province", default)]
    province: Option<String>,
    #[serde(rename = "Surface_area_plot_of_land", default)]
    surface_area_plot: Option<String>,
    #[serde(rename = "Distance_to_Brussels", default)]
    distance_to_brussels: Option<String>,
    #[serde(rename = "Distance_to_Nearest_Airport", default)]
    distance_to_airport: Option<String>,
    #[serde(rename = "total_income", default)]
    total_income: Option<String>,
    #[serde(rename = "Employment Rate (%)", default)]
    employment_rate: Option<String>,
    #[serde(rename = "Unemployment Rate (%)", default)]
    unemployment_rate: Option<String>,
    #[serde(rename = "Population Density", default)]
    population_density: Option<String>,
    #[serde(rename = "Total_Area", default)]
    total_area: Option<String>,
    #[serde(rename = "Total_Amenities", default)]
    total_amenities: Option<String>,
    #[serde(rename = "Average_Room_Size", default)]
    average_room_size: Option<String>,
    #[serde(rename = "Amenities_Ratio", default)]
    amenities_ratio: Option<String>,
    #[serde(rename = "Airport_Brussels_Interaction", default)]
    airport_brussels_interaction: Option<String>,
    #[serde(rename = "Density_Unemployment_Ratio", default)]
    density_unemployment_ratio: Option<String>,
    #[serde(rename = "Region_Cluster", default)]
    region_cluster: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawLocationRow {
    #[serde(default)]
    postal_code: Option<String>,
    #[serde(default)]
    municipality: Option<String>,
    #[serde(default)]
    province: Option<String>,
    #[serde(default)]
    lat: Option<String>,
    #[serde(default)]
    lon: Option<String>,
}

/// Blank or unparseable numeric cell degrades to 0.0
fn lenient_f64(cell: Option<String>) -> f64 {
    cell.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Blank string cell degrades to "Unknown"
fn lenient_string(cell: Option<String>) -> String {
    match cell.map(|s| s.trim().to_string()) {
        Some(s) if !s.is_empty() => s,
        _ => "Unknown".to_string(),
    }
}

fn data_load_error(path: &Path, reason: impl Into<String>) -> ImmovalError {
    ImmovalError::DataLoad { path: path.to_path_buf(), reason: reason.into() }
}

fn check_headers(path: &Path, found: &csv::StringRecord, expected: &[&str]) -> Result<()> {
    let missing: Vec<&str> =
        expected.iter().filter(|h| !found.iter().any(|f| f == **h)).copied().collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(data_load_error(path, format!("missing columns: {}", missing.join(", "))))
    }
}

fn load_property_table(path: &Path) -> Result<PropertyTable> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| data_load_error(path, e.to_string()))?;

    let headers =
        reader.headers().map_err(|e| data_load_error(path, e.to_string()))?.clone();
    check_headers(path, &headers, &PROPERTY_HEADERS)?;

    let mut rows = Vec::new();
    for record in reader.deserialize::<RawPropertyRow>() {
        // Structurally broken records (e.g. wrong field count) degrade to a
        // fully-defaulted row rather than failing the load.
        let raw = match record {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(path = %path.display(), "Damaged property row: {}", e);
                rows.push(PropertyRecord::unknown());
                continue;
            }
        };

        rows.push(PropertyRecord {
            locality: lenient_string(raw.locality),
            property_type: lenient_string(raw.property_type),
            property_subtype: lenient_string(raw.property_subtype),
            building_condition: lenient_string(raw.building_condition),
            province: lenient_string(raw.province),
            surface_area_plot: lenient_f64(raw.surface_area_plot),
            distance_to_brussels: lenient_f64(raw.distance_to_brussels),
            distance_to_airport: lenient_f64(raw.distance_to_airport),
            total_income: lenient_f64(raw.total_income),
            employment_rate: lenient_f64(raw.employment_rate),
            unemployment_rate: lenient_f64(raw.unemployment_rate),
            population_density: lenient_f64(raw.population_density),
            total_area: lenient_f64(raw.total_area),
            total_amenities: lenient_f64(raw.total_amenities),
            average_room_size: lenient_f64(raw.average_room_size),
            amenities_ratio: lenient_f64(raw.amenities_ratio),
            airport_brussels_interaction: lenient_f64(raw.airport_brussels_interaction),
            density_unemployment_ratio: lenient_f64(raw.density_unemployment_ratio),
            region_cluster: lenient_f64(raw.region_cluster),
        });
    }

    PropertyTable::from_records(rows)
}

fn load_location_table(path: &Path) -> Result<LocationTable> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| data_load_error(path, e.to_string()))?;

    let headers =
        reader.headers().map_err(|e| data_load_error(path, e.to_string()))?.clone();
    check_headers(path, &headers, &LOCATION_HEADERS)?;

    let mut rows = Vec::new();
    for record in reader.deserialize::<RawLocationRow>() {
        let raw = match record {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(path = %path.display(), "Damaged location row: {}", e);
                continue;
            }
        };

        // A location without usable coordinates cannot participate in
        // nearest-neighbor resolution; skip it instead of defaulting to
        // (0, 0), which would poison the lookup.
        let (lat, lon) = match (parse_coord(&raw.lat), parse_coord(&raw.lon)) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => {
                tracing::warn!(path = %path.display(), "Location row without coordinates, skipping");
                continue;
            }
        };

        rows.push(LocationRecord {
            postal_code: lenient_string(raw.postal_code),
            municipality: lenient_string(raw.municipality),
            province: lenient_string(raw.province),
            lat,
            lon,
        });
    }

    Ok(LocationTable::from_records(rows))
}

fn parse_coord(cell: &Option<String>) -> Option<f64> {
    cell.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
