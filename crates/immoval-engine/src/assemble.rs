//! The feature assembler: one completed selection in, one model-ready row out.

use immoval_core::models::{ModelInputVector, ReadySelection, CATEGORICAL_FIELDS};
use immoval_data::PropertyTable;

/// The assembled model input plus the categorical field-name list the
/// predictor needs to partition its scoring pool.
#[derive(Debug, Clone)]
pub struct AssembledInput {
    pub vector: ModelInputVector,
    pub categorical_fields: &'static [&'static str],
}

/// Guarded natural log: `ln(x)` for positive finite x, `0.0` otherwise.
/// Never panics, never yields NaN or -inf.
pub fn safe_log(x: f64) -> f64 {
    if x > 0.0 {
        x.ln()
    } else {
        0.0
    }
}

fn flag(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}

/// Build the model input row.
///
/// Backend covariates are pulled from the property table's fixed fallback
/// row, not a row matched to the resolved location; the user's map click
/// never reaches the socio-economic features. This mirrors the pipeline the
/// model was trained against.
///
/// There is no error path: the table is non-empty by construction and every
/// transform is total.
pub fn assemble(table: &PropertyTable, selection: &ReadySelection) -> AssembledInput {
    let backend = table.fallback_row();

    let vector = ModelInputVector {
        price: 0.0,
        locality: selection.location.postal_code.clone(),
        property_type: selection.property_type.label().to_string(),
        property_subtype: selection.subtype.clone(),
        building_condition: selection.building_condition.clone(),
        rooms: f64::from(selection.rooms),
        living_area: selection.living_area,
        kitchen: flag(selection.amenities.kitchen),
        terrace: flag(selection.amenities.terrace),
        garden: flag(selection.amenities.garden),
        surface_area_plot: backend.surface_area_plot,
        facades: f64::from(selection.facades),
        swimming_pool: flag(selection.amenities.swimming_pool),
        lift: flag(selection.amenities.lift),
        municipality: selection.location.municipality.clone(),
        province: backend.province.clone(),
        distance_to_brussels: backend.distance_to_brussels,
        distance_to_airport: backend.distance_to_airport,
        total_income: backend.total_income,
        employment_rate: backend.employment_rate,
        unemployment_rate: backend.unemployment_rate,
        population_density: backend.population_density,
        total_area: backend.total_area,
        total_amenities: backend.total_amenities,
        average_room_size: backend.average_room_size,
        amenities_ratio: backend.amenities_ratio,
        living_area_log: safe_log(selection.living_area),
        total_area_log: safe_log(backend.total_area),
        total_income_log: safe_log(backend.total_income),
        airport_brussels_interaction: backend.airport_brussels_interaction,
        density_unemployment_ratio: backend.density_unemployment_ratio,
        region_cluster: backend.region_cluster,
    };

    AssembledInput { vector, categorical_fields: &CATEGORICAL_FIELDS }
}
