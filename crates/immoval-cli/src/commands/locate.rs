use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use immoval_core::config::LayeredConfig;
use immoval_data::{LocationIndex, ReferenceStore};

use crate::cli::LocateArgs;
use crate::output::OutputWriter;

#[derive(Tabled, Serialize)]
struct LocationRow {
    #[tabled(rename = "Postal code")]
    postal_code: String,
    #[tabled(rename = "Municipality")]
    municipality: String,
    #[tabled(rename = "Province")]
    province: String,
    #[tabled(rename = "Latitude")]
    lat: f64,
    #[tabled(rename = "Longitude")]
    lon: f64,
}

pub fn execute(args: LocateArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let store = ReferenceStore::load(&config.features_path.value, &config.locations_path.value)?;
    let index = LocationIndex::new(store.locations);

    let record = index.nearest(args.lat, args.lon)?;

    output.table(vec![LocationRow {
        postal_code: record.postal_code.clone(),
        municipality: record.municipality.clone(),
        province: record.province.clone(),
        lat: record.lat,
        lon: record.lon,
    }]);

    Ok(())
}
