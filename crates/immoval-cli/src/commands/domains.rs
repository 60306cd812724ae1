use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use immoval_core::config::LayeredConfig;
use immoval_core::models::PropertyType;
use immoval_data::{CategoricalDomains, ReferenceStore};

use crate::cli::DomainsArgs;
use crate::output::OutputWriter;

#[derive(Tabled, Serialize)]
struct DomainRow {
    #[tabled(rename = "Domain")]
    domain: String,
    #[tabled(rename = "Values")]
    count: usize,
    #[tabled(rename = "Sample")]
    sample: String,
}

#[derive(Tabled, Serialize)]
struct TypeRow {
    #[tabled(rename = "Type")]
    name: &'static str,
    #[tabled(rename = "Subtypes")]
    subtypes: usize,
    #[tabled(rename = "Rooms")]
    rooms: String,
    #[tabled(rename = "Living area (m²)")]
    living_area: String,
}

fn domain_row(name: &str, values: &[String]) -> DomainRow {
    let sample: Vec<&str> = values.iter().take(5).map(String::as_str).collect();
    DomainRow {
        domain: name.to_string(),
        count: values.len(),
        sample: sample.join(", "),
    }
}

fn type_row(property_type: PropertyType) -> TypeRow {
    let rules = property_type.range_rules();
    TypeRow {
        name: property_type.label(),
        subtypes: property_type.subtypes().len(),
        rooms: format!("{}-{}", rules.rooms.start(), rules.rooms.end()),
        living_area: format!("{}-{}", rules.living_area.start(), rules.living_area.end()),
    }
}

pub fn execute(_args: DomainsArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    // Only the reference tables are needed here; the model stays unloaded.
    let store = ReferenceStore::load(&config.features_path.value, &config.locations_path.value)?;
    let domains = CategoricalDomains::from_table(&store.properties);

    output.table(vec![
        domain_row("Locality", &domains.localities),
        domain_row("Property type", &domains.property_types),
        domain_row("Property subtype", &domains.property_subtypes),
        domain_row("Building condition", &domains.building_conditions),
    ]);

    output.table(vec![
        type_row(PropertyType::Apartment),
        type_row(PropertyType::House),
        type_row(PropertyType::Other),
    ]);

    Ok(())
}
