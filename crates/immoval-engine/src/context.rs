//! The process-wide application context.
//!
//! Everything load-once lives here: both reference tables, the categorical
//! domains, the spatial index, and the price model. Constructed a single
//! time at process start and passed (or `Arc`-shared) into every component
//! that needs it; nothing mutates it afterwards, so no locking exists.

use immoval_core::config::LayeredConfig;
use immoval_core::error::Result;
use immoval_data::{CategoricalDomains, LocationIndex, PropertyTable, ReferenceStore};
use immoval_model::PriceModel;

pub struct AppContext {
    pub properties: PropertyTable,
    pub locations: LocationIndex,
    pub domains: CategoricalDomains,
    pub model: PriceModel,
    /// Fixed display-band MAE from configuration, in EUR
    pub mae: f64,
    /// Default map center (lat, lon) for envelope fallbacks
    pub map_center: (f64, f64),
}

impl AppContext {
    /// Load all startup artifacts. Any failure here means the process
    /// cannot serve predictions; callers log and exit.
    pub fn load(config: &LayeredConfig) -> Result<Self> {
        let store =
            ReferenceStore::load(&config.features_path.value, &config.locations_path.value)?;
        let domains = CategoricalDomains::from_table(&store.properties);
        let model = PriceModel::load(&config.model_path.value)?;

        tracing::info!(
            localities = domains.localities.len(),
            subtypes = domains.property_subtypes.len(),
            conditions = domains.building_conditions.len(),
            "Application context ready"
        );

        Ok(Self {
            properties: store.properties,
            locations: LocationIndex::new(store.locations),
            domains,
            model,
            mae: config.mae.value,
            map_center: config.map_center.value,
        })
    }
}
