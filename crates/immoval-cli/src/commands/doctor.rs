use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use immoval_core::config::LayeredConfig;
use immoval_data::ReferenceStore;
use immoval_model::PriceModel;

use crate::cli::DoctorArgs;
use crate::output::OutputWriter;

#[derive(Tabled, Serialize)]
struct CheckRow {
    #[tabled(rename = "Check")]
    check: &'static str,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Detail")]
    detail: String,
}

fn pass(check: &'static str, detail: String) -> CheckRow {
    CheckRow { check, status: "ok", detail }
}

fn fail(check: &'static str, detail: String) -> CheckRow {
    CheckRow { check, status: "FAILED", detail }
}

/// Verify every startup artifact the way the servers would load it.
pub fn execute(_args: DoctorArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let mut rows = Vec::new();
    let mut healthy = true;

    match ReferenceStore::load(&config.features_path.value, &config.locations_path.value) {
        Ok(store) => {
            rows.push(pass(
                "reference tables",
                format!(
                    "{} property rows, {} locations",
                    store.properties.len(),
                    store.locations.len()
                ),
            ));
            if store.locations.is_empty() {
                healthy = false;
                rows.push(fail(
                    "location coverage",
                    "location table is empty; clicks cannot resolve".to_string(),
                ));
            }
        }
        Err(e) => {
            healthy = false;
            rows.push(fail("reference tables", e.to_string()));
        }
    }

    match PriceModel::load(&config.model_path.value) {
        Ok(model) => rows.push(pass(
            "price model",
            format!(
                "{} trees, trained {}, MAE €{:.2}",
                model.tree_count(),
                model.trained_at().format("%Y-%m-%d"),
                model.mae()
            ),
        )),
        Err(e) => {
            healthy = false;
            rows.push(fail("price model", e.to_string()));
        }
    }

    output.table(rows);

    if healthy {
        output.success("All startup artifacts are healthy");
        Ok(())
    } else {
        output.error("One or more startup artifacts are unusable");
        anyhow::bail!("doctor found problems")
    }
}
