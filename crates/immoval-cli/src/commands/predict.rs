use anyhow::Result;
use serde::Serialize;

use immoval_core::config::LayeredConfig;
use immoval_core::models::{Amenities, ResolvedLocation};
use immoval_engine::{format_eur, AppContext, Pipeline, PredictionSession};

use crate::cli::PredictArgs;
use crate::output::OutputWriter;

#[derive(Serialize)]
struct PredictOutput {
    estimate: f64,
    estimate_formatted: String,
    band_low: f64,
    band_high: f64,
    elapsed_ms: f64,
    location: ResolvedLocation,
}

pub fn execute(args: PredictArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let ctx = AppContext::load(config)?;
    let pipeline = Pipeline::new(&ctx);

    let mut session = PredictionSession::new();

    if let (Some(lat), Some(lon)) = (args.lat, args.lon) {
        let record = pipeline.resolve_location(lat, lon)?;
        // In JSON mode stdout must stay a single document; the resolved
        // location is already part of the result payload.
        if !output.is_json() {
            output.info(format!(
                "Resolved location: {}, {} ({})",
                record.municipality, record.postal_code, record.province
            ));
        }
        session.set_location(record.resolved());
    }

    if let Some(property_type) = args.property_type {
        session.set_property_type(property_type.into());
    }
    if let Some(subtype) = args.subtype {
        session.set_subtype(subtype);
    }
    if let Some(condition) = args.condition {
        session.set_building_condition(condition);
    }
    if let Some(rooms) = args.rooms {
        session.set_rooms(rooms);
    }
    if let Some(living_area) = args.living_area {
        session.set_living_area(living_area);
    }
    if let Some(facades) = args.facades {
        session.set_facades(facades);
    }
    session.set_amenities(Amenities {
        kitchen: args.kitchen,
        terrace: args.terrace,
        garden: args.garden,
        swimming_pool: args.pool,
        lift: args.lift,
    });

    // An incomplete selection is a user-facing warning, not a failure.
    let ready = match session.begin_scoring() {
        Ok(ready) => ready,
        Err(warning) => {
            output.warning(warning);
            return Ok(());
        }
    };

    let outcome = pipeline.predict(&ready);
    session.mark_displayed();

    if output.is_json() {
        output.result(&PredictOutput {
            estimate: outcome.estimate,
            estimate_formatted: format_eur(outcome.estimate),
            band_low: outcome.band.0,
            band_high: outcome.band.1,
            elapsed_ms: outcome.elapsed.as_secs_f64() * 1000.0,
            location: ready.location,
        })?;
    } else {
        output.success(format!("Predicted price: {}", format_eur(outcome.estimate)));
        output.info(format!(
            "Confidence interval: {} - {}",
            format_eur(outcome.band.0),
            format_eur(outcome.band.1)
        ));
        output.info(format!(
            "Calculation time: {:.2} seconds",
            outcome.elapsed.as_secs_f64()
        ));
    }

    Ok(())
}
