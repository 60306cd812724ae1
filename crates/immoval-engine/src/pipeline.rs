//! The end-to-end prediction pipeline.

use std::time::{Duration, Instant};

use immoval_core::error::Result;
use immoval_core::models::{LocationRecord, ReadySelection};

use crate::assemble::assemble;
use crate::context::AppContext;

/// What the UI displays: the point estimate, the fixed-width confidence
/// band, and the wall-clock inference duration.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutcome {
    /// Point estimate in EUR
    pub estimate: f64,
    /// `estimate ± MAE`; the MAE is a constant calibrated offline
    pub band: (f64, f64),
    pub elapsed: Duration,
}

/// Orchestrates location resolution, feature assembly, and scoring over a
/// shared [`AppContext`]. Stateless; one instance serves every request.
pub struct Pipeline<'a> {
    ctx: &'a AppContext,
}

impl<'a> Pipeline<'a> {
    pub fn new(ctx: &'a AppContext) -> Self {
        Self { ctx }
    }

    /// Resolve a clicked map coordinate to the nearest known location.
    pub fn resolve_location(&self, lat: f64, lon: f64) -> Result<&'a LocationRecord> {
        let record = self.ctx.locations.nearest(lat, lon)?;
        tracing::debug!(
            lat,
            lon,
            postal_code = %record.postal_code,
            municipality = %record.municipality,
            "Resolved map click"
        );
        Ok(record)
    }

    /// Score a completed selection. Infallible: assembly is total and the
    /// model is validated at load time.
    pub fn predict(&self, selection: &ReadySelection) -> PredictionOutcome {
        let started = Instant::now();

        let assembled = assemble(&self.ctx.properties, selection);
        let estimate = self.ctx.model.predict(&assembled.vector, assembled.categorical_fields);

        let elapsed = started.elapsed();
        let band = (estimate - self.ctx.mae, estimate + self.ctx.mae);

        tracing::info!(
            estimate,
            band_low = band.0,
            band_high = band.1,
            elapsed_ms = elapsed.as_millis() as u64,
            subtype = %selection.subtype,
            postal_code = %selection.location.postal_code,
            "Prediction complete"
        );

        PredictionOutcome { estimate, band, elapsed }
    }
}
