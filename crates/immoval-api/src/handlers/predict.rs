use axum::{extract::State, Json};

use immoval_engine::{format_eur, Pipeline, PredictionSession};

use crate::dto::{PredictRequest, PredictResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Score a form submission.
///
/// The request carries the raw click coordinate and whatever form fields
/// are set; location resolution and the precondition check run here, and an
/// incomplete submission comes back as a 422 warning.
pub async fn handle_predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let pipeline = Pipeline::new(&state.ctx);

    let mut session = PredictionSession::new();

    if let (Some(lat), Some(lon)) = (request.lat, request.lon) {
        if lat.is_finite() && lon.is_finite() {
            let record = pipeline.resolve_location(lat, lon)?;
            session.set_location(record.resolved());
        }
    }

    if let Some(property_type) = request.property_type {
        session.set_property_type(property_type);
    }
    if let Some(subtype) = request.subtype {
        session.set_subtype(subtype);
    }
    if let Some(condition) = request.building_condition {
        session.set_building_condition(condition);
    }
    if let Some(rooms) = request.rooms {
        session.set_rooms(rooms);
    }
    if let Some(living_area) = request.living_area {
        session.set_living_area(living_area);
    }
    if let Some(facades) = request.facades {
        session.set_facades(facades);
    }
    session.set_amenities(request.amenities);

    let ready = session.begin_scoring()?;
    let outcome = pipeline.predict(&ready);
    session.mark_displayed();

    Ok(Json(PredictResponse {
        estimate: outcome.estimate,
        estimate_formatted: format_eur(outcome.estimate),
        band_low: outcome.band.0,
        band_high: outcome.band.1,
        band_formatted: format!(
            "{} - {}",
            format_eur(outcome.band.0),
            format_eur(outcome.band.1)
        ),
        elapsed_ms: outcome.elapsed.as_secs_f64() * 1000.0,
        location: ready.location,
    }))
}
