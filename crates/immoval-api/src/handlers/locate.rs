use axum::{extract::State, Json};

use immoval_engine::Pipeline;

use crate::dto::{LocateRequest, LocationMarker};
use crate::error::ApiError;
use crate::state::AppState;

/// Resolve a clicked map coordinate to the nearest known location.
pub async fn handle_locate(
    State(state): State<AppState>,
    Json(request): Json<LocateRequest>,
) -> Result<Json<LocationMarker>, ApiError> {
    if !request.lat.is_finite() || !request.lon.is_finite() {
        return Err(ApiError::bad_request("Coordinates must be finite numbers"));
    }

    let pipeline = Pipeline::new(&state.ctx);
    let record = pipeline.resolve_location(request.lat, request.lon)?;

    Ok(Json(LocationMarker::from(record)))
}
