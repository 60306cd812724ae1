use axum::{
    extract::{Query, State},
    Json,
};

use crate::dto::{LocationMarker, LocationsQuery};
use crate::state::AppState;

/// Half-width of the fallback envelope around the configured map center,
/// in degrees. Matches the map's initial viewport.
const DEFAULT_ENVELOPE_RADIUS: f64 = 0.1;

/// Markers inside the visible map bounds. When the client supplies no usable
/// bounds, the default envelope around the configured center is used instead;
/// this route never fails on bad bounds.
pub async fn list_locations(
    State(state): State<AppState>,
    Query(query): Query<LocationsQuery>,
) -> Json<Vec<LocationMarker>> {
    let (min, max) = match query.envelope() {
        Some(envelope) => envelope,
        None => {
            let (lat, lon) = state.ctx.map_center;
            tracing::debug!("No usable bounds supplied, using default envelope");
            (
                (lat - DEFAULT_ENVELOPE_RADIUS, lon - DEFAULT_ENVELOPE_RADIUS),
                (lat + DEFAULT_ENVELOPE_RADIUS, lon + DEFAULT_ENVELOPE_RADIUS),
            )
        }
    };

    let markers = state
        .ctx
        .locations
        .within_envelope(min, max)
        .into_iter()
        .map(LocationMarker::from)
        .collect();

    Json(markers)
}
