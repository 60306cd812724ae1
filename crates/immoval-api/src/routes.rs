use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Form domains and rules
        .route("/api/v1/domains", get(handlers::get_domains))

        // Map support: markers and click resolution
        .route("/api/v1/locations", get(handlers::list_locations))
        .route("/api/v1/locate", post(handlers::handle_locate))

        // Scoring
        .route("/api/v1/predict", post(handlers::handle_predict))

        .with_state(state)
}
