use axum::{extract::State, Json};

use immoval_core::models::PropertyType;

use crate::dto::{DomainsResponse, TypeRules};
use crate::state::AppState;

/// Categorical domains plus the type-conditioned form rules.
pub async fn get_domains(State(state): State<AppState>) -> Json<DomainsResponse> {
    let domains = &state.ctx.domains;

    Json(DomainsResponse {
        localities: domains.localities.clone(),
        building_conditions: domains.building_conditions.clone(),
        types: vec![
            TypeRules::for_type(PropertyType::Apartment),
            TypeRules::for_type(PropertyType::House),
            TypeRules::for_type(PropertyType::Other),
        ],
        facades: [1, 4],
    })
}
