mod request;
mod response;

pub use request::{LocateRequest, LocationsQuery, PredictRequest};
pub use response::{
    DomainsResponse, HealthResponse, LocationMarker, PredictResponse, TypeRules,
};
