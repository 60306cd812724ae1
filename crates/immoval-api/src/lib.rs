//! Immoval API - HTTP adapter for the map UI
//!
//! The interactive map front end lives in a separate process; this crate is
//! its entire contract with the estimation core: domain enumeration for the
//! form controls, click-to-location resolution, marker records for the
//! visible map envelope, and the prediction endpoint itself.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
