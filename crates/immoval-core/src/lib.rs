//! Immoval Core - Domain models, error taxonomy, and configuration
//!
//! This crate contains the shared domain types for the price estimation system.

pub mod config;
pub mod error;
pub mod models;

pub use error::{ImmovalError, Result};
