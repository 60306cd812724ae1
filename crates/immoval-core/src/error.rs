//! Error types for Immoval

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImmovalError {
    // Reference data errors
    #[error("Failed to load reference table from {path}: {reason}")]
    DataLoad { path: PathBuf, reason: String },

    #[error("Reference table '{table}' is empty")]
    EmptyTable { table: String },

    // Model errors
    #[error("Failed to load price model from {path}: {reason}")]
    ModelLoad { path: PathBuf, reason: String },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ImmovalError>;
