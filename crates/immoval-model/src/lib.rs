//! Immoval Model - The price predictor
//!
//! Wraps the pretrained gradient-boosted regression artifact: deserializes
//! it once at startup, then scores single assembled input rows. The model
//! was trained on a log-price target, so every prediction passes through the
//! `exp` inverse transform before anything downstream sees it.

pub mod artifact;
pub mod predictor;

pub use artifact::{ModelArtifact, ModelMetadata, Node, Tree};
pub use predictor::{PriceModel, ScoringPool};
