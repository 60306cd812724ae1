//! Immoval Engine - Feature assembly and the prediction pipeline
//!
//! Sits between the reference data store / price model and the UI adapters:
//! builds the model-ready input row from a completed selection, gates scoring
//! behind the request state machine, and produces the displayed outcome
//! (estimate, confidence band, inference duration).

pub mod assemble;
pub mod context;
pub mod format;
pub mod pipeline;
pub mod session;

pub use assemble::{assemble, safe_log, AssembledInput};
pub use context::AppContext;
pub use format::format_eur;
pub use pipeline::{Pipeline, PredictionOutcome};
pub use session::{Phase, PreconditionWarning, PredictionSession};
