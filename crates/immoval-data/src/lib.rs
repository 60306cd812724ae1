//! Immoval Data - The reference data store
//!
//! Loads the two static reference tables (property features, location
//! coordinates) once at startup and exposes read-only lookups: categorical
//! domain enumeration, nearest-location resolution, and the bounding-envelope
//! query backing the map marker layer.

pub mod domains;
pub mod loader;
pub mod spatial;

pub use domains::CategoricalDomains;
pub use loader::{LocationTable, PropertyTable, ReferenceStore};
pub use spatial::LocationIndex;
