pub mod input;
pub mod location;
pub mod property;
pub mod selection;

pub use input::{FeatureValue, ModelInputVector, CATEGORICAL_FIELDS, FIELD_NAMES};
pub use location::{LocationRecord, ResolvedLocation};
pub use property::PropertyRecord;
pub use selection::{Amenities, PropertyType, RangeRules, ReadySelection, UserSelection};
