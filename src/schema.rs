use std::collections::HashMap;
use thiserror::Error;

/// Slot names for the three continuous features. Always present; the
/// artifact is rejected at load time otherwise.
pub const MILEAGE_SLOT: &str = "mileage";
pub const HP_SLOT: &str = "hp";
pub const YEAR_SLOT: &str = "year";

/// Naming convention for indicator slots: `<prefix><category value>`.
pub const MAKE_PREFIX: &str = "make_";
pub const MODEL_PREFIX: &str = "model_";
pub const FUEL_PREFIX: &str = "fuel_";

/// Gear is a single one-vs-baseline binary slot; "Automatic" has no slot
/// and is represented by leaving this one at zero.
pub const GEAR_MANUAL_SLOT: &str = "gear_Manual";

/// Offer type carries two indicator slots. "New" and "Pre-registered"
/// were baseline categories when the model was fit and have no slot.
pub const OFFER_EMPLOYEES_CAR_SLOT: &str = "offerType_Employee's car";
pub const OFFER_USED_SLOT: &str = "offerType_Used";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaDefect {
    #[error("duplicate slot name {0:?}")]
    DuplicateSlot(String),
    #[error("missing continuous slot {0:?}")]
    MissingContinuousSlot(&'static str),
}

/// The ordered feature slots the trained model expects, with a reverse
/// index for encode-time lookups.
///
/// This is the single source of truth for feature naming: the encoder
/// consults it directly and the option catalog is derived from it, so the
/// offered choices cannot drift away from what the model was fit on.
/// Built once from the model artifact and immutable afterwards.
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    slots: Vec<String>,
    index: HashMap<String, usize>,
}

impl FeatureSchema {
    pub fn from_slots(slots: Vec<String>) -> Result<Self, SchemaDefect> {
        let mut index = HashMap::with_capacity(slots.len());
        for (i, name) in slots.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(SchemaDefect::DuplicateSlot(name.clone()));
            }
        }
        let schema = Self { slots, index };
        for slot in [MILEAGE_SLOT, HP_SLOT, YEAR_SLOT] {
            if schema.position(slot).is_none() {
                return Err(SchemaDefect::MissingContinuousSlot(slot));
            }
        }
        Ok(schema)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn slot_names(&self) -> &[String] {
        &self.slots
    }

    /// Category values recovered from indicator slot names, in schema
    /// order; e.g. `values_with_prefix(MAKE_PREFIX)` yields "BMW" for the
    /// slot "make_BMW".
    pub fn values_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> {
        self.slots.iter().filter_map(move |s| s.strip_prefix(prefix))
    }
}
