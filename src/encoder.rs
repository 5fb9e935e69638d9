use crate::schema::{
    FeatureSchema, FUEL_PREFIX, GEAR_MANUAL_SLOT, HP_SLOT, MAKE_PREFIX, MILEAGE_SLOT,
    MODEL_PREFIX, OFFER_EMPLOYEES_CAR_SLOT, OFFER_USED_SLOT, YEAR_SLOT,
};
use crate::selection::{Gear, OfferType, Selection};

/// Encode a selection onto the model's feature schema.
///
/// Pure and total: every slot defaults to 0.0, the three continuous slots
/// take their raw values, and each categorical value sets its indicator
/// only when the trained schema has a slot for it. A make, model line or
/// fuel the schema never saw leaves its slot group all-zero (the baseline
/// category) instead of failing; changing that policy would change
/// prediction outputs. Gear and offer type are one-vs-baseline binary
/// slots, so "Automatic", "New" and "Pre-registered" all encode to zero.
pub fn encode(selection: &Selection, schema: &FeatureSchema) -> Vec<f32> {
    let mut x = vec![0.0f32; schema.len()];
    let mut set = |name: &str, value: f32| {
        if let Some(i) = schema.position(name) {
            x[i] = value;
        }
    };

    set(MILEAGE_SLOT, selection.mileage as f32);
    set(HP_SLOT, selection.hp as f32);
    set(YEAR_SLOT, f32::from(selection.year));

    set(&format!("{MAKE_PREFIX}{}", selection.make), 1.0);
    if let Some(line) = &selection.model {
        set(&format!("{MODEL_PREFIX}{line}"), 1.0);
    }
    set(&format!("{FUEL_PREFIX}{}", selection.fuel), 1.0);

    if selection.gear == Gear::Manual {
        set(GEAR_MANUAL_SLOT, 1.0);
    }
    match selection.offer_type {
        OfferType::EmployeesCar => set(OFFER_EMPLOYEES_CAR_SLOT, 1.0),
        OfferType::Used => set(OFFER_USED_SLOT, 1.0),
        // no slot exists for these; both collapse into the baseline
        OfferType::New | OfferType::PreRegistered => {}
    }

    x
}
