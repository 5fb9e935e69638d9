use std::collections::BTreeMap;

use serde::Serialize;

use crate::schema::{FeatureSchema, FUEL_PREFIX, MAKE_PREFIX, MODEL_PREFIX};
use crate::selection::{Gear, OfferType};

/// Make to model-line association. A make absent here (or whose lines all
/// filter out against the schema) sells under its make flag alone and the
/// model-selection step is skipped for it.
const MAKE_MODELS: &[(&str, &[&str])] = &[
    ("Aston", &["Martin"]),
    ("Audi", &["R8"]),
    ("Ferrari", &["812"]),
    ("Lamborghini", &["Aventador"]),
    ("Land", &["Rover Range Rover", "Rover Defender"]),
    ("Maybach", &["Pullman", "S 650"]),
    ("McLaren", &["720S"]),
    ("Mercedes-Benz", &["G 350", "G 500", "G 63 AMG", "SLS"]),
    ("Porsche", &["991"]),
    ("Volkswagen", &["T6 California", "T6 Multivan"]),
];

/// The legal choices for every categorical input.
///
/// Makes, model lines and fuel types are derived from the feature schema,
/// so only values the trained model can actually distinguish are offered.
/// Gear and offer type keep their baseline categories, which have no
/// schema slot, and are fixed enumerations instead.
#[derive(Debug, Clone, Serialize)]
pub struct OptionCatalog {
    makes: Vec<String>,
    models: BTreeMap<String, Vec<String>>,
    fuel_types: Vec<String>,
    gear_types: Vec<&'static str>,
    offer_types: Vec<&'static str>,
}

impl OptionCatalog {
    pub fn from_schema(schema: &FeatureSchema) -> Self {
        let mut makes: Vec<String> = schema
            .values_with_prefix(MAKE_PREFIX)
            .map(str::to_owned)
            .collect();
        makes.sort();

        let mut fuel_types: Vec<String> = schema
            .values_with_prefix(FUEL_PREFIX)
            .map(str::to_owned)
            .collect();
        fuel_types.sort();

        let mut models = BTreeMap::new();
        for (make, lines) in MAKE_MODELS {
            if !makes.iter().any(|m| m == make) {
                continue;
            }
            let offered: Vec<String> = lines
                .iter()
                .filter(|line| schema.position(&format!("{MODEL_PREFIX}{line}")).is_some())
                .map(|line| (*line).to_owned())
                .collect();
            if !offered.is_empty() {
                models.insert((*make).to_owned(), offered);
            }
        }

        Self {
            makes,
            models,
            fuel_types,
            gear_types: Gear::ALL.iter().map(|g| g.label()).collect(),
            offer_types: OfferType::ALL.iter().map(|o| o.label()).collect(),
        }
    }

    /// All known makes, sorted lexicographically.
    pub fn makes(&self) -> &[String] {
        &self.makes
    }

    /// Model lines offered for `make`; empty when the make has no
    /// finer-grained list.
    pub fn models_for_make(&self, make: &str) -> &[String] {
        self.models.get(make).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fuel_types(&self) -> &[String] {
        &self.fuel_types
    }

    pub fn gear_types(&self) -> &[&'static str] {
        &self.gear_types
    }

    pub fn offer_types(&self) -> &[&'static str] {
        &self.offer_types
    }
}
