use serde::{Deserialize, Serialize};

/// Accepted input ranges; anything outside is a validation error before
/// encoding is attempted.
pub const MILEAGE_MIN: u32 = 0;
pub const MILEAGE_MAX: u32 = 900_000;
pub const HP_MIN: u32 = 1;
pub const HP_MAX: u32 = 2_000;
pub const YEAR_MIN: u16 = 1990;
pub const YEAR_MAX: u16 = 2025;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gear {
    Manual,
    Automatic,
}

impl Gear {
    pub const ALL: [Gear; 2] = [Gear::Manual, Gear::Automatic];

    pub fn label(self) -> &'static str {
        match self {
            Gear::Manual => "Manual",
            Gear::Automatic => "Automatic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfferType {
    #[serde(rename = "Employee's car")]
    EmployeesCar,
    Used,
    New,
    #[serde(rename = "Pre-registered")]
    PreRegistered,
}

impl OfferType {
    pub const ALL: [OfferType; 4] = [
        OfferType::EmployeesCar,
        OfferType::Used,
        OfferType::New,
        OfferType::PreRegistered,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OfferType::EmployeesCar => "Employee's car",
            OfferType::Used => "Used",
            OfferType::New => "New",
            OfferType::PreRegistered => "Pre-registered",
        }
    }
}

/// One submitted form: created per interaction, encoded once, discarded.
///
/// Make, model line and fuel stay open strings keyed against the schema;
/// gear and offer type are closed enumerations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub make: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub fuel: String,
    pub gear: Gear,
    #[serde(rename = "offerType")]
    pub offer_type: OfferType,
    pub mileage: u32,
    pub hp: u32,
    pub year: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offer_type_round_trips_display_strings() {
        let json = serde_json::to_string(&OfferType::EmployeesCar).unwrap();
        assert_eq!(json, "\"Employee's car\"");
        let back: OfferType = serde_json::from_str("\"Pre-registered\"").unwrap();
        assert_eq!(back, OfferType::PreRegistered);
    }

    #[test]
    fn selection_deserializes_without_model() {
        let sel: Selection = serde_json::from_str(
            r#"{
                "make": "BMW",
                "fuel": "Gasoline",
                "gear": "Automatic",
                "offerType": "Used",
                "mileage": 42000,
                "hp": 300,
                "year": 2021
            }"#,
        )
        .unwrap();
        assert_eq!(sel.make, "BMW");
        assert_eq!(sel.model, None);
        assert_eq!(sel.gear, Gear::Automatic);
        assert_eq!(sel.offer_type, OfferType::Used);
    }
}
