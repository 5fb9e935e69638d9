use std::sync::Arc;

use crate::catalog::OptionCatalog;
use crate::encoder::encode;
use crate::error::EstimateError;
use crate::model::RegressionModel;
use crate::schema::FeatureSchema;
use crate::selection::{
    Selection, HP_MAX, HP_MIN, MILEAGE_MAX, MILEAGE_MIN, YEAR_MAX, YEAR_MIN,
};

/// The boundary the presentation shell talks to: catalog contents for
/// rendering inputs, and validate-encode-predict on demand.
pub struct PriceEstimator {
    model: Arc<dyn RegressionModel>,
    schema: FeatureSchema,
    catalog: OptionCatalog,
}

impl PriceEstimator {
    pub fn new(model: Arc<dyn RegressionModel>, schema: FeatureSchema) -> Self {
        let catalog = OptionCatalog::from_schema(&schema);
        Self {
            model,
            schema,
            catalog,
        }
    }

    pub fn catalog(&self) -> &OptionCatalog {
        &self.catalog
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Validate, encode and run one inference call. Range and make/model
    /// violations surface before any encoding happens; inference is not
    /// attempted for an invalid selection.
    pub fn estimate(&self, selection: &Selection) -> Result<f32, EstimateError> {
        self.validate(selection)?;
        let x = encode(selection, &self.schema);
        self.model.predict(&x)
    }

    fn validate(&self, selection: &Selection) -> Result<(), EstimateError> {
        check_range(
            "mileage",
            selection.mileage.into(),
            MILEAGE_MIN.into(),
            MILEAGE_MAX.into(),
        )?;
        check_range("hp", selection.hp.into(), HP_MIN.into(), HP_MAX.into())?;
        check_range(
            "year",
            selection.year.into(),
            YEAR_MIN.into(),
            YEAR_MAX.into(),
        )?;
        if let Some(line) = &selection.model {
            let offered = self.catalog.models_for_make(&selection.make);
            if !offered.iter().any(|m| m == line) {
                return Err(EstimateError::ModelNotOffered {
                    make: selection.make.clone(),
                    model: line.clone(),
                });
            }
        }
        Ok(())
    }
}

fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), EstimateError> {
    if value < min || value > max {
        return Err(EstimateError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{Gear, OfferType};

    /// Sums its input; enough to observe which slots were set.
    struct SummingModel {
        dim: usize,
    }

    impl RegressionModel for SummingModel {
        fn input_dim(&self) -> usize {
            self.dim
        }

        fn predict(&self, x: &[f32]) -> Result<f32, EstimateError> {
            if x.len() != self.dim {
                return Err(EstimateError::SchemaMismatch {
                    got: x.len(),
                    expected: self.dim,
                });
            }
            Ok(x.iter().sum())
        }
    }

    fn schema() -> FeatureSchema {
        let names = [
            "mileage",
            "hp",
            "year",
            "make_BMW",
            "make_Ferrari",
            "model_812",
            "fuel_Diesel",
            "fuel_Gasoline",
            "gear_Manual",
            "offerType_Employee's car",
            "offerType_Used",
        ];
        FeatureSchema::from_slots(names.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    fn estimator() -> PriceEstimator {
        let schema = schema();
        let model = Arc::new(SummingModel { dim: schema.len() });
        PriceEstimator::new(model, schema)
    }

    fn valid_selection() -> Selection {
        Selection {
            make: "Ferrari".to_string(),
            model: Some("812".to_string()),
            fuel: "Diesel".to_string(),
            gear: Gear::Manual,
            offer_type: OfferType::Used,
            mileage: 60_000,
            hp: 150,
            year: 2018,
        }
    }

    #[test]
    fn valid_selection_yields_finite_price() {
        let est = estimator();
        let price = est.estimate(&valid_selection()).unwrap();
        assert!(price.is_finite());
        // mileage + hp + year + five indicator slots
        assert_eq!(price, 60_000.0 + 150.0 + 2018.0 + 5.0);
    }

    #[test]
    fn estimate_is_idempotent() {
        let est = estimator();
        let sel = valid_selection();
        assert_eq!(est.estimate(&sel).unwrap(), est.estimate(&sel).unwrap());
    }

    #[test]
    fn mileage_bounds_are_inclusive() {
        let est = estimator();
        for ok in [0, 900_000] {
            let sel = Selection {
                mileage: ok,
                ..valid_selection()
            };
            assert!(est.estimate(&sel).is_ok(), "mileage {ok} should pass");
        }
        let sel = Selection {
            mileage: 900_001,
            ..valid_selection()
        };
        let err = est.estimate(&sel).unwrap_err();
        assert!(matches!(
            err,
            EstimateError::OutOfRange {
                field: "mileage",
                value: 900_001,
                ..
            }
        ));
    }

    #[test]
    fn zero_hp_is_rejected() {
        let est = estimator();
        let sel = Selection {
            hp: 0,
            ..valid_selection()
        };
        let err = est.estimate(&sel).unwrap_err();
        assert!(matches!(err, EstimateError::OutOfRange { field: "hp", .. }));
    }

    #[test]
    fn pre_1990_year_is_rejected() {
        let est = estimator();
        let sel = Selection {
            year: 1989,
            ..valid_selection()
        };
        let err = est.estimate(&sel).unwrap_err();
        assert!(matches!(
            err,
            EstimateError::OutOfRange { field: "year", .. }
        ));
        assert!(err.is_validation());
    }

    #[test]
    fn model_line_must_belong_to_the_selected_make() {
        let est = estimator();
        let sel = Selection {
            make: "BMW".to_string(),
            model: Some("812".to_string()),
            ..valid_selection()
        };
        let err = est.estimate(&sel).unwrap_err();
        assert!(matches!(err, EstimateError::ModelNotOffered { .. }));
    }

    #[test]
    fn unknown_make_is_not_a_validation_error() {
        // silent-baseline policy: the encoder sets no make flag, but the
        // call still succeeds
        let est = estimator();
        let sel = Selection {
            make: "Tesla".to_string(),
            model: None,
            ..valid_selection()
        };
        let price = est.estimate(&sel).unwrap();
        assert_eq!(price, 60_000.0 + 150.0 + 2018.0 + 3.0);
    }

    #[test]
    fn dimension_drift_surfaces_as_schema_mismatch() {
        let schema = schema();
        let model = Arc::new(SummingModel {
            dim: schema.len() + 1,
        });
        let est = PriceEstimator::new(model, schema);
        let err = est.estimate(&valid_selection()).unwrap_err();
        assert!(matches!(err, EstimateError::SchemaMismatch { .. }));
        assert!(!err.is_validation());
    }
}
