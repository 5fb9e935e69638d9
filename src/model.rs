use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::EstimateError;
use crate::schema::FeatureSchema;

/// A trained regression model: one numeric vector in, one scalar price
/// out. Injected into the estimator at construction so tests can
/// substitute a fake.
pub trait RegressionModel: Send + Sync {
    fn input_dim(&self) -> usize;

    /// Fails with `SchemaMismatch` when the vector length disagrees with
    /// the model's input dimension; that is a wiring defect, not a user
    /// error, and is never retried or coerced.
    fn predict(&self, x: &[f32]) -> Result<f32, EstimateError>;
}

#[derive(Deserialize)]
struct ModelArtifact {
    feat_list: Vec<String>,
    weights: Vec<f32>,
    intercept: f32,
}

/// Linear regression artifact deserialized once at startup. Read-only
/// afterwards, so it can be shared freely across sessions.
#[derive(Debug)]
pub struct LinearModel {
    weights: Vec<f32>,
    intercept: f32,
}

impl LinearModel {
    /// Load the artifact and derive the feature schema from its
    /// `feat_list`. Any failure here is fatal to startup; no core
    /// operation is possible without a model.
    pub fn load(path: &Path) -> Result<(Self, FeatureSchema), EstimateError> {
        let display = path.display().to_string();

        let raw = fs::read_to_string(path).map_err(|source| EstimateError::ModelRead {
            path: display.clone(),
            source,
        })?;
        let artifact: ModelArtifact =
            serde_json::from_str(&raw).map_err(|source| EstimateError::ModelParse {
                path: display.clone(),
                source,
            })?;

        if artifact.weights.len() != artifact.feat_list.len() {
            return Err(EstimateError::ModelInvalid {
                path: display,
                reason: format!(
                    "{} weights for {} features",
                    artifact.weights.len(),
                    artifact.feat_list.len()
                ),
            });
        }
        let schema = FeatureSchema::from_slots(artifact.feat_list).map_err(|defect| {
            EstimateError::ModelInvalid {
                path: display,
                reason: defect.to_string(),
            }
        })?;

        Ok((
            Self {
                weights: artifact.weights,
                intercept: artifact.intercept,
            },
            schema,
        ))
    }
}

impl RegressionModel for LinearModel {
    fn input_dim(&self) -> usize {
        self.weights.len()
    }

    fn predict(&self, x: &[f32]) -> Result<f32, EstimateError> {
        if x.len() != self.weights.len() {
            return Err(EstimateError::SchemaMismatch {
                got: x.len(),
                expected: self.weights.len(),
            });
        }
        let dot: f32 = self.weights.iter().zip(x).map(|(w, v)| w * v).sum();
        Ok(self.intercept + dot)
    }
}
