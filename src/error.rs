use thiserror::Error;

/// Everything that can go wrong between a submitted selection and a price.
///
/// Range and make/model violations are caller mistakes and are reported
/// before encoding; the rest are artifact or wiring defects and abort the
/// call (or startup) with full context instead of degrading.
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("{field} out of range: {value} (allowed {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("model {model:?} is not offered for make {make:?}")]
    ModelNotOffered { make: String, model: String },

    #[error("feature vector length mismatch: got {got}, model expects {expected}")]
    SchemaMismatch { got: usize, expected: usize },

    #[error("failed to read model artifact at {path}")]
    ModelRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model artifact at {path}")]
    ModelParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("model artifact at {path} is inconsistent: {reason}")]
    ModelInvalid { path: String, reason: String },
}

impl EstimateError {
    /// True for errors the caller can fix by correcting the form input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. } | Self::ModelNotOffered { .. }
        )
    }
}
