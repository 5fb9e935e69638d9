//! Car price estimation core: a fixed feature schema derived from the
//! trained model artifact, an option catalog for rendering inputs, a
//! one-hot feature encoder and a single-call inference wrapper.

pub mod catalog;
pub mod encoder;
pub mod error;
pub mod estimator;
pub mod model;
pub mod schema;
pub mod selection;

pub use catalog::OptionCatalog;
pub use encoder::encode;
pub use error::EstimateError;
pub use estimator::PriceEstimator;
pub use model::{LinearModel, RegressionModel};
pub use schema::FeatureSchema;
pub use selection::{Gear, OfferType, Selection};
