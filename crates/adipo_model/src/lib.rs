//! Obesity-level classifier: artifact loading, inference backends and
//! result decoration.
//!
//! The model, its feature schema and its label encoder are produced by an
//! external training process and persisted as JSON artifacts. They are
//! loaded once into an immutable [`Predictor`], which can be cloned and
//! shared freely between requests and threads.
//!
//! ```no_run
//! use adipo_model::{ArtifactPaths, Predictor};
//!
//! let predictor = Predictor::load(&ArtifactPaths::in_dir("models"))?;
//! println!("{} features, {} classes", predictor.schema().len(), predictor.labels().len());
//! # Ok::<(), adipo_model::ArtifactError>(())
//! ```
pub mod artifacts;
pub mod backend;
pub mod backends;
pub mod error;
pub mod importance;
pub mod insights;
pub mod labels;
pub mod metadata;
pub mod predictor;

pub use artifacts::ArtifactPaths;
pub use backend::{argmax, softmax, Classifier};
pub use backends::{GradientBoostingClassifier, ModelDocument, Node, RegressionTree, SoftmaxRegression};
pub use error::{ArtifactError, BackendError, PredictError};
pub use importance::{local_sensitivity, ranked_feature_importances, FeatureImportance};
pub use insights::{insights, Insight, InsightKind};
pub use labels::{LabelEncoder, LabelError};
pub use metadata::{ModelMetadata, ModelVersion};
pub use predictor::{ClassProbability, Prediction, Predictor};
