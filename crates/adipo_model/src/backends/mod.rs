//! Concrete classifier backends and the tagged document they are stored in.

mod gradient_boosting;
mod softmax;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::backend::Classifier;
use crate::error::BackendError;

pub use gradient_boosting::{GradientBoostingClassifier, Node, RegressionTree};
pub use softmax::SoftmaxRegression;

/// On-disk model artifact, tagged by `kind`.
///
/// ```json
/// {"kind": "softmax_regression", "weights": [[0.5], [-0.5]], "intercepts": [0.0, 0.0]}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelDocument {
    GradientBoosting(GradientBoostingClassifier),
    SoftmaxRegression(SoftmaxRegression),
}

impl ModelDocument {
    /// Validate the document's structure and turn it into a shareable backend.
    pub fn into_classifier(self) -> Result<Arc<dyn Classifier>, BackendError> {
        match self {
            ModelDocument::GradientBoosting(model) => {
                model.validate()?;
                Ok(Arc::new(model))
            }
            ModelDocument::SoftmaxRegression(model) => {
                model.validate()?;
                Ok(Arc::new(model))
            }
        }
    }
}
