use serde::{Deserialize, Serialize};

use crate::backend::{check_width, softmax, Classifier};
use crate::error::BackendError;

/// Multinomial logistic regression: one weight row and intercept per class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftmaxRegression {
    weights: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    importances: Option<Vec<f64>>,
}

impl SoftmaxRegression {
    pub fn new(weights: Vec<Vec<f64>>, intercepts: Vec<f64>) -> Result<Self, BackendError> {
        let model = Self {
            weights,
            intercepts,
            importances: None,
        };
        model.validate()?;
        Ok(model)
    }

    pub(crate) fn validate(&self) -> Result<(), BackendError> {
        let invalid = |reason: String| Err(BackendError::InvalidModel(reason));
        if self.weights.len() < 2 {
            return invalid(format!("model has {} classes", self.weights.len()));
        }
        if self.intercepts.len() != self.weights.len() {
            return invalid(format!(
                "{} intercepts for {} classes",
                self.intercepts.len(),
                self.weights.len()
            ));
        }
        let width = self.weights[0].len();
        if width == 0 {
            return invalid("model has no features".into());
        }
        if let Some(k) = self.weights.iter().position(|row| row.len() != width) {
            return invalid(format!("weight row {k} has the wrong width"));
        }
        let all_finite = self
            .weights
            .iter()
            .flatten()
            .chain(&self.intercepts)
            .all(|v| v.is_finite());
        if !all_finite {
            return invalid("coefficients contain non-finite values".into());
        }
        if let Some(importances) = &self.importances {
            if importances.len() != width {
                return invalid(format!(
                    "{} importances for {width} features",
                    importances.len()
                ));
            }
        }
        Ok(())
    }
}

impl Classifier for SoftmaxRegression {
    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>, BackendError> {
        check_width(self.n_features(), features)?;
        let scores: Vec<f64> = self
            .weights
            .iter()
            .zip(&self.intercepts)
            .map(|(row, b)| b + row.iter().zip(features).map(|(w, x)| w * x).sum::<f64>())
            .collect();
        Ok(softmax(&scores))
    }

    fn n_features(&self) -> usize {
        self.weights.first().map_or(0, Vec::len)
    }

    fn n_classes(&self) -> usize {
        self.weights.len()
    }

    fn backend_name(&self) -> &str {
        "softmax_regression"
    }

    fn feature_importances(&self) -> Option<&[f64]> {
        self.importances.as_deref()
    }
}
