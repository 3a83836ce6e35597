use serde::{Deserialize, Serialize};

use crate::backend::{check_width, softmax, Classifier};
use crate::error::BackendError;

/// One node of a regression tree.
///
/// Samples with `x[feature] <= threshold` descend to `left`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

/// Flat regression tree; node 0 is the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    pub nodes: Vec<Node>,
}

impl RegressionTree {
    fn validate(&self, n_features: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".into());
        }
        for (i, node) in self.nodes.iter().enumerate() {
            match *node {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= n_features {
                        return Err(format!("node {i} splits on feature {feature}"));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {i} has a non-finite threshold"));
                    }
                    // Children strictly after their parent: guarantees termination.
                    for child in [left, right] {
                        if child <= i || child >= self.nodes.len() {
                            return Err(format!("node {i} points to invalid child {child}"));
                        }
                    }
                }
                Node::Leaf { value } if !value.is_finite() => {
                    return Err(format!("leaf {i} has a non-finite value"));
                }
                Node::Leaf { .. } => {}
            }
        }
        Ok(())
    }

    /// Leaf value reached by `features`. Assumes a validated tree.
    pub fn evaluate(&self, features: &[f64]) -> f64 {
        let mut index = 0;
        loop {
            match self.nodes.get(index) {
                Some(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    index = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                Some(Node::Leaf { value }) => return *value,
                None => return 0.0,
            }
        }
    }
}

/// Multi-class gradient-boosted tree ensemble.
///
/// Each stage holds one tree per class. The raw score of class `k` is
/// `init[k] + learning_rate * sum(stage[k](x))`, turned into probabilities
/// with a softmax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientBoostingClassifier {
    n_features: usize,
    n_classes: usize,
    learning_rate: f64,
    init: Vec<f64>,
    stages: Vec<Vec<RegressionTree>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    importances: Option<Vec<f64>>,
}

impl GradientBoostingClassifier {
    pub fn new(
        n_features: usize,
        learning_rate: f64,
        init: Vec<f64>,
        stages: Vec<Vec<RegressionTree>>,
    ) -> Result<Self, BackendError> {
        let model = Self {
            n_features,
            n_classes: init.len(),
            learning_rate,
            init,
            stages,
            importances: None,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn with_importances(mut self, importances: Vec<f64>) -> Result<Self, BackendError> {
        self.importances = Some(importances);
        self.validate()?;
        Ok(self)
    }

    pub fn n_stages(&self) -> usize {
        self.stages.len()
    }

    pub(crate) fn validate(&self) -> Result<(), BackendError> {
        let invalid = |reason: String| Err(BackendError::InvalidModel(reason));
        if self.n_features == 0 {
            return invalid("model has no features".into());
        }
        if self.n_classes < 2 {
            return invalid(format!("model has {} classes", self.n_classes));
        }
        if self.init.len() != self.n_classes {
            return invalid(format!(
                "init has {} scores for {} classes",
                self.init.len(),
                self.n_classes
            ));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return invalid(format!("learning rate {} is not positive", self.learning_rate));
        }
        if self.init.iter().any(|v| !v.is_finite()) {
            return invalid("init contains non-finite scores".into());
        }
        for (s, stage) in self.stages.iter().enumerate() {
            if stage.len() != self.n_classes {
                return invalid(format!(
                    "stage {s} has {} trees for {} classes",
                    stage.len(),
                    self.n_classes
                ));
            }
            for (k, tree) in stage.iter().enumerate() {
                tree.validate(self.n_features)
                    .or_else(|reason| invalid(format!("stage {s}, class {k}: {reason}")))?;
            }
        }
        if let Some(importances) = &self.importances {
            if importances.len() != self.n_features {
                return invalid(format!(
                    "{} importances for {} features",
                    importances.len(),
                    self.n_features
                ));
            }
        }
        Ok(())
    }

    /// Raw additive scores before the softmax.
    pub fn decision_function(&self, features: &[f64]) -> Result<Vec<f64>, BackendError> {
        check_width(self.n_features, features)?;
        let mut scores = self.init.clone();
        for stage in &self.stages {
            for (score, tree) in scores.iter_mut().zip(stage) {
                *score += self.learning_rate * tree.evaluate(features);
            }
        }
        Ok(scores)
    }
}

impl Classifier for GradientBoostingClassifier {
    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>, BackendError> {
        Ok(softmax(&self.decision_function(features)?))
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn n_classes(&self) -> usize {
        self.n_classes
    }

    fn backend_name(&self) -> &str {
        "gradient_boosting"
    }

    fn feature_importances(&self) -> Option<&[f64]> {
        self.importances.as_deref()
    }
}
