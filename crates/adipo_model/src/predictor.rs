//! Encoding, inference and result decoration for one request.

use std::fmt;
use std::sync::Arc;

use adipo_case::{Language, ObesityLevel, RawCase};
use adipo_encoder::{encode, FeatureSchema, FeatureVector};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::artifacts::{check_compatible, load_artifacts, ArtifactPaths, Artifacts};
use crate::backend::Classifier;
use crate::error::{ArtifactError, BackendError, PredictError};
use crate::labels::LabelEncoder;
use crate::metadata::ModelMetadata;

/// Allowed deviation of the probability sum from 1.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassProbability {
    pub level: ObesityLevel,
    pub probability: f64,
}

/// Outcome of classifying one case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub level: ObesityLevel,
    pub class_index: usize,
    /// Probability of the predicted class
    pub confidence: f64,
    /// One entry per class, in label-encoder order
    pub probabilities: Vec<ClassProbability>,
}

impl Prediction {
    /// Probabilities sorted from most to least likely.
    pub fn ranked(&self) -> Vec<ClassProbability> {
        let mut ranked = self.probabilities.clone();
        ranked.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        ranked
    }

    pub fn probability_of(&self, level: ObesityLevel) -> Option<f64> {
        self.probabilities
            .iter()
            .find(|p| p.level == level)
            .map(|p| p.probability)
    }

    pub fn label(&self, language: Language) -> &'static str {
        self.level.label(language)
    }
}

/// Immutable bundle of classifier, label encoder and feature schema.
///
/// Cloning is cheap; all clones share the same loaded artifacts.
#[derive(Clone)]
pub struct Predictor {
    classifier: Arc<dyn Classifier>,
    labels: Arc<LabelEncoder>,
    schema: FeatureSchema,
    metadata: Arc<ModelMetadata>,
}

impl Predictor {
    pub fn new(
        classifier: Arc<dyn Classifier>,
        labels: LabelEncoder,
        schema: FeatureSchema,
    ) -> Result<Self, ArtifactError> {
        check_compatible(classifier.as_ref(), &labels, &schema)?;
        Ok(Self {
            classifier,
            labels: Arc::new(labels),
            schema,
            metadata: Arc::new(ModelMetadata::default()),
        })
    }

    pub fn from_artifacts(artifacts: Artifacts) -> Result<Self, ArtifactError> {
        let Artifacts {
            classifier,
            labels,
            schema,
            metadata,
        } = artifacts;
        Ok(Self::new(classifier, labels, schema)?.with_metadata(metadata))
    }

    pub fn load(paths: &ArtifactPaths) -> Result<Self, ArtifactError> {
        Self::from_artifacts(load_artifacts(paths)?)
    }

    pub fn with_metadata(mut self, metadata: ModelMetadata) -> Self {
        self.metadata = Arc::new(metadata);
        self
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn labels(&self) -> &LabelEncoder {
        &self.labels
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    /// Encode a case against the loaded schema.
    pub fn encode(&self, case: &RawCase) -> Result<FeatureVector, PredictError> {
        Ok(encode(case, &self.schema)?)
    }

    pub fn predict(&self, case: &RawCase) -> Result<Prediction, PredictError> {
        let vector = self.encode(case)?;
        self.predict_encoded(&vector)
    }

    /// Classify an already-encoded vector. It must come from this schema.
    pub fn predict_encoded(&self, vector: &FeatureVector) -> Result<Prediction, PredictError> {
        self.schema.check(vector)?;
        let values = vector.values();
        let class_index = self.classifier.predict(values)?;
        let proba = self.classifier.predict_proba(values)?;
        if let Err(e) = self.check_output(&proba, class_index) {
            warn!("rejected {} output: {e}", self.classifier.backend_name());
            return Err(e);
        }

        let level = self
            .labels
            .decode(class_index)
            .ok_or(PredictError::UnknownClassIndex(class_index))?;
        let confidence = proba[class_index];
        debug!("predicted {level} with confidence {confidence:.4}");

        let probabilities = self
            .labels
            .classes()
            .iter()
            .zip(proba)
            .map(|(&level, probability)| ClassProbability { level, probability })
            .collect();
        Ok(Prediction {
            level,
            class_index,
            confidence,
            probabilities,
        })
    }

    fn check_output(&self, proba: &[f64], class_index: usize) -> Result<(), PredictError> {
        let invalid = |reason: String| -> Result<(), PredictError> {
            Err(BackendError::InvalidOutput(reason).into())
        };
        if proba.len() != self.labels.len() {
            return invalid(format!(
                "{} probabilities for {} classes",
                proba.len(),
                self.labels.len()
            ));
        }
        if let Some(p) = proba.iter().find(|p| !p.is_finite() || **p < 0.0) {
            return invalid(format!("probability {p} is not a finite non-negative number"));
        }
        let sum: f64 = proba.iter().sum();
        if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
            return invalid(format!("probabilities sum to {sum}"));
        }
        let Some(&chosen) = proba.get(class_index) else {
            return Err(PredictError::UnknownClassIndex(class_index));
        };
        let max = proba.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        if chosen < max {
            return invalid(format!(
                "predicted class {class_index} has probability {chosen} below the maximum {max}"
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for Predictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predictor")
            .field("backend", &self.classifier.backend_name())
            .field("features", &self.schema.len())
            .field("classes", &self.labels.classes())
            .field("version", &self.metadata.version.to_string())
            .finish()
    }
}
