//! Global and per-case feature importance.

use adipo_encoder::FeatureVector;
use serde::{Deserialize, Serialize};

use crate::error::PredictError;
use crate::predictor::Predictor;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub column: String,
    pub importance: f64,
}

fn ranked(columns: &[String], scores: &[f64]) -> Vec<FeatureImportance> {
    let mut out: Vec<FeatureImportance> = columns
        .iter()
        .zip(scores)
        .map(|(column, &importance)| FeatureImportance {
            column: column.clone(),
            importance,
        })
        .collect();
    // Stable: equal scores keep schema order.
    out.sort_by(|a, b| b.importance.total_cmp(&a.importance));
    out
}

/// Importances recorded by the model, most important first.
///
/// `None` when the backend carries no importances.
pub fn ranked_feature_importances(predictor: &Predictor) -> Option<Vec<FeatureImportance>> {
    let scores = predictor.classifier().feature_importances()?;
    Some(ranked(predictor.schema().columns(), scores))
}

/// How strongly each feature moves the predicted class probability around
/// this particular vector.
///
/// Each feature is nudged by `±epsilon` and the central difference of the
/// predicted class's probability is taken. Works for every backend, including
/// those without recorded importances.
pub fn local_sensitivity(
    predictor: &Predictor,
    vector: &FeatureVector,
    epsilon: f64,
) -> Result<Vec<FeatureImportance>, PredictError> {
    predictor.schema().check(vector)?;
    let classifier = predictor.classifier();
    let baseline = vector.values();
    let target = classifier.predict(baseline)?;
    let eps = if epsilon.is_finite() && epsilon > 0.0 {
        epsilon
    } else {
        1e-3
    };

    let probability_at = |x: &[f64]| -> Result<f64, PredictError> {
        let proba = classifier.predict_proba(x)?;
        proba
            .get(target)
            .copied()
            .ok_or(PredictError::UnknownClassIndex(target))
    };

    let mut scores = Vec::with_capacity(baseline.len());
    for i in 0..baseline.len() {
        let mut up = baseline.to_vec();
        let mut down = baseline.to_vec();
        up[i] += eps;
        down[i] -= eps;
        let delta = probability_at(&up)? - probability_at(&down)?;
        scores.push((delta / (2.0 * eps)).abs());
    }
    Ok(ranked(predictor.schema().columns(), &scores))
}
