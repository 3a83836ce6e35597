//! Pluggable classifier trait.

use crate::error::BackendError;

/// Multi-class classifier over a fixed-width feature vector.
///
/// Implementations hold no mutable state, so one instance can serve
/// concurrent requests.
pub trait Classifier: Send + Sync {
    /// Class probabilities, indexed like the label encoder.
    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>, BackendError>;

    /// Most probable class index.
    fn predict(&self, features: &[f64]) -> Result<usize, BackendError> {
        let proba = self.predict_proba(features)?;
        argmax(&proba)
            .ok_or_else(|| BackendError::InvalidOutput("empty probability vector".into()))
    }

    fn n_features(&self) -> usize;

    fn n_classes(&self) -> usize;

    /// Backend identifier
    fn backend_name(&self) -> &str;

    /// Global per-feature importances, when the model records them.
    fn feature_importances(&self) -> Option<&[f64]> {
        None
    }
}

/// Reject inputs whose width differs from what the model was fitted on.
pub(crate) fn check_width(expected: usize, features: &[f64]) -> Result<(), BackendError> {
    if features.len() != expected {
        return Err(BackendError::InvalidInput(format!(
            "expected {expected} features, got {}",
            features.len()
        )));
    }
    if let Some(i) = features.iter().position(|x| !x.is_finite()) {
        return Err(BackendError::InvalidInput(format!(
            "feature {i} is not finite"
        )));
    }
    Ok(())
}

/// Numerically stable softmax.
pub fn softmax(scores: &[f64]) -> Vec<f64> {
    if scores.is_empty() {
        return Vec::new();
    }
    let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Index of the first maximal value; `None` for an empty slice.
pub fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn softmax_sums_to_one_and_keeps_order() {
        let p = softmax(&[1.0, 2.0, 3.0]);
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!(p[2] > p[1] && p[1] > p[0]);
    }

    #[test]
    fn softmax_is_shift_stable() {
        let p = softmax(&[1000.0, 1000.0]);
        assert!((p[0] - 0.5).abs() < 1e-12);
        assert!(softmax(&[]).is_empty());
    }

    #[test]
    fn argmax_prefers_first_tie() {
        assert_eq!(argmax(&[0.2, 0.4, 0.4]), Some(1));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn width_check() {
        assert!(check_width(2, &[1.0, 2.0]).is_ok());
        assert!(matches!(
            check_width(3, &[1.0]),
            Err(BackendError::InvalidInput(_))
        ));
        assert!(check_width(1, &[f64::NAN]).is_err());
    }
}
