use std::path::PathBuf;

use adipo_encoder::EncodeError;
use thiserror::Error;

/// A model, schema, label or metadata artifact could not be used.
///
/// Fatal at startup: nothing can be predicted without all three artifacts.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid artifact {}: {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },
    #[error("artifacts are incompatible: {0}")]
    Incompatible(String),
}

/// Errors raised by a classifier backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BackendError {
    #[error("invalid model: {0}")]
    InvalidModel(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid model output: {0}")]
    InvalidOutput(String),
}

/// A single prediction request was rejected.
///
/// The predictor stays usable; the same input fails the same way on retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("class index {0} has no label")]
    UnknownClassIndex(usize),
}
