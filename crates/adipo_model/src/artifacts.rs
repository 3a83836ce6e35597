//! Locating and loading the persisted model artifacts.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use adipo_encoder::FeatureSchema;
use log::{debug, info};
use serde::de::DeserializeOwned;

use crate::backend::Classifier;
use crate::backends::ModelDocument;
use crate::error::ArtifactError;
use crate::labels::LabelEncoder;
use crate::metadata::ModelMetadata;

pub const DEFAULT_MODEL_FILE: &str = "gb_model.json";
pub const DEFAULT_LABELS_FILE: &str = "label_encoder.json";
pub const DEFAULT_FEATURES_FILE: &str = "feature_names.json";
pub const DEFAULT_METADATA_FILE: &str = "metadata.json";

/// Where each artifact lives on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub labels: PathBuf,
    pub features: PathBuf,
    /// Optional; defaults are used when the file does not exist
    pub metadata: Option<PathBuf>,
}

impl ArtifactPaths {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            model: dir.join(DEFAULT_MODEL_FILE),
            labels: dir.join(DEFAULT_LABELS_FILE),
            features: dir.join(DEFAULT_FEATURES_FILE),
            metadata: Some(dir.join(DEFAULT_METADATA_FILE)),
        }
    }
}

/// Everything a predictor needs, loaded and cross-checked.
#[derive(Clone)]
pub struct Artifacts {
    pub classifier: Arc<dyn Classifier>,
    pub labels: LabelEncoder,
    pub schema: FeatureSchema,
    pub metadata: ModelMetadata,
}

impl std::fmt::Debug for Artifacts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Artifacts")
            .field("backend", &self.classifier.backend_name())
            .field("labels", &self.labels)
            .field("schema", &self.schema.len())
            .field("metadata", &self.metadata)
            .finish()
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let text = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_schema(path: &Path) -> Result<FeatureSchema, ArtifactError> {
    let names: Vec<String> = read_json(path)?;
    FeatureSchema::from_names(names).map_err(|e| ArtifactError::Invalid {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

pub fn load_labels(path: &Path) -> Result<LabelEncoder, ArtifactError> {
    read_json(path)
}

pub fn load_classifier(path: &Path) -> Result<Arc<dyn Classifier>, ArtifactError> {
    let doc: ModelDocument = read_json(path)?;
    doc.into_classifier().map_err(|e| ArtifactError::Invalid {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Metadata is optional: a missing file yields defaults, a malformed one is an error.
pub fn load_metadata(path: Option<&Path>) -> Result<ModelMetadata, ArtifactError> {
    let Some(path) = path.filter(|p| p.exists()) else {
        debug!("no model metadata, using defaults");
        return Ok(ModelMetadata::default());
    };
    let metadata: ModelMetadata = read_json(path)?;
    metadata
        .validate()
        .map_err(|reason| ArtifactError::Invalid {
            path: path.to_path_buf(),
            reason,
        })?;
    Ok(metadata)
}

/// Verify that schema, classifier and labels describe the same model.
pub fn check_compatible(
    classifier: &dyn Classifier,
    labels: &LabelEncoder,
    schema: &FeatureSchema,
) -> Result<(), ArtifactError> {
    if schema.len() != classifier.n_features() {
        return Err(ArtifactError::Incompatible(format!(
            "schema has {} columns but the model expects {} features",
            schema.len(),
            classifier.n_features()
        )));
    }
    if labels.len() != classifier.n_classes() {
        return Err(ArtifactError::Incompatible(format!(
            "label encoder has {} classes but the model produces {}",
            labels.len(),
            classifier.n_classes()
        )));
    }
    Ok(())
}

/// Load all artifacts and verify they fit together.
pub fn load_artifacts(paths: &ArtifactPaths) -> Result<Artifacts, ArtifactError> {
    let schema = load_schema(&paths.features)?;
    let labels = load_labels(&paths.labels)?;
    let classifier = load_classifier(&paths.model)?;
    let metadata = load_metadata(paths.metadata.as_deref())?;
    check_compatible(classifier.as_ref(), &labels, &schema)?;
    info!(
        "loaded {} model {} ({} features, {} classes)",
        classifier.backend_name(),
        metadata.version,
        schema.len(),
        labels.len()
    );
    Ok(Artifacts {
        classifier,
        labels,
        schema,
        metadata,
    })
}
