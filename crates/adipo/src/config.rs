//! `adipo.toml` configuration.

use std::fs;
use std::path::{Path, PathBuf};

use adipo_case::Language;
use adipo_data::HeightUnit;
use adipo_model::artifacts::{
    DEFAULT_FEATURES_FILE, DEFAULT_LABELS_FILE, DEFAULT_METADATA_FILE, DEFAULT_MODEL_FILE,
};
use adipo_model::ArtifactPaths;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE: &str = "adipo.toml";
pub const CONFIG_ENV: &str = "ADIPO_CONFIG";
pub const ARTIFACTS_DIR_ENV: &str = "ADIPO_ARTIFACTS_DIR";
pub const DATASET_ENV: &str = "ADIPO_DATASET";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub artifacts: ArtifactsConfig,
    pub dataset: DatasetConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArtifactsConfig {
    pub dir: PathBuf,
    pub model: String,
    pub labels: String,
    pub features: String,
    pub metadata: Option<String>,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("models"),
            model: DEFAULT_MODEL_FILE.to_string(),
            labels: DEFAULT_LABELS_FILE.to_string(),
            features: DEFAULT_FEATURES_FILE.to_string(),
            metadata: Some(DEFAULT_METADATA_FILE.to_string()),
        }
    }
}

impl ArtifactsConfig {
    pub fn paths(&self) -> ArtifactPaths {
        ArtifactPaths {
            model: self.dir.join(&self.model),
            labels: self.dir.join(&self.labels),
            features: self.dir.join(&self.features),
            metadata: self.metadata.as_ref().map(|m| self.dir.join(m)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetConfig {
    pub path: PathBuf,
    pub height_unit: HeightUnit,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/Obesity.csv"),
            height_unit: HeightUnit::Meters,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub language: Language,
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read a config file. Relative paths inside it are taken relative to
    /// the file's directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            config.artifacts.dir = base.join(&config.artifacts.dir);
            config.dataset.path = base.join(&config.dataset.path);
        }
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// The file comes from `explicit`, else `ADIPO_CONFIG`, else `./adipo.toml`
    /// when present; otherwise defaults apply. `ADIPO_ARTIFACTS_DIR` and
    /// `ADIPO_DATASET` then override the corresponding paths.
    pub fn resolve(
        explicit: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let file = explicit
            .map(Path::to_path_buf)
            .or_else(|| env(CONFIG_ENV).map(PathBuf::from))
            .or_else(|| {
                let local = PathBuf::from(CONFIG_FILE);
                local.is_file().then_some(local)
            });

        let mut config = match file {
            Some(path) => {
                debug!("reading config from {}", path.display());
                Self::from_file(&path)?
            }
            None => Self::default(),
        };
        if let Some(dir) = env(ARTIFACTS_DIR_ENV) {
            config.artifacts.dir = PathBuf::from(dir);
        }
        if let Some(path) = env(DATASET_ENV) {
            config.dataset.path = PathBuf::from(path);
        }
        Ok(config)
    }

    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::resolve(explicit, |key| std::env::var(key).ok())
    }
}
