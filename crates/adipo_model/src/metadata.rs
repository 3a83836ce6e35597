//! Descriptive metadata shipped alongside a trained model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Semantic version of a trained model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ModelVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        let parts: Vec<&str> = s.trim().split('.').collect();
        let [major, minor, patch] = parts.as_slice() else {
            return Err(format!("invalid version format: {s}"));
        };
        let component = |name: &str, raw: &str| {
            raw.parse::<u32>()
                .map_err(|_| format!("invalid {name} version: {raw}"))
        };
        Ok(Self::new(
            component("major", *major)?,
            component("minor", *minor)?,
            component("patch", *patch)?,
        ))
    }
}

impl Default for ModelVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

impl fmt::Display for ModelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for ModelVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ModelVersion {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ModelVersion> for String {
    fn from(v: ModelVersion) -> Self {
        v.to_string()
    }
}

/// Contents of `metadata.json`. Every field is optional on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelMetadata {
    pub name: String,
    pub version: ModelVersion,
    /// Human-readable algorithm name, e.g. "Gradient Boosting"
    pub algorithm: Option<String>,
    /// Held-out accuracy reported by training, in `[0, 1]`
    pub accuracy: Option<f64>,
    pub description: Option<String>,
}

impl Default for ModelMetadata {
    fn default() -> Self {
        Self {
            name: "obesity-level-classifier".to_string(),
            version: ModelVersion::default(),
            algorithm: None,
            accuracy: None,
            description: None,
        }
    }
}

impl ModelMetadata {
    pub fn new(name: impl Into<String>, version: ModelVersion) -> Self {
        Self {
            name: name.into(),
            version,
            ..Self::default()
        }
    }

    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = Some(algorithm.into());
        self
    }

    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = Some(accuracy);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        match self.accuracy {
            Some(a) if !(0.0..=1.0).contains(&a) => {
                Err(format!("accuracy {a} is outside [0, 1]"))
            }
            _ => Ok(()),
        }
    }
}
