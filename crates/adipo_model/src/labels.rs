//! Bijection between classifier output indices and obesity levels.

use std::collections::HashSet;

use adipo_case::{CaseError, ObesityLevel};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LabelError {
    #[error(transparent)]
    UnknownClass(#[from] CaseError),
    #[error("class {0} appears more than once")]
    Duplicate(ObesityLevel),
    #[error("expected {expected} classes, found {actual}")]
    WrongCount { expected: usize, actual: usize },
}

/// Index-to-level mapping persisted next to the model.
///
/// Stored as a JSON array of class names in output order. Every one of the
/// seven levels appears exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct LabelEncoder {
    classes: Vec<ObesityLevel>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<ObesityLevel>) -> Result<Self, LabelError> {
        if classes.len() != ObesityLevel::ALL.len() {
            return Err(LabelError::WrongCount {
                expected: ObesityLevel::ALL.len(),
                actual: classes.len(),
            });
        }
        let mut seen = HashSet::new();
        for level in &classes {
            if !seen.insert(*level) {
                return Err(LabelError::Duplicate(*level));
            }
        }
        Ok(Self { classes })
    }

    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, LabelError> {
        let classes = names
            .iter()
            .map(|name| name.as_ref().parse::<ObesityLevel>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(classes)
    }

    /// Alphabetical class order, as produced by the usual training tooling.
    pub fn alphabetical() -> Self {
        let mut classes = ObesityLevel::ALL.to_vec();
        classes.sort_by_key(|level| level.as_str());
        Self { classes }
    }

    pub fn decode(&self, index: usize) -> Option<ObesityLevel> {
        self.classes.get(index).copied()
    }

    pub fn encode(&self, level: ObesityLevel) -> Option<usize> {
        self.classes.iter().position(|&l| l == level)
    }

    pub fn classes(&self) -> &[ObesityLevel] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl TryFrom<Vec<String>> for LabelEncoder {
    type Error = LabelError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_names(names.as_slice())
    }
}

impl From<LabelEncoder> for Vec<String> {
    fn from(labels: LabelEncoder) -> Self {
        labels
            .classes
            .iter()
            .map(|level| level.as_str().to_string())
            .collect()
    }
}
