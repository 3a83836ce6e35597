//! The seven obesity-level classes predicted by the model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CaseError;
use crate::fields;

/// Obesity level, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObesityLevel {
    InsufficientWeight,
    NormalWeight,
    OverweightLevelI,
    OverweightLevelII,
    ObesityTypeI,
    ObesityTypeII,
    ObesityTypeIII,
}

/// Language of operator-facing labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "pt")]
    Portuguese,
}

impl ObesityLevel {
    /// All classes from least to most severe.
    pub const ALL: [ObesityLevel; 7] = [
        ObesityLevel::InsufficientWeight,
        ObesityLevel::NormalWeight,
        ObesityLevel::OverweightLevelI,
        ObesityLevel::OverweightLevelII,
        ObesityLevel::ObesityTypeI,
        ObesityLevel::ObesityTypeII,
        ObesityLevel::ObesityTypeIII,
    ];

    /// Canonical class name as written by the training pipeline.
    pub fn as_str(self) -> &'static str {
        match self {
            ObesityLevel::InsufficientWeight => "Insufficient_Weight",
            ObesityLevel::NormalWeight => "Normal_Weight",
            ObesityLevel::OverweightLevelI => "Overweight_Level_I",
            ObesityLevel::OverweightLevelII => "Overweight_Level_II",
            ObesityLevel::ObesityTypeI => "Obesity_Type_I",
            ObesityLevel::ObesityTypeII => "Obesity_Type_II",
            ObesityLevel::ObesityTypeIII => "Obesity_Type_III",
        }
    }

    /// 0 for the least severe class, 6 for the most severe.
    pub fn severity(self) -> usize {
        self as usize
    }

    /// Operator-facing label.
    ///
    /// The match is over every (class, language) pair, so the table is total
    /// and a repeated arm fails the build.
    #[deny(unreachable_patterns)]
    pub fn label(self, language: Language) -> &'static str {
        use Language::{English, Portuguese};
        use ObesityLevel::*;
        match (self, language) {
            (InsufficientWeight, English) => "Insufficient weight",
            (NormalWeight, English) => "Normal weight",
            (OverweightLevelI, English) => "Overweight level I",
            (OverweightLevelII, English) => "Overweight level II",
            (ObesityTypeI, English) => "Obesity type I",
            (ObesityTypeII, English) => "Obesity type II",
            (ObesityTypeIII, English) => "Obesity type III",
            (InsufficientWeight, Portuguese) => "Peso Insuficiente",
            (NormalWeight, Portuguese) => "Peso Normal",
            (OverweightLevelI, Portuguese) => "Sobrepeso Nível I",
            (OverweightLevelII, Portuguese) => "Sobrepeso Nível II",
            (ObesityTypeI, Portuguese) => "Obesidade Tipo I",
            (ObesityTypeII, Portuguese) => "Obesidade Tipo II",
            (ObesityTypeIII, Portuguese) => "Obesidade Tipo III",
        }
    }
}

impl FromStr for ObesityLevel {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObesityLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| CaseError::UnknownCategoryValue {
                field: fields::OBESITY,
                value: s.to_string(),
            })
    }
}

impl fmt::Display for ObesityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ObesityLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ObesityLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for Language {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" | "english" => Ok(Language::English),
            "pt" | "portuguese" => Ok(Language::Portuguese),
            other => Err(CaseError::UnknownCategoryValue {
                field: "language",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn severity_follows_declaration_order() {
        assert!(ObesityLevel::InsufficientWeight < ObesityLevel::NormalWeight);
        assert!(ObesityLevel::OverweightLevelII < ObesityLevel::ObesityTypeI);
        assert_eq!(ObesityLevel::ObesityTypeIII.severity(), 6);
    }

    #[test]
    fn canonical_names_parse_back() {
        for level in ObesityLevel::ALL {
            assert_eq!(level.as_str().parse::<ObesityLevel>().unwrap(), level);
        }
        assert!("Obesity_Type_IV".parse::<ObesityLevel>().is_err());
    }

    #[test]
    fn labels_are_distinct_per_language() {
        for language in [Language::English, Language::Portuguese] {
            let labels: HashSet<&str> = ObesityLevel::ALL
                .iter()
                .map(|level| level.label(language))
                .collect();
            assert_eq!(labels.len(), ObesityLevel::ALL.len(), "{language:?}");
        }
    }

    #[test]
    fn portuguese_labels() {
        assert_eq!(
            ObesityLevel::OverweightLevelI.label(Language::Portuguese),
            "Sobrepeso Nível I"
        );
        assert_eq!(
            ObesityLevel::ObesityTypeIII.label(Language::Portuguese),
            "Obesidade Tipo III"
        );
    }

    #[test]
    fn language_codes() {
        assert_eq!("pt".parse::<Language>().unwrap(), Language::Portuguese);
        assert_eq!(Language::default(), Language::English);
        assert!("fr".parse::<Language>().is_err());
    }
}
