use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use adipo_case::{fields, Frequency, Transport};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::encode::one_hot_name;
use crate::error::EncodeError;
use crate::vector::FeatureVector;

/// Ordered, duplicate-free list of feature columns fixed at training time.
///
/// Cloning is cheap; the column list is shared with every vector encoded
/// against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    columns: Arc<[String]>,
    index: Arc<HashMap<String, usize>>,
}

impl FeatureSchema {
    pub fn from_names<I, S>(names: I) -> Result<Self, EncodeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = names.into_iter().map(Into::into).collect();
        if columns.is_empty() {
            return Err(EncodeError::InvalidSchema("schema has no columns".into()));
        }
        {
            let mut seen = HashSet::with_capacity(columns.len());
            for (i, name) in columns.iter().enumerate() {
                if name.trim().is_empty() {
                    return Err(EncodeError::InvalidSchema(format!(
                        "column {i} has an empty name"
                    )));
                }
                if !seen.insert(name.as_str()) {
                    return Err(EncodeError::InvalidSchema(format!(
                        "duplicate column '{name}'"
                    )));
                }
            }
        }
        Ok(Self::from_unique(columns))
    }

    /// Every column the encoder can produce, in the order a one-hot
    /// expansion of the raw dataset yields them: plain columns first, then
    /// indicators grouped by field with values sorted by byte order.
    pub fn canonical() -> Self {
        let mut names: Vec<String> = [
            fields::GENDER,
            fields::AGE,
            fields::HEIGHT,
            fields::WEIGHT,
            fields::FAMILY_HISTORY,
            fields::FAVC,
            fields::FCVC,
            fields::NCP,
            fields::SMOKE,
            fields::CH2O,
            fields::SCC,
            fields::FAF,
            fields::TUE,
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let mut frequency: Vec<&str> = Frequency::ALL.iter().map(|f| f.as_str()).collect();
        frequency.sort_unstable();
        let mut transport: Vec<&str> = Transport::ALL.iter().map(|t| t.as_str()).collect();
        transport.sort_unstable();

        for field in [fields::CAEC, fields::CALC] {
            names.extend(frequency.iter().map(|v| one_hot_name(field, v)));
        }
        names.extend(transport.iter().map(|v| one_hot_name(fields::MTRANS, v)));

        Self::from_unique(names)
    }

    fn from_unique(columns: Vec<String>) -> Self {
        let index = columns
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self {
            columns: columns.into(),
            index: Arc::new(index),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Guard used before inference: the vector must have exactly this
    /// schema's width and columns.
    pub fn check(&self, vector: &FeatureVector) -> Result<(), EncodeError> {
        if vector.len() != self.len() {
            return Err(EncodeError::SchemaMismatch {
                expected: self.len(),
                actual: vector.len(),
            });
        }
        if let Some((position, (expected, actual))) = self
            .columns
            .iter()
            .zip(vector.columns())
            .enumerate()
            .find(|(_, (expected, actual))| expected != actual)
        {
            return Err(EncodeError::ColumnMismatch {
                position,
                expected: expected.clone(),
                actual: actual.clone(),
            });
        }
        Ok(())
    }

    pub(crate) fn shared_columns(&self) -> Arc<[String]> {
        Arc::clone(&self.columns)
    }
}

impl Serialize for FeatureSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.columns.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FeatureSchema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        FeatureSchema::from_names(names).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicates_and_empty() {
        assert!(matches!(
            FeatureSchema::from_names(["Age", "Age"]),
            Err(EncodeError::InvalidSchema(_))
        ));
        assert!(matches!(
            FeatureSchema::from_names(Vec::<String>::new()),
            Err(EncodeError::InvalidSchema(_))
        ));
        assert!(matches!(
            FeatureSchema::from_names(["Age", " "]),
            Err(EncodeError::InvalidSchema(_))
        ));
    }

    #[test]
    fn canonical_layout() {
        let schema = FeatureSchema::canonical();
        assert_eq!(schema.len(), 26);
        assert_eq!(schema.columns()[0], "Gender");
        assert_eq!(schema.columns()[12], "TUE");
        assert_eq!(
            &schema.columns()[13..17],
            &["CAEC_Always", "CAEC_Frequently", "CAEC_Sometimes", "CAEC_no"]
        );
        assert_eq!(schema.columns()[25], "MTRANS_Walking");
    }

    #[test]
    fn position_lookup() {
        let schema = FeatureSchema::from_names(["Weight", "Age"]).unwrap();
        assert_eq!(schema.position("Age"), Some(1));
        assert_eq!(schema.position("Height"), None);
        assert!(schema.contains("Weight"));
    }

    #[test]
    fn check_rejects_vector_from_other_schema() {
        let a = FeatureSchema::from_names(["Age", "Weight"]).unwrap();
        let b = FeatureSchema::from_names(["Age", "Height"]).unwrap();
        let x = FeatureVector::new(b.shared_columns(), vec![30.0, 1.7]);
        assert_eq!(
            a.check(&x),
            Err(EncodeError::ColumnMismatch {
                position: 1,
                expected: "Weight".into(),
                actual: "Height".into()
            })
        );
        assert_eq!(b.check(&x), Ok(()));
    }

    #[test]
    fn deserializes_from_json_list() {
        let schema: FeatureSchema = serde_json::from_str(r#"["Age","Height"]"#).unwrap();
        assert_eq!(schema.columns(), &["Age".to_string(), "Height".to_string()]);
        assert!(serde_json::from_str::<FeatureSchema>(r#"["Age","Age"]"#).is_err());
    }
}
