use std::sync::Arc;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::EncodeError;
use crate::schema::FeatureSchema;

/// Numeric encoding of one case, aligned to a [`FeatureSchema`](crate::FeatureSchema).
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    columns: Arc<[String]>,
    values: Vec<f64>,
}

impl FeatureVector {
    pub(crate) fn new(columns: Arc<[String]>, values: Vec<f64>) -> Self {
        Self { columns, values }
    }

    /// Wrap values that were already laid out in `schema` order.
    pub fn from_schema(schema: &FeatureSchema, values: Vec<f64>) -> Result<Self, EncodeError> {
        if values.len() != schema.len() {
            return Err(EncodeError::SchemaMismatch {
                expected: schema.len(),
                actual: values.len(),
            });
        }
        Ok(Self::new(schema.shared_columns(), values))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Value of a named column, if the schema has it.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == name)
            .and_then(|i| self.values.get(i).copied())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

impl Serialize for FeatureVector {
    /// Serialized as an ordered `{column: value}` map.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_schema_checks_width() {
        let schema = FeatureSchema::from_names(["Age", "Weight"]).unwrap();
        let v = FeatureVector::from_schema(&schema, vec![30.0, 70.0]).unwrap();
        assert_eq!(v.get("Weight"), Some(70.0));
        assert_eq!(schema.check(&v), Ok(()));
        assert_eq!(
            FeatureVector::from_schema(&schema, vec![1.0]),
            Err(EncodeError::SchemaMismatch {
                expected: 2,
                actual: 1
            })
        );
    }
}
