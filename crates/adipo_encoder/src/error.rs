use adipo_case::CaseError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    /// The case carries an unknown category or an out-of-domain value.
    #[error(transparent)]
    Case(#[from] CaseError),
    /// Encoded width disagrees with the persisted schema.
    #[error("expected {expected} features, got {actual}")]
    SchemaMismatch { expected: usize, actual: usize },
    #[error("column {position} is '{actual}', schema expects '{expected}'")]
    ColumnMismatch {
        position: usize,
        expected: String,
        actual: String,
    },
    #[error("invalid feature schema: {0}")]
    InvalidSchema(String),
}
