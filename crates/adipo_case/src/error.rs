use thiserror::Error;

/// Errors raised while parsing or validating a [`RawCase`](crate::RawCase).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CaseError {
    #[error("unknown value '{value}' for field {field}")]
    UnknownCategoryValue { field: &'static str, value: String },
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} = {value} is outside the range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}
