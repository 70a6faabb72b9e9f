//! Error types for plan building and import/export.

use crate::validation::ValidationError;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building, importing, or exporting plans.
#[derive(Error, Debug)]
pub enum Error {
    /// The plan configuration failed validation. Carries every issue
    /// found, not just the first.
    #[error("invalid configuration: {}", summarize(.0))]
    InvalidConfig(Vec<ValidationError>),

    /// Scheduling requires at least one machine.
    #[error("cannot schedule onto zero machines")]
    NoMachines,

    /// An imported document's embedded order list disagrees with the
    /// orders its own configuration generates.
    #[error("order list does not match configuration: {0}")]
    OrderListMismatch(String),

    /// A timestamp string could not be parsed as RFC 3339.
    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Underlying file I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{ValidationError, ValidationErrorKind};

    #[test]
    fn test_invalid_config_joins_messages() {
        let err = Error::InvalidConfig(vec![
            ValidationError {
                kind: ValidationErrorKind::InvalidMachineCount,
                message: "Machine count must be at least 1, got 0".into(),
            },
            ValidationError {
                kind: ValidationErrorKind::DuplicateClass,
                message: "Duplicate class name: A".into(),
            },
        ]);

        let text = err.to_string();
        assert!(text.starts_with("invalid configuration:"));
        assert!(text.contains("Machine count must be at least 1"));
        assert!(text.contains("Duplicate class name: A"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<i32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
