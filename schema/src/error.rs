//! Validation error types.

use thiserror::Error;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Errors raised when a raw field map fails schema validation.
///
/// All variants are terminal: they indicate bad input data, never a
/// transient condition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ID is a required field for Model schema definition.")]
    IdentifierRequired,

    #[error("Model ID must be a positive integer, got {actual}.")]
    InvalidIdentifier { actual: String },

    #[error("Cannot apply mutation to {model} model, found superfluous property '{field}'.")]
    SuperfluousField { model: String, field: String },

    #[error("Required field '{field}' has no value.")]
    RequiredField { field: String },

    #[error("Invalid field type: expected {expected}, got {actual} for {field}")]
    FieldTypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("Value for field '{field}' does not match pattern '{pattern}'")]
    PatternMismatch { field: String, pattern: String },

    #[error("Invalid match pattern '{pattern}' for field '{field}'")]
    InvalidPattern { field: String, pattern: String },
}

impl ValidationError {
    pub fn invalid_identifier(actual: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            actual: actual.into(),
        }
    }

    pub fn superfluous_field(model: impl Into<String>, field: impl Into<String>) -> Self {
        Self::SuperfluousField {
            model: model.into(),
            field: field.into(),
        }
    }

    pub fn required_field(field: impl Into<String>) -> Self {
        Self::RequiredField {
            field: field.into(),
        }
    }

    pub fn field_type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::FieldTypeMismatch {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn pattern_mismatch(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::PatternMismatch {
            field: field.into(),
            pattern: pattern.into(),
        }
    }

    pub fn invalid_pattern(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::InvalidPattern {
            field: field.into(),
            pattern: pattern.into(),
        }
    }
}
