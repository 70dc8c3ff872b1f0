//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object and dataset construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Inconsistent data for '{field}': {reason}")]
    Inconsistent { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(
        field: impl Into<String>,
        min: impl Into<f64>,
        max: impl Into<f64>,
        actual: impl Into<f64>,
    ) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min: min.into(),
            max: max.into(),
            actual: actual.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an error for two datasets that disagree with each other.
    pub fn inconsistent(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::Inconsistent {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,

    // Input errors
    UnknownQuestion,

    // Instrument errors
    InstrumentUnavailable,
    InstrumentInconsistent,

    // Infrastructure errors
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::UnknownQuestion => "UNKNOWN_QUESTION",
            ErrorCode::InstrumentUnavailable => "INSTRUMENT_UNAVAILABLE",
            ErrorCode::InstrumentInconsistent => "INSTRUMENT_INCONSISTENT",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match &err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ValidationError::Inconsistent { .. } => ErrorCode::InstrumentInconsistent,
        };
        DomainError::new(code, err.to_string())
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("version");
        assert_eq!(format!("{}", err), "Field 'version' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("score_key", 0, 1, 2);
        assert_eq!(
            format!("{}", err),
            "Field 'score_key' must be between 0 and 1, got 2"
        );
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("dichotomy", "unknown label 'X-Y'");
        assert_eq!(
            format!("{}", err),
            "Field 'dichotomy' has invalid format: unknown label 'X-Y'"
        );
    }

    #[test]
    fn validation_error_inconsistent_displays_correctly() {
        let err = ValidationError::inconsistent("items[3]", "bank says S-N, table says T-F");
        assert_eq!(
            format!("{}", err),
            "Inconsistent data for 'items[3]': bank says S-N, table says T-F"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::UnknownQuestion, "Question 94 is not defined");
        assert_eq!(format!("{}", err), "[UNKNOWN_QUESTION] Question 94 is not defined");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::ValidationFailed, "Validation failed")
            .with_detail("field", "a")
            .with_detail("reason", "must be positive");

        assert_eq!(err.details.get("field"), Some(&"a".to_string()));
        assert_eq!(err.details.get("reason"), Some(&"must be positive".to_string()));
    }

    #[test]
    fn domain_error_from_validation_error_maps_code() {
        let err: DomainError = ValidationError::inconsistent("items", "mismatch").into();
        assert_eq!(err.code, ErrorCode::InstrumentInconsistent);

        let err: DomainError = ValidationError::out_of_range("a", 0.0, f64::MAX, -1.0).into();
        assert_eq!(err.code, ErrorCode::OutOfRange);
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::UnknownQuestion), "UNKNOWN_QUESTION");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }
}
