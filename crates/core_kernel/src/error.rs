//! Validation error taxonomy shared by all constructors

use thiserror::Error;

/// Error raised when a value object rejects its input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A mandatory constructor argument was not supplied
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    /// The value does not have the expected shape
    #[error("Invalid {field} format: {value:?}")]
    InvalidFormat { field: &'static str, value: String },

    /// The value is not one of the accepted codes
    #[error("{field} is not in the accepted list: {value:?}")]
    NotInWhitelist { field: &'static str, value: String },
}

impl ValidationError {
    pub fn missing(field: &'static str) -> Self {
        ValidationError::MissingRequiredField { field }
    }

    pub fn invalid_format(field: &'static str, value: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field,
            value: value.into(),
        }
    }

    pub fn not_in_whitelist(field: &'static str, value: impl Into<String>) -> Self {
        ValidationError::NotInWhitelist {
            field,
            value: value.into(),
        }
    }

    /// Returns the name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingRequiredField { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::NotInWhitelist { field, .. } => field,
        }
    }
}

/// Unwraps a field collected by a builder, failing if it was never supplied
pub fn require<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.ok_or_else(|| {
        tracing::debug!(field, "Required field not supplied");
        ValidationError::missing(field)
    })
}
