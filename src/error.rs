//! Custom error types for mortgage-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for mortgage-cli operations
#[derive(Error, Debug)]
pub enum MortgageError {
    /// Bad user input; recoverable, reported with the offending field
    #[error("Validation error: {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Mathematically undefined operation (e.g. zero appraised value)
    #[error("Domain error: {0}")]
    Domain(String),

    /// The data provider rejected the request
    #[error("Provider error: {0}")]
    Provider(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl MortgageError {
    /// Create a validation error naming the offending field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create a domain error
    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain(message.into())
    }

    /// Create a "not found" error for scenarios
    pub fn scenario_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Scenario",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for scenarios
    pub fn scenario_exists(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Scenario",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a domain error
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for MortgageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MortgageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for mortgage-cli operations
pub type MortgageResult<T> = Result<T, MortgageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_names_field() {
        let err = MortgageError::validation("principal", "must be positive");
        assert_eq!(
            err.to_string(),
            "Validation error: principal: must be positive"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_domain_error_display() {
        let err = MortgageError::domain("appraised value must be positive");
        assert_eq!(
            err.to_string(),
            "Domain error: appraised value must be positive"
        );
        assert!(err.is_domain());
    }

    #[test]
    fn test_scenario_not_found() {
        let err = MortgageError::scenario_not_found("baseline");
        assert_eq!(err.to_string(), "Scenario not found: baseline");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MortgageError = io_err.into();
        assert!(matches!(err, MortgageError::Io(_)));
    }
}
