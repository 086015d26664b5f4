//! Error types for the predsearch engine

use thiserror::Error;

/// Result type alias for predsearch operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Main error type for the predsearch engine
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Data error: {0}")]
    DataError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Type constraint violated: {0}")]
    TypeConstraint(String),

    #[error("Computation error: {0}")]
    Computation(String),

    #[error("Invalid shape: expected {expected}, got {actual}")]
    Shape { expected: String, actual: String },

    #[error("Feature not found: {0}")]
    FeatureNotFound(String),

    #[error("Model not fitted")]
    ModelNotFitted,

    #[error("Invalid parameter: {name} = {value}, {reason}")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::DataError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SearchError::ConfigError("minimum combination length exceeds features".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: minimum combination length exceeds features"
        );
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = SearchError::InvalidParameter {
            name: "k".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid parameter: k = 0, must be at least 1");
    }
}
