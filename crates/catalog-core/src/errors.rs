use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Error taxonomy for catalog operations
///
/// Validation failures carry a human-readable reason. Everything the
/// database layer raises is wrapped in `Database` and propagated as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Product data failed validation (bad type, missing field,
    /// unrecognized field, or update without an id)
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Failure surfaced by the underlying database layer
    #[error("Database error: {message}")]
    Database { message: String },
}

impl CatalogError {
    /// Build a validation error from a reason string
    pub fn validation(message: impl Into<String>) -> Self {
        CatalogError::DataValidation {
            message: message.into(),
        }
    }

    /// True when this is a validation failure rather than a database one
    pub fn is_validation(&self) -> bool {
        matches!(self, CatalogError::DataValidation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = CatalogError::validation("missing required field [name]");
        assert_eq!(
            err.to_string(),
            "Data validation error: missing required field [name]"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_database_error_display() {
        let err = CatalogError::Database {
            message: "no such table: product".to_string(),
        };
        assert_eq!(err.to_string(), "Database error: no such table: product");
        assert!(!err.is_validation());
    }
}
