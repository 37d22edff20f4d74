//! Error handling for catalog-store
//!
//! Wraps catalog-core CatalogError with store-specific helpers

use catalog_core::CatalogError;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> CatalogError {
    CatalogError::Database {
        message: err.to_string(),
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> CatalogError {
    CatalogError::Database {
        message: format!("Migration {} failed: {}", migration_id, reason),
    }
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> CatalogError {
    CatalogError::Database {
        message: format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ),
    }
}
