//! Core error types for the catalog

use thiserror::Error;

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Core error type for the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of record that was looked up
        entity: String,
        /// Identifier that matched nothing
        id: String,
    },

    /// A record with an equivalent unique key already exists
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// The record is still referenced by other records
    #[error("{entity} is still referenced: {id}")]
    Referenced {
        /// Kind of record that could not be removed
        entity: String,
        /// Identifier of that record
        id: String,
    },

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl CatalogError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a still-referenced error
    pub fn referenced(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::Referenced {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
