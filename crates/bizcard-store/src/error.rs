//! Error types for the bizcard-store library.

use thiserror::Error;

/// Main error type for the bizcard-store library.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database connection or statement failure.
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Insert rejected: a record with the same name, designation, and
    /// company already exists.
    #[error("duplicate record: {name} / {designation} / {company} already stored")]
    Duplicate {
        name: String,
        designation: String,
        company: String,
    },

    /// No stored record with the given id.
    #[error("no record with id {0}")]
    NotFound(i64),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
