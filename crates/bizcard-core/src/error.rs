//! Error types for the bizcard-core library.

use thiserror::Error;

/// Main error type for the bizcard-core library.
#[derive(Error, Debug)]
pub enum BizcardError {
    /// A field name could not be parsed (CLI edits, config keys).
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// Text recognition failed in an OCR collaborator.
    #[error("recognition error: {0}")]
    Recognition(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the bizcard-core library.
pub type Result<T> = std::result::Result<T, BizcardError>;
