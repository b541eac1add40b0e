//! Error types for refsheet-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in refsheet-core
#[derive(Debug, Error)]
pub enum Error {
    /// A literal is none of the supported value shapes
    #[error("Unsupported value type: '{0}' is not an integer, a boolean, or a $-prefixed string")]
    UnsupportedValueType(String),

    /// A value type name could not be parsed
    #[error("Unknown value type name: '{0}' (expected string, integer, or boolean)")]
    UnknownValueType(String),

    /// Sheet created without any columns
    #[error("A sheet needs at least one column")]
    NoColumns,

    /// Sheet created with a zero row count
    #[error("A sheet needs at least one row")]
    NoRows,

    /// Column created with an empty name
    #[error("Column names cannot be empty")]
    EmptyColumnName,

    /// Duplicate column name (names are case-sensitive unique)
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// Malformed sheet id
    #[error("Invalid sheet id: '{0}' (expected 24 hex characters)")]
    InvalidSheetId(String),
}
