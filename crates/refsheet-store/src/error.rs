//! Store error types

use refsheet_core::SheetId;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while reading or writing sheet documents
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No document with the given id
    #[error("Sheet not found: {0}")]
    SheetNotFound(SheetId),

    /// Inserting a document whose id is already taken
    #[error("Sheet already exists: {0}")]
    SheetExists(SheetId),
}
