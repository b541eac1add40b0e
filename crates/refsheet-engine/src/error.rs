//! Engine error types

use refsheet_core::{CellRef, ValueType};
use thiserror::Error;

/// Result type for engine operations
pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Errors that can occur while validating or writing cells
///
/// All of these are synchronous validation failures. A write that returns one
/// of them leaves the sheet unmodified.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A lookup expression does not match `lookup(<column>,<row>)`
    #[error("Malformed lookup: {0}")]
    MalformedLookup(String),

    /// A cell referencing its own position
    #[error("Cell {0} cannot reference itself")]
    SelfReference(CellRef),

    /// Writing the reference would close a reference cycle
    #[error("Circular reference detected involving cell {0}")]
    CircularReference(CellRef),

    /// A value or chain terminal that does not match the column's type
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: ValueType,
        actual: ValueType,
    },

    /// No column with the given name
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Row index past the sheet's row count
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(usize, usize),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] refsheet_core::Error),
}
