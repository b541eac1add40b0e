//! Column types

use crate::cell::Cell;
use crate::value::ValueType;

/// The definition of a column at sheet creation time
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnSpec {
    /// Column name (case-sensitive, unique within a sheet)
    pub name: String,
    /// Declared type every literal in the column must satisfy
    pub value_type: ValueType,
}

impl ColumnSpec {
    /// Create a new column spec
    pub fn new<S: Into<String>>(name: S, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
        }
    }
}

/// A named, typed column holding a fixed number of cells
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    name: String,
    value_type: ValueType,
    cells: Vec<Cell>,
}

impl Column {
    /// Create a column with `rows` empty literal cells
    pub fn new<S: Into<String>>(name: S, value_type: ValueType, rows: usize) -> Self {
        Self {
            name: name.into(),
            value_type,
            cells: vec![Cell::default(); rows],
        }
    }

    /// Get the column name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the declared value type
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Get all cells, top to bottom
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get a cell by row index
    pub fn cell(&self, row: usize) -> Option<&Cell> {
        self.cells.get(row)
    }

    /// Get a mutable cell by row index
    pub fn cell_mut(&mut self, row: usize) -> Option<&mut Cell> {
        self.cells.get_mut(row)
    }

    /// Number of rows in the column
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }
}
