//! Column-keyed view over a sheet

use crate::error::{EngineError, EngineResult};
use ahash::AHashMap;
use refsheet_core::{Cell, CellRef, Column, Sheet, ValueType};

/// A disposable index over a sheet's columns, keyed by name
///
/// The sheet's ordered column list stays authoritative; this view only exists
/// for the duration of one validation or resolution pass and is rebuilt from
/// scratch on the next. It is never persisted and never outlives its sheet
/// borrow, so it cannot go stale.
#[derive(Debug)]
pub struct SheetGraph<'a> {
    columns: AHashMap<&'a str, &'a Column>,
    rows: usize,
    cell_count: usize,
}

impl<'a> SheetGraph<'a> {
    /// Build the view from a sheet
    pub fn new(sheet: &'a Sheet) -> Self {
        let mut columns = AHashMap::with_capacity(sheet.columns().len());
        for column in sheet.columns() {
            columns.insert(column.name(), column);
        }
        Self {
            columns,
            rows: sheet.rows(),
            cell_count: sheet.cell_count(),
        }
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> EngineResult<&'a Column> {
        self.columns
            .get(name)
            .copied()
            .ok_or_else(|| EngineError::UnknownColumn(name.to_string()))
    }

    /// Get a column's declared value type
    pub fn column_type(&self, name: &str) -> EngineResult<ValueType> {
        Ok(self.column(name)?.value_type())
    }

    /// Get the cell a reference points at
    pub fn cell(&self, at: &CellRef) -> EngineResult<&'a Cell> {
        let column = self.column(&at.column)?;
        column
            .cell(at.row)
            .ok_or(EngineError::RowOutOfBounds(at.row, self.rows.saturating_sub(1)))
    }

    /// Row count of the underlying sheet
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total cell count of the underlying sheet, used as the walk hop limit
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }
}
