//! The validated cell write path

use crate::error::{EngineError, EngineResult};
use crate::graph::SheetGraph;
use crate::parser::parse_lookup;
use crate::validator::effective_type;
use refsheet_core::{CellContent, CellRef, Sheet, ValueType};

/// How a raw input string should be written into a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetMode {
    /// Classify the input as a literal of the column's type
    Value,
    /// Parse the input as a `lookup(<column>,<row>)` expression
    Lookup,
}

/// Write a value or lookup into a cell, validating first
///
/// Nothing is mutated until every check has passed, so a returned error
/// means the sheet is exactly as it was.
///
/// In `Value` mode the input is classified and must match the column's
/// declared type. In `Lookup` mode the input is parsed, the prospective
/// chain is walked for self and circular references, and the chain's
/// terminal type must match the column's declared type.
///
/// Referrer counts stay exact across the write: the new target gains one,
/// and a previously stored target loses one.
pub fn set_cell(
    sheet: &mut Sheet,
    column: &str,
    row: usize,
    input: &str,
    mode: SetMode,
) -> EngineResult<()> {
    let owner_type = owner_column_type(sheet, column, row)?;
    let owner = CellRef::new(column, row);

    let content = match mode {
        SetMode::Value => {
            let actual = ValueType::classify(input)?;
            if actual != owner_type {
                return Err(EngineError::TypeMismatch {
                    expected: owner_type,
                    actual,
                });
            }
            CellContent::Literal(input.to_string())
        }
        SetMode::Lookup => {
            let target = parse_lookup(input, sheet.rows())?;
            let terminal = {
                let graph = SheetGraph::new(sheet);
                effective_type(&graph, &owner, &target)?
            };
            if terminal != owner_type {
                return Err(EngineError::TypeMismatch {
                    expected: owner_type,
                    actual: terminal,
                });
            }
            CellContent::Lookup(target)
        }
    };

    replace_content(sheet, &owner, content);
    Ok(())
}

fn owner_column_type(sheet: &Sheet, column: &str, row: usize) -> EngineResult<ValueType> {
    let col = sheet
        .column(column)
        .ok_or_else(|| EngineError::UnknownColumn(column.to_string()))?;
    if row >= sheet.rows() {
        return Err(EngineError::RowOutOfBounds(
            row,
            sheet.rows().saturating_sub(1),
        ));
    }
    Ok(col.value_type())
}

/// Swap in validated content, keeping referrer counts exact
fn replace_content(sheet: &mut Sheet, owner: &CellRef, content: CellContent) {
    // The old target loses this inbound edge
    if let Some(previous) = sheet.cell_at(owner).and_then(|c| c.reference().cloned()) {
        if let Some(cell) = sheet.cell_at_mut(&previous) {
            cell.remove_referrer();
        }
    }

    let target = match &content {
        CellContent::Lookup(target) => Some(target.clone()),
        CellContent::Literal(_) => None,
    };

    if let Some(cell) = sheet.cell_at_mut(owner) {
        match content {
            CellContent::Literal(value) => cell.set_literal(value),
            CellContent::Lookup(target) => cell.set_lookup(target),
        }
    }

    if let Some(target) = target {
        if let Some(cell) = sheet.cell_at_mut(&target) {
            cell.add_referrer();
        }
    }
}
