//! Self and circular reference validation

use crate::error::{EngineError, EngineResult};
use crate::graph::SheetGraph;
use refsheet_core::{CellRef, ValueType};

/// Walk the chain a prospective reference would join and compute its
/// effective type
///
/// `owner` is the cell about to hold the reference, `target` the cell it
/// would point at. The walk follows existing references forward from the
/// target until it reaches a literal cell; that cell's column type is the
/// effective type of the whole chain.
///
/// Rejections, in order:
/// - `target == owner` is a [`EngineError::SelfReference`]
/// - a hop landing back on `owner` means this write would close a cycle,
///   [`EngineError::CircularReference`]
/// - more hops than the sheet has cells means the stored references already
///   cycle somewhere, also [`EngineError::CircularReference`]
///
/// A hop through a missing column or row surfaces as [`EngineError::UnknownColumn`]
/// or [`EngineError::RowOutOfBounds`].
pub fn effective_type(
    graph: &SheetGraph<'_>,
    owner: &CellRef,
    target: &CellRef,
) -> EngineResult<ValueType> {
    if target == owner {
        return Err(EngineError::SelfReference(owner.clone()));
    }

    let mut current = target.clone();
    let mut hops = 0usize;

    loop {
        let cell = graph.cell(&current)?;
        match cell.reference() {
            // Literal cell: the chain terminates here
            None => return graph.column_type(&current.column),
            Some(next) => {
                if next == owner {
                    return Err(EngineError::CircularReference(owner.clone()));
                }
                hops += 1;
                if hops > graph.cell_count() {
                    return Err(EngineError::CircularReference(current));
                }
                current = next.clone();
            }
        }
    }
}
