//! Chain resolution
//!
//! Flattens every reference chain in a sheet into concrete literal values.
//!
//! ```rust
//! use refsheet_core::{ColumnSpec, Sheet, ValueType};
//! use refsheet_engine::{resolve, set_cell, SetMode};
//!
//! let mut sheet = Sheet::create(vec![ColumnSpec::new("X", ValueType::String)], 10).unwrap();
//! set_cell(&mut sheet, "X", 0, "$hello", SetMode::Value).unwrap();
//! set_cell(&mut sheet, "X", 1, "lookup(X,0)", SetMode::Lookup).unwrap();
//!
//! let stats = resolve(&mut sheet);
//! assert_eq!(stats.cells_resolved, 1);
//! assert_eq!(sheet.cell("X", 1).unwrap().as_literal(), Some("$hello"));
//! ```

use ahash::AHashMap;
use refsheet_core::{CellRef, Sheet};

use crate::graph::SheetGraph;

/// Counters from one resolution pass
#[derive(Debug, Clone, Default)]
pub struct ResolutionStats {
    /// Number of lookup cells found in the sheet
    pub lookup_cells: usize,
    /// Number of cells rewritten to their terminal literal
    pub cells_resolved: usize,
    /// Number of walks that ended on an already-resolved cell
    pub memo_hits: usize,
    /// Number of cells whose referrer count dropped to zero
    pub roots_cleared: usize,
    /// Number of chains that could not be resolved (corrupt references)
    pub errors: usize,
}

/// Resolve every reference chain in the sheet to its terminal literal
///
/// Each lookup cell is walked forward to the literal its chain ends at; the
/// literal is written into every cell along the path and each cleared edge
/// drops its target's referrer count. Cells resolved by an earlier path
/// terminate later walks immediately, so shared chain suffixes are computed
/// once. Resolution order does not affect the outcome, and running it again
/// on an already-flat sheet is a no-op.
///
/// The write path guarantees stored references are acyclic and in-bounds, so
/// this never fails on sheets it manages. References corrupted outside the
/// write path (a hand-edited document) are left in place, logged, and counted
/// in [`ResolutionStats::errors`].
pub fn resolve(sheet: &mut Sheet) -> ResolutionStats {
    let mut stats = ResolutionStats::default();

    // Plan against an immutable view: walk every chain, memoizing terminals
    let mut resolved: AHashMap<CellRef, String> = AHashMap::new();
    {
        let mut pending: Vec<CellRef> = Vec::new();
        for column in sheet.columns() {
            for (row, cell) in column.cells().iter().enumerate() {
                if cell.is_lookup() {
                    pending.push(CellRef::new(column.name(), row));
                }
            }
        }
        stats.lookup_cells = pending.len();

        let graph = SheetGraph::new(sheet);
        for start in pending {
            let mut path: Vec<CellRef> = Vec::new();
            let mut current = start;

            let terminal = loop {
                if let Some(value) = resolved.get(&current) {
                    stats.memo_hits += 1;
                    break Some(value.clone());
                }
                match graph.cell(&current) {
                    Ok(cell) => match cell.reference() {
                        // Literal cell: the chain ends here
                        None => break Some(cell.display_value().to_string()),
                        Some(next) => {
                            if path.len() > graph.cell_count() {
                                tracing::warn!(
                                    "Unresolvable chain at {current}: hop limit exceeded"
                                );
                                stats.errors += 1;
                                break None;
                            }
                            path.push(current.clone());
                            current = next.clone();
                        }
                    },
                    Err(err) => {
                        tracing::warn!("Unresolvable chain at {current}: {err}");
                        stats.errors += 1;
                        break None;
                    }
                }
            };

            if let Some(value) = terminal {
                for pos in path {
                    resolved.insert(pos, value.clone());
                }
            }
        }
    }

    stats.cells_resolved = resolved.len();

    // Apply: rewrite each resolved cell and clear its outbound edge
    for (pos, value) in resolved {
        let target = sheet.cell_at(&pos).and_then(|c| c.reference().cloned());
        if let Some(cell) = sheet.cell_at_mut(&pos) {
            cell.set_literal(value);
        }
        if let Some(target) = target {
            if let Some(cell) = sheet.cell_at_mut(&target) {
                if cell.remove_referrer() {
                    stats.roots_cleared += 1;
                }
            }
        }
    }

    stats
}
