//! Cell types: positions, contents, and root bookkeeping

use std::fmt;

/// The position of a cell, addressed by column name and zero-based row
///
/// This is the normalized form of a lookup target. The textual
/// `lookup(<column>,<row>)` shape only exists at the input boundary; once a
/// reference is validated it is stored structurally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRef {
    /// Column name (case-sensitive)
    pub column: String,
    /// Row index (0-based)
    pub row: usize,
}

impl CellRef {
    /// Create a new cell reference
    pub fn new<S: Into<String>>(column: S, row: usize) -> Self {
        Self {
            column: column.into(),
            row,
        }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.column, self.row)
    }
}

/// What a cell holds: exactly one of a literal value or a lookup reference
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellContent {
    /// A raw literal value (possibly empty)
    Literal(String),
    /// A reference to another cell's resolved value
    Lookup(CellRef),
}

impl fmt::Display for CellContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellContent::Literal(s) => write!(f, "{}", s),
            CellContent::Lookup(target) => write!(f, "lookup({},{})", target.column, target.row),
        }
    }
}

/// A single cell: its content plus a count of live inbound references
///
/// `referenced_by` tracks how many lookup cells currently point at this cell.
/// A cell with a nonzero count is a *root*: some chain ends (or passes
/// through) here, so its literal must not be discarded while the count is
/// live. The count is maintained by the write path and drained by resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    content: CellContent,
    referenced_by: u32,
}

impl Cell {
    /// Create a cell holding a literal value
    pub fn literal<S: Into<String>>(value: S) -> Self {
        Self {
            content: CellContent::Literal(value.into()),
            referenced_by: 0,
        }
    }

    /// Create a cell holding a lookup reference
    pub fn lookup(target: CellRef) -> Self {
        Self {
            content: CellContent::Lookup(target),
            referenced_by: 0,
        }
    }

    /// Get the cell content
    pub fn content(&self) -> &CellContent {
        &self.content
    }

    /// Check if the cell holds a lookup reference
    pub fn is_lookup(&self) -> bool {
        matches!(self.content, CellContent::Lookup(_))
    }

    /// Check if the cell holds an empty literal (its creation state)
    pub fn is_empty(&self) -> bool {
        matches!(&self.content, CellContent::Literal(s) if s.is_empty())
    }

    /// Get the literal value, if the cell holds one
    pub fn as_literal(&self) -> Option<&str> {
        match &self.content {
            CellContent::Literal(s) => Some(s),
            CellContent::Lookup(_) => None,
        }
    }

    /// Get the lookup target, if the cell holds one
    pub fn reference(&self) -> Option<&CellRef> {
        match &self.content {
            CellContent::Literal(_) => None,
            CellContent::Lookup(target) => Some(target),
        }
    }

    /// The value shown for this cell: its literal, or empty while an
    /// unresolved lookup is in place
    pub fn display_value(&self) -> &str {
        self.as_literal().unwrap_or("")
    }

    /// Replace the content with a literal value
    pub fn set_literal<S: Into<String>>(&mut self, value: S) {
        self.content = CellContent::Literal(value.into());
    }

    /// Replace the content with a lookup reference
    pub fn set_lookup(&mut self, target: CellRef) {
        self.content = CellContent::Lookup(target);
    }

    /// Number of cells currently referencing this one
    pub fn referenced_by(&self) -> u32 {
        self.referenced_by
    }

    /// Check if any live reference points at this cell
    pub fn is_root(&self) -> bool {
        self.referenced_by > 0
    }

    /// Record a new inbound reference
    pub fn add_referrer(&mut self) {
        self.referenced_by += 1;
    }

    /// Drop an inbound reference; returns true if the count reached zero
    pub fn remove_referrer(&mut self) -> bool {
        self.referenced_by = self.referenced_by.saturating_sub(1);
        self.referenced_by == 0
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::literal(String::new())
    }
}
