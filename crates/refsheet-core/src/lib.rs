//! # refsheet-core
//!
//! Core data structures for the refsheet typed-column sheet library.
//!
//! This crate provides the fundamental types used throughout refsheet:
//! - [`ValueType`] - Column types and literal classification (string/integer/boolean)
//! - [`Cell`], [`CellContent`], [`CellRef`] - Cells, their contents, and positions
//! - [`Column`], [`ColumnSpec`] - Typed columns and their creation specs
//! - [`Sheet`], [`SheetId`] - The persisted document structure
//!
//! ## Example
//!
//! ```rust
//! use refsheet_core::{CellRef, ColumnSpec, Sheet, ValueType};
//!
//! let mut sheet = Sheet::create(
//!     vec![
//!         ColumnSpec::new("Name", ValueType::String),
//!         ColumnSpec::new("Age", ValueType::Integer),
//!     ],
//!     10,
//! )
//! .unwrap();
//!
//! sheet.cell_mut("Name", 0).unwrap().set_literal("$alice");
//! sheet.cell_mut("Age", 0).unwrap().set_literal("34");
//!
//! // A lookup cell points at another cell's resolved value
//! sheet
//!     .cell_mut("Age", 1)
//!     .unwrap()
//!     .set_lookup(CellRef::new("Age", 0));
//!
//! assert!(sheet.cell("Age", 1).unwrap().is_lookup());
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod sheet;
pub mod value;

// Re-exports for convenience
pub use cell::{Cell, CellContent, CellRef};
pub use column::{Column, ColumnSpec};
pub use error::{Error, Result};
pub use sheet::{Sheet, SheetId};
pub use value::{ValueType, STRING_SENTINEL};

/// Default number of rows in a newly created sheet
pub const DEFAULT_ROWS: usize = 10;
