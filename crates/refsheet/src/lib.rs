//! # refsheet
//!
//! Typed-column sheets where a cell holds either a literal value or a
//! *lookup*: a validated reference to another cell's resolved value.
//!
//! Columns declare a type (string, integer, or boolean) and every literal in
//! a column must classify as that type. Lookup cells form reference chains;
//! the write path guarantees chains stay acyclic, in-bounds, and
//! type-consistent end to end, and the resolver flattens every chain to its
//! terminal literal on read.
//!
//! ## Features
//!
//! - Literal classification with the `$` string sentinel
//! - `lookup(<column>,<row>)` expressions, validated before commit
//! - Self-reference, circular-reference, and type-compatibility checks
//! - Memoizing chain resolution with exact root bookkeeping
//! - JSON document persistence and a persistence-backed service layer
//!
//! ## Example
//!
//! ```rust
//! use refsheet::prelude::*;
//!
//! let mut sheet = Sheet::create(
//!     vec![
//!         ColumnSpec::new("City", ValueType::String),
//!         ColumnSpec::new("Population", ValueType::Integer),
//!     ],
//!     DEFAULT_ROWS,
//! )
//! .unwrap();
//!
//! set_cell(&mut sheet, "City", 0, "$lyon", SetMode::Value).unwrap();
//! set_cell(&mut sheet, "City", 1, "lookup(City,0)", SetMode::Lookup).unwrap();
//!
//! // Cycles are rejected before anything is stored
//! assert!(set_cell(&mut sheet, "City", 0, "lookup(City,1)", SetMode::Lookup).is_err());
//!
//! let stats = resolve(&mut sheet);
//! assert_eq!(stats.cells_resolved, 1);
//! assert_eq!(sheet.cell("City", 1).unwrap().as_literal(), Some("$lyon"));
//! ```

pub mod prelude;
pub mod service;

// Re-export service types
pub use service::{ServiceError, ServiceResult, SheetService};

// Re-export core types
pub use refsheet_core::{
    // Cell types
    Cell,
    CellContent,
    CellRef,
    // Column types
    Column,
    ColumnSpec,
    // Error types
    Error,
    Result,
    // Main types
    Sheet,
    SheetId,
    ValueType,
    // Constants
    DEFAULT_ROWS,
    STRING_SENTINEL,
};

// Re-export engine types
pub use refsheet_engine::{
    effective_type, parse_lookup, resolve, set_cell, EngineError, EngineResult, ResolutionStats,
    SetMode, SheetGraph,
};

// Re-export store types
pub use refsheet_store::{SheetStore, StoreError, StoreResult};
