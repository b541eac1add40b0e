//! # refsheet-engine
//!
//! Lookup validation and chain resolution for refsheet sheets.
//!
//! The engine is synchronous and stateless: every operation takes a sheet,
//! validates or transforms it, and returns. The write path ([`set_cell`])
//! guarantees that stored references are well-formed, acyclic, in-bounds, and
//! type-consistent; the read path ([`resolve`]) relies on those guarantees to
//! flatten every chain without failing.
//!
//! ## Example
//!
//! ```rust
//! use refsheet_core::{ColumnSpec, Sheet, ValueType};
//! use refsheet_engine::{resolve, set_cell, SetMode};
//!
//! let mut sheet = Sheet::create(vec![ColumnSpec::new("Score", ValueType::Integer)], 10).unwrap();
//!
//! set_cell(&mut sheet, "Score", 0, "100", SetMode::Value).unwrap();
//! set_cell(&mut sheet, "Score", 3, "lookup(Score,0)", SetMode::Lookup).unwrap();
//!
//! // Writing a cycle is rejected before anything is stored
//! assert!(set_cell(&mut sheet, "Score", 0, "lookup(Score,3)", SetMode::Lookup).is_err());
//!
//! let stats = resolve(&mut sheet);
//! assert_eq!(stats.cells_resolved, 1);
//! assert_eq!(sheet.cell("Score", 3).unwrap().as_literal(), Some("100"));
//! ```

pub mod error;
pub mod graph;
pub mod parser;
pub mod resolver;
pub mod validator;
pub mod write;

pub use error::{EngineError, EngineResult};
pub use graph::SheetGraph;
pub use parser::parse_lookup;
pub use resolver::{resolve, ResolutionStats};
pub use validator::effective_type;
pub use write::{set_cell, SetMode};
