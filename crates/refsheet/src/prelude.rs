//! Prelude module - common imports for refsheet users
//!
//! ```rust
//! use refsheet::prelude::*;
//! ```

pub use crate::{
    // Engine operations
    resolve,
    set_cell,
    // Cell types
    Cell,
    CellContent,
    CellRef,
    // Column types
    ColumnSpec,
    // Error types
    EngineError,
    Error,
    ResolutionStats,
    Result,
    SetMode,
    // Main types
    Sheet,
    SheetId,
    // Service and store
    SheetService,
    SheetStore,
    ValueType,
    // Constants
    DEFAULT_ROWS,
};
