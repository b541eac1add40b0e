//! # refsheet-store
//!
//! Document persistence for refsheet: one JSON file per sheet under a data
//! directory. The store only moves whole documents; it never resolves
//! references or inspects cell contents.

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::SheetStore;
