//! Persistence-backed sheet operations

use refsheet_core::{ColumnSpec, Sheet, SheetId};
use refsheet_engine::{resolve, set_cell, EngineError, ResolutionStats, SetMode};
use refsheet_store::{SheetStore, StoreError};
use std::path::PathBuf;
use thiserror::Error;

/// Result type for service operations
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Errors surfaced by [`SheetService`] operations
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Validation error from the engine
    #[error("Validation error: {0}")]
    Engine(#[from] EngineError),

    /// Persistence error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Core error (bad id, bad creation input)
    #[error("Core error: {0}")]
    Core(#[from] refsheet_core::Error),
}

/// Sheet operations over a document store
///
/// Owns a [`SheetStore`] and runs engine operations against loaded documents.
/// Writes validate before persisting; reads resolve a loaded copy, and the
/// resolved view is never written back, so the stored document always keeps
/// its reference structure.
#[derive(Debug, Clone)]
pub struct SheetService {
    store: SheetStore,
}

impl SheetService {
    /// Open a service over a data directory, creating it if needed
    pub fn open<P: Into<PathBuf>>(dir: P) -> ServiceResult<Self> {
        Ok(Self {
            store: SheetStore::open(dir)?,
        })
    }

    /// Wrap an existing store
    pub fn new(store: SheetStore) -> Self {
        Self { store }
    }

    /// Access the underlying store
    pub fn store(&self) -> &SheetStore {
        &self.store
    }

    /// Create and persist a new sheet, returning its generated id
    pub fn create(&self, specs: Vec<ColumnSpec>, rows: usize) -> ServiceResult<SheetId> {
        let sheet = Sheet::create(specs, rows)?;
        self.store.insert(&sheet)?;
        tracing::info!(
            "Created sheet {} ({} columns, {} rows)",
            sheet.id(),
            sheet.columns().len(),
            sheet.rows()
        );
        Ok(sheet.id())
    }

    /// Load a sheet as stored, lookups unresolved
    pub fn raw(&self, id: &str) -> ServiceResult<Sheet> {
        let id = SheetId::parse(id)?;
        Ok(self.store.load(id)?)
    }

    /// Load a sheet and resolve every reference chain in the returned copy
    pub fn resolved(&self, id: &str) -> ServiceResult<(Sheet, ResolutionStats)> {
        let mut sheet = self.raw(id)?;
        let stats = resolve(&mut sheet);
        if stats.errors > 0 {
            tracing::warn!(
                "Sheet {} resolved with {} unresolvable chains",
                sheet.id(),
                stats.errors
            );
        }
        Ok((sheet, stats))
    }

    /// Validate and write one cell, persisting the updated document
    ///
    /// A validation failure leaves the stored document untouched.
    pub fn update_cell(
        &self,
        id: &str,
        column: &str,
        row: usize,
        value: &str,
        mode: SetMode,
    ) -> ServiceResult<()> {
        let mut sheet = self.raw(id)?;
        set_cell(&mut sheet, column, row, value, mode)?;
        self.store.save(&sheet)?;
        tracing::info!("Updated cell {},{} in sheet {}", column, row, sheet.id());
        Ok(())
    }

    /// Ids of all stored sheets, oldest first
    pub fn list(&self) -> ServiceResult<Vec<SheetId>> {
        Ok(self.store.list()?)
    }
}
