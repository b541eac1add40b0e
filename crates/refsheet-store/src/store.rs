//! Sheet document store

use crate::error::{StoreError, StoreResult};
use refsheet_core::{Sheet, SheetId};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// One-JSON-document-per-sheet storage under a data directory
///
/// Documents are stored as `<dir>/<id>.json`. Saves replace the whole
/// document; there is no partial update. Stored sheets keep their unresolved
/// lookup references, so a loaded sheet behaves exactly like the one saved.
#[derive(Debug, Clone)]
pub struct SheetStore {
    dir: PathBuf,
}

impl SheetStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open<P: Into<PathBuf>>(dir: P) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The data directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Check whether a document with the given id exists
    pub fn exists(&self, id: SheetId) -> bool {
        self.document_path(id).is_file()
    }

    /// Store a new sheet; fails if its id is already taken
    pub fn insert(&self, sheet: &Sheet) -> StoreResult<()> {
        if self.exists(sheet.id()) {
            return Err(StoreError::SheetExists(sheet.id()));
        }
        self.save(sheet)
    }

    /// Write a sheet document, replacing any previous version
    pub fn save(&self, sheet: &Sheet) -> StoreResult<()> {
        let path = self.document_path(sheet.id());
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, sheet)?;
        writer.flush()?;
        tracing::debug!("Saved sheet {} to {}", sheet.id(), path.display());
        Ok(())
    }

    /// Load a sheet document by id
    pub fn load(&self, id: SheetId) -> StoreResult<Sheet> {
        let path = self.document_path(id);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::SheetNotFound(id));
            }
            Err(err) => return Err(err.into()),
        };
        let sheet = serde_json::from_reader(BufReader::new(file))?;
        tracing::debug!("Loaded sheet {} from {}", id, path.display());
        Ok(sheet)
    }

    /// List the ids of all stored sheets, oldest first
    pub fn list(&self) -> StoreResult<Vec<SheetId>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                // Stray files that do not look like ids are not documents
                if let Ok(id) = SheetId::parse(stem) {
                    ids.push(id);
                }
            }
        }
        // Ids start with a timestamp, so byte order is creation order
        ids.sort_by_key(|id| *id.as_bytes());
        Ok(ids)
    }

    fn document_path(&self, id: SheetId) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refsheet_core::{CellRef, ColumnSpec, ValueType};

    fn sample_sheet() -> Sheet {
        let mut sheet = Sheet::create(
            vec![
                ColumnSpec::new("Name", ValueType::String),
                ColumnSpec::new("Age", ValueType::Integer),
            ],
            10,
        )
        .unwrap();
        sheet.cell_mut("Name", 0).unwrap().set_literal("$alice");
        sheet
            .cell_mut("Name", 1)
            .unwrap()
            .set_lookup(CellRef::new("Name", 0));
        sheet.cell_mut("Name", 0).unwrap().add_referrer();
        sheet
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SheetStore::open(dir.path()).unwrap();

        let sheet = sample_sheet();
        store.insert(&sheet).unwrap();

        let loaded = store.load(sheet.id()).unwrap();
        assert_eq!(loaded.id(), sheet.id());
        assert_eq!(loaded.rows(), sheet.rows());
        assert_eq!(loaded.columns(), sheet.columns());

        // Unresolved references and referrer counts survive the roundtrip
        let cell = loaded.cell("Name", 1).unwrap();
        assert_eq!(cell.reference(), Some(&CellRef::new("Name", 0)));
        assert_eq!(loaded.cell("Name", 0).unwrap().referenced_by(), 1);
    }

    #[test]
    fn test_load_missing_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let store = SheetStore::open(dir.path()).unwrap();

        let id = SheetId::generate();
        assert!(!store.exists(id));
        assert!(matches!(
            store.load(id),
            Err(StoreError::SheetNotFound(missing)) if missing == id
        ));
    }

    #[test]
    fn test_insert_twice_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = SheetStore::open(dir.path()).unwrap();

        let sheet = sample_sheet();
        store.insert(&sheet).unwrap();
        assert!(matches!(
            store.insert(&sheet),
            Err(StoreError::SheetExists(_))
        ));

        // save still replaces
        store.save(&sheet).unwrap();
    }

    #[test]
    fn test_list_skips_stray_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = SheetStore::open(dir.path()).unwrap();

        let a = sample_sheet();
        let b = sample_sheet();
        store.insert(&a).unwrap();
        store.insert(&b).unwrap();

        fs::write(dir.path().join("notes.txt"), "not a document").unwrap();
        fs::write(dir.path().join("bad-id.json"), "{}").unwrap();

        let ids = store.list().unwrap();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&a.id()));
        assert!(ids.contains(&b.id()));
    }

    #[test]
    fn test_load_corrupt_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = SheetStore::open(dir.path()).unwrap();

        let id = SheetId::generate();
        fs::write(dir.path().join(format!("{id}.json")), "{ not json").unwrap();

        assert!(matches!(store.load(id), Err(StoreError::Json(_))));
    }

    #[test]
    fn test_open_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("sheets");
        let store = SheetStore::open(&nested).unwrap();

        assert!(nested.is_dir());
        assert_eq!(store.dir(), nested.as_path());
    }
}
