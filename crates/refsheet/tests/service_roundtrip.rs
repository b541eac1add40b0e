//! Tests for the persistence-backed service layer

use pretty_assertions::assert_eq;
use refsheet::prelude::*;
use refsheet::{ServiceError, StoreError};

fn service() -> (tempfile::TempDir, SheetService) {
    let dir = tempfile::tempdir().unwrap();
    let service = SheetService::open(dir.path()).unwrap();
    (dir, service)
}

fn specs() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("Name", ValueType::String),
        ColumnSpec::new("Age", ValueType::Integer),
    ]
}

#[test]
fn test_create_persists_a_document() {
    let (_dir, service) = service();

    let id = service.create(specs(), DEFAULT_ROWS).unwrap();
    let sheet = service.raw(&id.to_string()).unwrap();

    assert_eq!(sheet.id(), id);
    assert_eq!(sheet.rows(), 10);
    assert_eq!(sheet.columns().len(), 2);
    assert!(sheet.columns().iter().all(|c| c.cells().iter().all(Cell::is_empty)));
}

#[test]
fn test_create_rejects_bad_specs() {
    let (_dir, service) = service();

    assert!(matches!(
        service.create(vec![], DEFAULT_ROWS),
        Err(ServiceError::Core(Error::NoColumns))
    ));

    let duplicated = vec![
        ColumnSpec::new("Name", ValueType::String),
        ColumnSpec::new("Name", ValueType::Integer),
    ];
    assert!(matches!(
        service.create(duplicated, DEFAULT_ROWS),
        Err(ServiceError::Core(Error::DuplicateColumn(_)))
    ));
}

#[test]
fn test_update_and_read_resolved() {
    let (_dir, service) = service();
    let id = service.create(specs(), DEFAULT_ROWS).unwrap().to_string();

    service
        .update_cell(&id, "Name", 0, "$alice", SetMode::Value)
        .unwrap();
    service
        .update_cell(&id, "Name", 1, "lookup(Name,0)", SetMode::Lookup)
        .unwrap();
    service
        .update_cell(&id, "Name", 2, "lookup(Name,1)", SetMode::Lookup)
        .unwrap();

    let (resolved, stats) = service.resolved(&id).unwrap();
    for row in 0..3 {
        assert_eq!(
            resolved.cell("Name", row).unwrap().as_literal(),
            Some("$alice")
        );
    }
    assert_eq!(stats.cells_resolved, 2);
    assert_eq!(stats.errors, 0);
}

/// Reading a resolved view never changes the stored document
#[test]
fn test_resolved_view_is_not_persisted() {
    let (_dir, service) = service();
    let id = service.create(specs(), DEFAULT_ROWS).unwrap().to_string();

    service
        .update_cell(&id, "Age", 0, "34", SetMode::Value)
        .unwrap();
    service
        .update_cell(&id, "Age", 1, "lookup(Age,0)", SetMode::Lookup)
        .unwrap();

    let (_, first) = service.resolved(&id).unwrap();
    assert_eq!(first.cells_resolved, 1);

    // The stored document still holds the reference, so a second read
    // resolves it again from scratch
    let raw = service.raw(&id).unwrap();
    assert!(raw.cell("Age", 1).unwrap().is_lookup());
    assert!(raw.cell("Age", 0).unwrap().is_root());

    let (sheet, second) = service.resolved(&id).unwrap();
    assert_eq!(second.cells_resolved, 1);
    assert_eq!(sheet.cell("Age", 1).unwrap().as_literal(), Some("34"));
}

/// A rejected write leaves the stored document untouched
#[test]
fn test_failed_update_does_not_persist() {
    let (_dir, service) = service();
    let id = service.create(specs(), DEFAULT_ROWS).unwrap().to_string();

    service
        .update_cell(&id, "Age", 1, "lookup(Age,0)", SetMode::Lookup)
        .unwrap();

    assert!(matches!(
        service.update_cell(&id, "Age", 0, "lookup(Age,1)", SetMode::Lookup),
        Err(ServiceError::Engine(EngineError::CircularReference(_)))
    ));

    let raw = service.raw(&id).unwrap();
    assert!(raw.cell("Age", 0).unwrap().is_empty());
    assert_eq!(
        raw.cell("Age", 1).unwrap().reference(),
        Some(&CellRef::new("Age", 0))
    );
}

#[test]
fn test_bad_ids_are_rejected() {
    let (_dir, service) = service();

    assert!(matches!(
        service.raw("not-a-sheet-id"),
        Err(ServiceError::Core(Error::InvalidSheetId(_)))
    ));

    let missing = SheetId::generate().to_string();
    assert!(matches!(
        service.raw(&missing),
        Err(ServiceError::Store(StoreError::SheetNotFound(_)))
    ));
}

#[test]
fn test_list_returns_created_sheets() {
    let (_dir, service) = service();

    let a = service.create(specs(), 5).unwrap();
    let b = service.create(specs(), 5).unwrap();

    let ids = service.list().unwrap();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&a));
    assert!(ids.contains(&b));
}

/// Rows are parameterized per sheet; the grammar bound follows them
#[test]
fn test_row_bound_follows_sheet_size() {
    let (_dir, service) = service();
    let id = service.create(specs(), 20).unwrap().to_string();

    service
        .update_cell(&id, "Age", 19, "7", SetMode::Value)
        .unwrap();
    service
        .update_cell(&id, "Age", 0, "lookup(Age,19)", SetMode::Lookup)
        .unwrap();

    assert!(matches!(
        service.update_cell(&id, "Age", 0, "lookup(Age,20)", SetMode::Lookup),
        Err(ServiceError::Engine(EngineError::RowOutOfBounds(20, 19)))
    ));

    let (sheet, _) = service.resolved(&id).unwrap();
    assert_eq!(sheet.cell("Age", 0).unwrap().as_literal(), Some("7"));
}
