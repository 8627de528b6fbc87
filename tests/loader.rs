use std::path::PathBuf;

use real_estate_register::{load_properties, DatabaseError, Field, FormValues, Register};
use rusqlite::Connection;
use tempfile::TempDir;

fn create_db(dir: &TempDir, setup: &str) -> PathBuf {
    let path = dir.path().join("properties.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(setup).unwrap();
    path
}

#[test]
fn six_column_row_maps_with_address_from_fourth_column() {
    let dir = TempDir::new().unwrap();
    let path = create_db(
        &dir,
        "CREATE TABLE properties (c0, c1, c2, c3, c4, c5);
         INSERT INTO properties VALUES ('A', 'B', 'C', 'D', 'E', 'F');",
    );

    let mut register = Register::new();
    assert_eq!(register.load(&path).unwrap(), 1);

    let record = &register.store().records()[0];
    assert_eq!(record.object_type, "A");
    assert_eq!(record.area, "B");
    assert_eq!(record.address, "D");
    assert_eq!(record.price, "E");
    assert_eq!(record.client_full_name, "F");
    assert_eq!(
        register.table().rows()[0],
        ["A", "B", "D", "E", "F"].map(String::from)
    );
}

#[test]
fn empty_table_loads_nothing_without_error() {
    let dir = TempDir::new().unwrap();
    let path = create_db(&dir, "CREATE TABLE properties (c0, c1, c2, c3, c4, c5);");

    let mut register = Register::new();
    assert_eq!(register.load(&path).unwrap(), 0);
    assert!(register.store().is_empty());
    assert!(register.table().is_empty());
}

#[test]
fn missing_file_is_an_error_and_is_not_created() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("properties.db");

    let mut register = Register::new();
    let err = register.load(&path).unwrap_err();
    assert!(matches!(err, DatabaseError::Sqlite { .. }));
    assert!(register.store().is_empty());
    assert!(!path.exists());
}

#[test]
fn missing_table_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = create_db(&dir, "CREATE TABLE listings (x);");

    let err = load_properties(&path).unwrap_err();
    assert!(err.to_string().contains("no such table"));
}

#[test]
fn garbage_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("properties.db");
    std::fs::write(&path, b"definitely not a sqlite database, just some bytes").unwrap();

    let mut register = Register::new();
    assert!(register.load(&path).is_err());
    assert!(register.store().is_empty());
}

#[test]
fn rows_keep_storage_order_and_then_accept_manual_entries() {
    let dir = TempDir::new().unwrap();
    let path = create_db(
        &dir,
        "CREATE TABLE properties (c0, c1, c2, c3, c4, c5);
         INSERT INTO properties VALUES ('Flat', 40, 'x', 'Pine St', 90000, 'Ann');
         INSERT INTO properties VALUES ('Barn', 300, 'x', 'Farm Rd', 15000, 'Bob');",
    );

    let mut register = Register::new();
    register.load(&path).unwrap();
    let types: Vec<_> = register
        .store()
        .records()
        .iter()
        .map(|record| record.get(Field::ObjectType).to_string())
        .collect();
    assert_eq!(types, ["Flat", "Barn"]);
    assert_eq!(register.store().records()[0].area, "40");

    let values = FormValues::new(
        ["House", "120", "Elm St", "250000", "Jane Smith"].map(String::from),
    );
    register.submit(values).unwrap();
    assert_eq!(register.store().len(), 3);
    assert_eq!(
        register.table().rows()[2],
        ["House", "120", "Elm St", "250000", "Jane Smith"].map(String::from)
    );
}
