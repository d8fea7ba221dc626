//! Integration tests for carts persisted to a data directory.
//!
//! Each test opens one store, changes the cart, drops it, then opens a fresh
//! store over the same directory, the way a page reload would.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::fs;
use std::path::{Path, PathBuf};

use guitarla_cart::{CartStorage, CartStore, FileStorage, MemoryStorage};
use guitarla_core::{GuitarId, Price};
use guitarla_integration_tests::builtin_catalog as catalog;
use tempfile::TempDir;

/// Data directory inside a scratch root; storage creates it on first write.
fn data_dir(root: &TempDir) -> PathBuf {
    root.path().join("data")
}

fn open(dir: &Path) -> CartStore<FileStorage> {
    CartStore::open(catalog(), FileStorage::new(dir)).expect("open store")
}

// =============================================================================
// Reload Tests
// =============================================================================

#[test]
fn test_cart_survives_reload() {
    let root = tempfile::tempdir().unwrap();
    let dir = data_dir(&root);
    {
        let mut store = open(&dir);
        let catalog = catalog();
        store.add_to_cart(catalog.get(GuitarId::new(3)).unwrap()).unwrap();
        store.add_to_cart(catalog.get(GuitarId::new(1)).unwrap()).unwrap();
        store.increase_quantity(GuitarId::new(1)).unwrap();
    }

    let store = open(&dir);
    let ids: Vec<i32> = store.cart().iter().map(|i| i.id.as_i32()).collect();
    assert_eq!(ids, vec![3, 1]);
    assert_eq!(store.cart()[1].quantity, 2);
    // 329 + 299*2
    assert_eq!(store.cart_total(), Price::from_units(927));
}

#[test]
fn test_fresh_directory_starts_empty() {
    let root = tempfile::tempdir().unwrap();
    let dir = data_dir(&root);
    let store = open(&dir);
    assert!(store.is_empty());
    assert!(!dir.as_path().exists(), "opening must not write");
}

#[test]
fn test_clear_persists_empty_array() {
    let root = tempfile::tempdir().unwrap();
    let dir = data_dir(&root);
    {
        let mut store = open(&dir);
        let guitar = store.catalog().get(GuitarId::new(6)).unwrap().clone();
        store.add_to_cart(&guitar).unwrap();
        store.clear_cart().unwrap();
        assert!(store.is_empty());
        assert_eq!(store.cart_total(), Price::ZERO);
    }

    let raw = fs::read_to_string(FileStorage::new(dir.as_path()).cart_path()).unwrap();
    assert_eq!(raw, "[]");
    assert!(open(&dir).is_empty());
}

#[test]
fn test_removed_line_stays_removed() {
    let root = tempfile::tempdir().unwrap();
    let dir = data_dir(&root);
    {
        let mut store = open(&dir);
        let catalog = catalog();
        store.add_to_cart(catalog.get(GuitarId::new(1)).unwrap()).unwrap();
        store.add_to_cart(catalog.get(GuitarId::new(1)).unwrap()).unwrap();
        store.add_to_cart(catalog.get(GuitarId::new(2)).unwrap()).unwrap();
        store.remove_from_cart(GuitarId::new(1)).unwrap();
    }

    let store = open(&dir);
    assert_eq!(store.cart().len(), 1);
    assert_eq!(store.cart()[0].id, GuitarId::new(2));
    assert_eq!(store.cart()[0].quantity, 1);
}

// =============================================================================
// Snapshot Compatibility Tests
// =============================================================================

#[test]
fn test_browser_snapshot_loads() {
    let root = tempfile::tempdir().unwrap();
    let dir = data_dir(&root);
    let storage = FileStorage::new(dir.as_path());
    fs::create_dir_all(dir.as_path()).unwrap();
    fs::write(
        storage.cart_path(),
        r#"[{"id":10,"name":"Campbell","image":"guitarra_10","description":"Morbi","price":349,"quantity":4}]"#,
    )
    .unwrap();

    let store = CartStore::open(catalog(), storage).unwrap();
    assert_eq!(store.cart().len(), 1);
    assert_eq!(store.cart()[0].name, "Campbell");
    assert_eq!(store.cart_total(), Price::from_units(1396));
}

#[test]
fn test_corrupt_snapshot_recovers_on_next_write() {
    let root = tempfile::tempdir().unwrap();
    let dir = data_dir(&root);
    let storage = FileStorage::new(dir.as_path());
    fs::create_dir_all(dir.as_path()).unwrap();
    fs::write(storage.cart_path(), "{\"cart\": oops").unwrap();

    let mut store = CartStore::open(catalog(), storage).unwrap();
    assert!(store.is_empty());

    let guitar = store.catalog().get(GuitarId::new(11)).unwrap().clone();
    store.add_to_cart(&guitar).unwrap();

    let reloaded = open(&dir);
    assert_eq!(reloaded.cart().len(), 1);
    assert_eq!(reloaded.cart()[0].id, GuitarId::new(11));
}

#[test]
fn test_file_and_memory_storage_write_identical_text() {
    let root = tempfile::tempdir().unwrap();
    let dir = data_dir(&root);
    let mut file = FileStorage::new(dir.as_path());
    let mut memory = MemoryStorage::new();

    let mut store = CartStore::open(catalog(), MemoryStorage::new()).unwrap();
    let guitar = store.catalog().get(GuitarId::new(8)).unwrap().clone();
    store.add_to_cart(&guitar).unwrap();
    store.increase_quantity(guitar.id).unwrap();

    file.save(store.cart()).unwrap();
    memory.save(store.cart()).unwrap();

    let on_disk = fs::read_to_string(file.cart_path()).unwrap();
    assert_eq!(Some(on_disk.as_str()), memory.raw());

    let value: serde_json::Value = serde_json::from_str(&on_disk).unwrap();
    let line = &value[0];
    for field in ["id", "name", "image", "description", "price", "quantity"] {
        assert!(line.get(field).is_some(), "missing field {field}");
    }
    assert_eq!(line["quantity"], 2);
}
