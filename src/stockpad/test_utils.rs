use crate::commands::{add_item, ItemForm};
use crate::inventory::Inventory;
use crate::model::ItemId;
use crate::store::fs::FsBlobStore;
use chrono::Utc;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // Held so the directory lives as long as the test
    pub _temp_dir: TempDir,
    pub store: FsBlobStore,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let store = FsBlobStore::new(root.clone());
        Self {
            _temp_dir: temp_dir,
            store,
            root,
        }
    }
}

/// An inventory holding a single non-perishable item.
pub fn inventory_with(name: &str, stock: u32, price: f64) -> (Inventory, ItemId) {
    let mut inventory = Inventory::new();
    let form = ItemForm::new(name, "General", stock.to_string(), price.to_string());
    let result = add_item::run(&mut inventory, &form, Utc::now()).expect("valid item form");
    let id = result.affected_items[0].id;
    (inventory, id)
}
