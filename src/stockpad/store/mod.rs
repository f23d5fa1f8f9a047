//! # Storage Layer
//!
//! Persistence is split in two:
//!
//! - [`BlobStore`]: the raw substrate, a synchronous string-keyed blob store
//!   (`get`/`set`). It knows nothing about items or sales.
//! - [`load`] / [`save`]: the adapter that (de)serializes the three
//!   collections under their fixed keys.
//!
//! ## Implementations
//!
//! - [`memory::MemBlobStore`]: in-memory, for tests and embedding. Can simulate
//!   write failures.
//! - [`fs::FsBlobStore`]: one `<key>.json` file per key in a data directory.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── inventoryItems.json   # JSON array of items
//! ├── salesData.json        # JSON array of sales
//! ├── transactions.json     # JSON array of transactions
//! └── config.json           # CLI configuration
//! ```
//!
//! Each collection is independent: a missing or corrupt blob empties only its
//! own slot on load.

use crate::error::{Result, StockError};
use crate::inventory::Inventory;
use crate::model::{Item, Sale, Transaction};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

pub mod fs;
pub mod memory;

pub const ITEMS_KEY: &str = "inventoryItems";
pub const SALES_KEY: &str = "salesData";
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Abstract interface for the key-value blob substrate.
pub trait BlobStore {
    /// Returns the stored string, or `Ok(None)` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<B: BlobStore + ?Sized> BlobStore for &B {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Loads all three collections. Never fails: every slot that is absent,
/// unreadable or malformed comes back empty.
pub fn load<B: BlobStore>(store: &B) -> Inventory {
    let items: Vec<Item> = load_collection(store, ITEMS_KEY);
    let sales: Vec<Sale> = load_collection(store, SALES_KEY);
    let transactions: Vec<Transaction> = load_collection(store, TRANSACTIONS_KEY);
    debug!(
        items = items.len(),
        sales = sales.len(),
        transactions = transactions.len(),
        "inventory loaded"
    );
    Inventory::from_parts(items, sales, transactions)
}

fn load_collection<B: BlobStore, T: DeserializeOwned>(store: &B, key: &str) -> Vec<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(key, error = %e, "could not read collection, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(e) => {
            warn!(key, error = %e, "malformed collection, starting empty");
            Vec::new()
        }
    }
}

/// Writes all three collections in full.
pub fn save<B: BlobStore>(store: &B, inventory: &Inventory) -> Result<()> {
    save_collection(store, ITEMS_KEY, inventory.items())?;
    save_collection(store, SALES_KEY, inventory.sales())?;
    save_collection(store, TRANSACTIONS_KEY, inventory.transactions())?;
    debug!("inventory saved");
    Ok(())
}

fn save_collection<B: BlobStore, T: Serialize>(store: &B, key: &str, records: &[T]) -> Result<()> {
    let raw = serde_json::to_string(records)
        .map_err(|e| StockError::PersistenceFailure(format!("encoding {}: {}", key, e)))?;
    store.set(key, &raw).map_err(|e| match e {
        StockError::PersistenceFailure(_) => e,
        other => StockError::PersistenceFailure(format!("writing {}: {}", key, other)),
    })
}

#[cfg(test)]
mod tests {
    use super::memory::MemBlobStore;
    use super::*;
    use crate::model::ItemId;
    use chrono::NaiveDate;

    fn sample() -> Inventory {
        let items = vec![
            Item::new(ItemId(1), "Rice".into(), "Grains".into(), 40, 2.25, None),
            Item::new(
                ItemId(2),
                "Yogurt".into(),
                "Dairy".into(),
                6,
                0.99,
                NaiveDate::from_ymd_opt(2025, 7, 1),
            ),
        ];
        Inventory::from_parts(items, vec![], vec![])
    }

    #[test]
    fn save_then_load_reproduces_items() {
        let store = MemBlobStore::new();
        let inv = sample();
        save(&store, &inv).unwrap();

        let loaded = load(&store);
        assert_eq!(loaded.items(), inv.items());
    }

    #[test]
    fn empty_store_loads_empty_inventory() {
        let loaded = load(&MemBlobStore::new());
        assert!(loaded.items().is_empty());
        assert!(loaded.sales().is_empty());
        assert!(loaded.transactions().is_empty());
    }

    #[test]
    fn malformed_slot_does_not_affect_the_others() {
        let store = MemBlobStore::new();
        save(&store, &sample()).unwrap();
        store.set(SALES_KEY, "{not json").unwrap();
        store.set(TRANSACTIONS_KEY, "[{\"id\": \"oops\"}]").unwrap();

        let loaded = load(&store);
        assert_eq!(loaded.items().len(), 2);
        assert!(loaded.sales().is_empty());
        assert!(loaded.transactions().is_empty());
    }

    #[test]
    fn write_failure_is_a_persistence_failure() {
        let store = MemBlobStore::new();
        store.set_simulate_write_error(true);
        let err = save(&store, &sample()).unwrap_err();
        assert!(matches!(err, StockError::PersistenceFailure(_)));
    }

    #[test]
    fn loads_blobs_written_by_the_browser_widget() {
        let store = MemBlobStore::new();
        store
            .set(
                ITEMS_KEY,
                r#"[{"id":1718000000000,"name":"Eggs","category":"Dairy","stock":12,
                    "price":0.25,"isPerishable":true,"expirationDate":"2024-06-20",
                    "salesHistory":[{"date":"2024-06-10T08:00:00.000Z","quantity":2}]}]"#,
            )
            .unwrap();
        store
            .set(
                SALES_KEY,
                r#"[{"id":1718000001000,"itemId":1718000000000,"itemName":"Eggs",
                    "quantity":2,"total":0.5,"timestamp":"2024-06-10T08:00:00.000Z"}]"#,
            )
            .unwrap();

        let loaded = load(&store);
        assert_eq!(loaded.items()[0].name, "Eggs");
        assert_eq!(loaded.items()[0].sales_history.len(), 1);
        assert_eq!(loaded.sales()[0].item_id, ItemId(1_718_000_000_000));
    }
}
