use super::BlobStore;
use crate::error::{Result, StockError};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory blob store.
///
/// Uses `RefCell` for interior mutability since stockpad is single-threaded,
/// which keeps `BlobStore` on `&self` for both methods.
#[derive(Default)]
pub struct MemBlobStore {
    blobs: RefCell<HashMap<String, String>>,
    simulate_write_error: Cell<bool>,
}

impl MemBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `set` fail, as a full quota would.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.blobs.borrow().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl BlobStore for MemBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(StockError::PersistenceFailure(
                "Simulated write error".to_string(),
            ));
        }
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_reads_as_none() {
        let store = MemBlobStore::new();
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn set_replaces_previous_value() {
        let store = MemBlobStore::new();
        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
        assert_eq!(store.keys(), vec!["k".to_string()]);
    }

    #[test]
    fn simulated_error_leaves_value_untouched() {
        let store = MemBlobStore::new();
        store.set("k", "kept").unwrap();
        store.set_simulate_write_error(true);
        assert!(store.set("k", "lost").is_err());
        assert_eq!(store.get("k").unwrap().as_deref(), Some("kept"));
    }
}
