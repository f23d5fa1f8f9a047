//! # API Facade
//!
//! [`StockApi`] is the session object every UI talks to. It owns the blob
//! store and the in-memory [`Inventory`], and has an explicit lifecycle:
//!
//! - [`StockApi::open`] loads the three collections (init)
//! - mutations dispatch to `commands/*.rs`, then write everything back
//! - [`StockApi::overview`] recomputes the projections (refresh)
//! - [`StockApi::close`] flushes and hands the store back (teardown)
//!
//! ## Persistence failures
//!
//! A mutation that succeeds in memory but cannot be written returns
//! `StockError::PersistenceFailure`. The in-memory change is kept: for the rest
//! of the session the model is the source of truth, only durability was lost.
//!
//! ## Generic Over BlobStore
//!
//! - Production: `StockApi<FsBlobStore>`
//! - Testing or embedding: `StockApi<MemBlobStore>`

use crate::commands;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::ItemId;
use crate::store::{self, BlobStore};
use crate::views::{self, Overview};
use chrono::Utc;
use tracing::warn;

pub struct StockApi<B: BlobStore> {
    store: B,
    inventory: Inventory,
}

impl<B: BlobStore> StockApi<B> {
    /// Starts a session. Never fails: unreadable collections start empty.
    pub fn open(store: B) -> Self {
        let inventory = store::load(&store);
        Self { store, inventory }
    }

    /// Ends the session, writing the current state one last time.
    pub fn close(self) -> Result<B> {
        store::save(&self.store, &self.inventory)?;
        Ok(self.store)
    }

    /// Discards in-memory state and reads the store again.
    pub fn reload(&mut self) {
        self.inventory = store::load(&self.store);
    }

    pub fn add_item(&mut self, form: &ItemForm) -> Result<CmdResult> {
        let result = commands::add_item::run(&mut self.inventory, form, Utc::now())?;
        self.persist()?;
        Ok(result)
    }

    pub fn record_sale(&mut self, form: &SaleForm) -> Result<CmdResult> {
        let result = commands::record_sale::run(&mut self.inventory, form, Utc::now())?;
        self.persist()?;
        Ok(result)
    }

    pub fn edit_stock(&mut self, id: ItemId, new_stock: &str) -> Result<CmdResult> {
        let result = commands::edit_stock::run(&mut self.inventory, id, new_stock)?;
        self.persist()?;
        Ok(result)
    }

    /// Deletes an item. Asking the user for confirmation is the caller's job.
    pub fn delete_item(&mut self, id: ItemId) -> Result<CmdResult> {
        let result = commands::delete_item::run(&mut self.inventory, id)?;
        self.persist()?;
        Ok(result)
    }

    pub fn overview(&self) -> Overview {
        views::overview(&self.inventory, Utc::now())
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn store(&self) -> &B {
        &self.store
    }

    fn persist(&self) -> Result<()> {
        store::save(&self.store, &self.inventory).inspect_err(|e| {
            warn!(error = %e, "changes kept in memory but not saved");
        })
    }
}

pub use crate::commands::{CmdMessage, CmdResult, ItemForm, MessageLevel, SaleForm};
