//! The in-memory model: the three collections plus the id allocator.
//!
//! `Inventory` does no I/O. Loading and saving live in [`crate::store`], and
//! the session that ties both together is [`crate::api::StockApi`].

use crate::error::{Result, StockError};
use crate::model::{Item, ItemId, Sale, SaleId, Transaction};
use chrono::{DateTime, Utc};

/// Issues wall-clock-millisecond ids that never repeat, even when several are
/// requested within the same millisecond or the clock steps backwards.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    pub fn seeded(last: u64) -> Self {
        Self { last }
    }

    /// Fails once `last` is `u64::MAX`; the allocator is left unchanged.
    pub fn next(&mut self, now: DateTime<Utc>) -> Result<u64> {
        let floor = self
            .last
            .checked_add(1)
            .ok_or(StockError::IdsExhausted(self.last))?;
        let candidate = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = candidate.max(floor);
        self.last = id;
        Ok(id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Inventory {
    pub(crate) items: Vec<Item>,
    pub(crate) sales: Vec<Sale>,
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) ids: IdAllocator,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles an inventory from loaded collections, seeding the allocator
    /// past every id already in use.
    pub fn from_parts(items: Vec<Item>, sales: Vec<Sale>, transactions: Vec<Transaction>) -> Self {
        let highest = items
            .iter()
            .map(|i| i.id.0)
            .chain(sales.iter().map(|s| s.id.0))
            .chain(transactions.iter().map(|t| t.id.0))
            .max()
            .unwrap_or(0);

        Self {
            items,
            sales,
            transactions,
            ids: IdAllocator::seeded(highest),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn item(&self, id: ItemId) -> Result<&Item> {
        self.items
            .iter()
            .find(|i| i.id == id)
            .ok_or(StockError::ItemNotFound(id))
    }

    pub(crate) fn item_mut(&mut self, id: ItemId) -> Result<&mut Item> {
        self.items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(StockError::ItemNotFound(id))
    }

    pub(crate) fn next_item_id(&mut self, now: DateTime<Utc>) -> Result<ItemId> {
        self.ids.next(now).map(ItemId)
    }

    pub(crate) fn next_sale_id(&mut self, now: DateTime<Utc>) -> Result<SaleId> {
        self.ids.next(now).map(SaleId)
    }
}
