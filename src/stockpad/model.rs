//! Core record types.
//!
//! Field names serialize in camelCase so that the persisted JSON matches the
//! layout stored under `inventoryItems`, `salesData` and `transactions`.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of an [`Item`]. Issued by [`crate::inventory::IdAllocator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

/// Identifier of a [`Sale`], shared with the [`Transaction`] that mirrors it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ItemId)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleHistoryEntry {
    pub date: DateTime<Utc>,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub price: f64,
    pub is_perishable: bool,
    /// Set if and only if `is_perishable`.
    pub expiration_date: Option<NaiveDate>,
    #[serde(default)]
    pub sales_history: Vec<SaleHistoryEntry>,
}

impl Item {
    /// Builds an item, dropping the expiration date unless the item is perishable.
    pub fn new(
        id: ItemId,
        name: String,
        category: String,
        stock: u32,
        price: f64,
        expiration_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            name,
            category,
            stock,
            price,
            is_perishable: expiration_date.is_some(),
            expiration_date,
            sales_history: Vec::new(),
        }
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock < crate::views::LOW_STOCK_THRESHOLD
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: SaleId,
    /// Weak reference: the item may have been deleted since.
    pub item_id: ItemId,
    pub item_name: String,
    pub quantity: u32,
    pub total: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Sale,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Sale => write!(f, "Sale"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: SaleId,
    /// Local calendar date at the time of the sale, e.g. `3/14/2025`.
    pub date: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub item: String,
    pub quantity: u32,
    pub total: f64,
}

impl Transaction {
    pub fn mirror(sale: &Sale) -> Self {
        Self {
            id: sale.id,
            date: human_date(sale.timestamp),
            kind: TransactionKind::Sale,
            item: sale.item_name.clone(),
            quantity: sale.quantity,
            total: sale.total,
        }
    }
}

fn human_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%-m/%-d/%Y").to_string()
}
