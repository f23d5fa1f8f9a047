//! # View Projections
//!
//! Pure functions from an [`Inventory`] snapshot to the structured records a
//! UI renders: dashboard numbers, table rows, alerts. Nothing here mutates or
//! formats; the CLI (or any other front end) decides how rows look.
//!
//! Every function that depends on "today" or "now" takes the instant as an
//! argument, so projections are deterministic under test.

use crate::inventory::Inventory;
use crate::model::{Item, ItemId, Sale, SaleId, TransactionKind};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use std::fmt;

/// Items with fewer units than this are "low stock".
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Number of most recent sale events averaged by the demand forecast.
pub const FORECAST_WINDOW: usize = 7;

/// Transactions table shows at most this many entries.
pub const TRANSACTION_LIMIT: usize = 20;

pub const EXPIRING_SOON_DAYS: i64 = 3;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub total_items: usize,
    pub low_stock: usize,
    pub today_sales: f64,
    pub forecast: u32,
}

pub fn dashboard(inventory: &Inventory, now: DateTime<Utc>) -> Dashboard {
    Dashboard {
        total_items: inventory.items().len(),
        low_stock: inventory.items().iter().filter(|i| i.is_low_stock()).count(),
        today_sales: today_sales(inventory.sales(), now),
        forecast: demand_forecast(inventory.sales()),
    }
}

/// Sum of totals for sales on the same local calendar day as `now`.
pub fn today_sales(sales: &[Sale], now: DateTime<Utc>) -> f64 {
    let today = now.with_timezone(&Local).date_naive();
    sales
        .iter()
        .filter(|s| s.timestamp.with_timezone(&Local).date_naive() == today)
        .map(|s| s.total)
        .sum()
}

/// Trailing average of quantity over the last [`FORECAST_WINDOW`] sale events
/// (not calendar days), rounded to whole units. Zero until enough sales exist.
pub fn demand_forecast(sales: &[Sale]) -> u32 {
    if sales.len() < FORECAST_WINDOW {
        return 0;
    }
    let window = &sales[sales.len() - FORECAST_WINDOW..];
    let total: u64 = window.iter().map(|s| u64::from(s.quantity)).sum();
    (total as f64 / FORECAST_WINDOW as f64).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PerishableStatus {
    Expired,
    ExpiringSoon,
    Good,
}

impl PerishableStatus {
    pub fn from_days_remaining(days: i64) -> Self {
        if days <= 0 {
            PerishableStatus::Expired
        } else if days <= EXPIRING_SOON_DAYS {
            PerishableStatus::ExpiringSoon
        } else {
            PerishableStatus::Good
        }
    }
}

impl fmt::Display for PerishableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PerishableStatus::Expired => "Expired",
            PerishableStatus::ExpiringSoon => "Expiring Soon",
            PerishableStatus::Good => "Good",
        };
        write!(f, "{}", label)
    }
}

/// Whole days until the expiration date, rounded up. The date counts from
/// midnight UTC, so an item expiring today already reads 0 or less.
pub fn days_remaining(expiration: NaiveDate, now: DateTime<Utc>) -> i64 {
    let expires_at = expiration.and_time(NaiveTime::MIN).and_utc();
    let millis = (expires_at - now).num_milliseconds();
    (millis as f64 / MILLIS_PER_DAY).ceil() as i64
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerishableRow {
    pub id: ItemId,
    pub name: String,
    pub stock: u32,
    pub expiration_date: NaiveDate,
    pub days_remaining: i64,
    pub status: PerishableStatus,
}

pub fn perishables(inventory: &Inventory, now: DateTime<Utc>) -> Vec<PerishableRow> {
    inventory
        .items()
        .iter()
        .filter(|i| i.is_perishable)
        .filter_map(|i| {
            let expiration_date = i.expiration_date?;
            let days = days_remaining(expiration_date, now);
            Some(PerishableRow {
                id: i.id,
                name: i.name.clone(),
                stock: i.stock,
                expiration_date,
                days_remaining: days,
                status: PerishableStatus::from_days_remaining(days),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub item_id: ItemId,
    pub name: String,
    pub stock: u32,
}

pub fn alerts(inventory: &Inventory) -> Vec<Alert> {
    inventory
        .items()
        .iter()
        .filter(|i| i.is_low_stock())
        .map(|i| Alert {
            item_id: i.id,
            name: i.name.clone(),
            stock: i.stock,
        })
        .collect()
}

/// An entry of the item picker used by the sale form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemOption {
    pub id: ItemId,
    pub label: String,
}

pub fn item_options(inventory: &Inventory) -> Vec<ItemOption> {
    inventory
        .items()
        .iter()
        .map(|i| ItemOption {
            id: i.id,
            label: format!("{} ({})", i.name, i.stock),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRow {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub price: f64,
    pub low_stock: bool,
}

impl From<&Item> for ItemRow {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            category: item.category.clone(),
            stock: item.stock,
            price: item.price,
            low_stock: item.is_low_stock(),
        }
    }
}

pub fn item_rows(inventory: &Inventory) -> Vec<ItemRow> {
    inventory.items().iter().map(ItemRow::from).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleRow {
    pub id: SaleId,
    pub item_name: String,
    pub quantity: u32,
    pub total: f64,
    pub timestamp: DateTime<Utc>,
}

pub fn sale_rows(inventory: &Inventory) -> Vec<SaleRow> {
    inventory
        .sales()
        .iter()
        .map(|s| SaleRow {
            id: s.id,
            item_name: s.item_name.clone(),
            quantity: s.quantity,
            total: s.total,
            timestamp: s.timestamp,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    pub id: SaleId,
    pub date: String,
    pub kind: TransactionKind,
    pub item: String,
    pub quantity: u32,
    pub total: f64,
}

/// The most recent [`TRANSACTION_LIMIT`] transactions, newest first.
pub fn transaction_rows(inventory: &Inventory) -> Vec<TransactionRow> {
    inventory
        .transactions()
        .iter()
        .rev()
        .take(TRANSACTION_LIMIT)
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date.clone(),
            kind: t.kind,
            item: t.item.clone(),
            quantity: t.quantity,
            total: t.total,
        })
        .collect()
}

/// Every projection at once: what a UI redraws after each mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub dashboard: Dashboard,
    pub item_options: Vec<ItemOption>,
    pub items: Vec<ItemRow>,
    pub sales: Vec<SaleRow>,
    pub transactions: Vec<TransactionRow>,
    pub perishables: Vec<PerishableRow>,
    pub alerts: Vec<Alert>,
}

pub fn overview(inventory: &Inventory, now: DateTime<Utc>) -> Overview {
    Overview {
        dashboard: dashboard(inventory, now),
        item_options: item_options(inventory),
        items: item_rows(inventory),
        sales: sale_rows(inventory),
        transactions: transaction_rows(inventory),
        perishables: perishables(inventory, now),
        alerts: alerts(inventory),
    }
}
