//! # Command Layer
//!
//! Business logic for each mutation, one module per operation. Commands work
//! on an [`Inventory`](crate::inventory::Inventory) directly and perform no
//! I/O: persisting afterwards is the session's job (see [`crate::api`]).
//!
//! Inputs arrive as raw form values ([`ItemForm`], [`SaleForm`]) and are
//! validated before anything is touched, so a failed command leaves the
//! inventory exactly as it was.

use crate::model::{Item, Sale};

pub mod add_item;
pub mod delete_item;
pub mod edit_stock;
pub mod helpers;
pub mod record_sale;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<Item>,
    pub recorded_sales: Vec<Sale>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<Item>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_recorded_sales(mut self, sales: Vec<Sale>) -> Self {
        self.recorded_sales = sales;
        self
    }
}

/// Raw field values of the add-item form.
#[derive(Debug, Clone, Default)]
pub struct ItemForm {
    pub name: String,
    pub category: String,
    pub stock: String,
    pub price: String,
    pub is_perishable: bool,
    /// `YYYY-MM-DD`; only read when `is_perishable`.
    pub expiration_date: Option<String>,
}

impl ItemForm {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        stock: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            stock: stock.into(),
            price: price.into(),
            is_perishable: false,
            expiration_date: None,
        }
    }

    pub fn perishable(mut self, expiration_date: impl Into<String>) -> Self {
        self.is_perishable = true;
        self.expiration_date = Some(expiration_date.into());
        self
    }
}

/// Raw field values of the record-sale form.
#[derive(Debug, Clone, Default)]
pub struct SaleForm {
    pub item_id: String,
    pub quantity: String,
}

impl SaleForm {
    pub fn new(item_id: impl ToString, quantity: impl ToString) -> Self {
        Self {
            item_id: item_id.to_string(),
            quantity: quantity.to_string(),
        }
    }
}
