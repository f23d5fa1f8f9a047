use crate::commands::{CmdMessage, CmdResult, ItemForm};
use crate::error::{Result, StockError};
use crate::inventory::Inventory;
use crate::model::Item;
use chrono::{DateTime, Utc};
use tracing::info;

use super::helpers::{parse_count, parse_date, parse_price, required_text};

pub fn run(inventory: &mut Inventory, form: &ItemForm, now: DateTime<Utc>) -> Result<CmdResult> {
    let name = required_text("name", &form.name)?;
    let category = form.category.trim().to_string();
    let stock = parse_count("stock", &form.stock)?;
    let price = parse_price("price", &form.price)?;
    let expiration_date = if form.is_perishable {
        let raw = form.expiration_date.as_deref().ok_or_else(|| {
            StockError::invalid("expiration date", "is required for perishable items")
        })?;
        Some(parse_date("expiration date", raw)?)
    } else {
        None
    };

    let id = inventory.next_item_id(now)?;
    let item = Item::new(id, name, category, stock, price, expiration_date);
    inventory.items.push(item.clone());
    info!(id = %item.id, name = %item.name, stock, "item added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Item added ({}): {}",
        item.id, item.name
    )));
    if item.is_low_stock() {
        result.add_message(CmdMessage::warning(format!(
            "Low stock: {} ({} left)",
            item.name, item.stock
        )));
    }
    Ok(result.with_affected_items(vec![item]))
}
