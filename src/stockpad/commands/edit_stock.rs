use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::ItemId;
use tracing::info;

use super::helpers::parse_count;

/// Overwrites an item's stock. No transaction is recorded for manual edits.
pub fn run(inventory: &mut Inventory, id: ItemId, new_stock: &str) -> Result<CmdResult> {
    let new_stock = parse_count("stock", new_stock)?;
    let item = inventory.item_mut(id)?;
    let previous = item.stock;
    item.stock = new_stock;
    let item = item.clone();
    info!(id = %id, previous, stock = new_stock, "stock edited");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Stock updated ({}): {} {} -> {}",
        id, item.name, previous, new_stock
    )));
    Ok(result.with_affected_items(vec![item]))
}
