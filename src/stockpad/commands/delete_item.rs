use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::inventory::Inventory;
use crate::model::ItemId;
use tracing::info;

/// Removes an item. Sales and transactions that reference it are left as
/// they are, so their `item_id` may point at nothing afterwards.
pub fn run(inventory: &mut Inventory, id: ItemId) -> Result<CmdResult> {
    let position = inventory
        .items
        .iter()
        .position(|i| i.id == id)
        .ok_or(StockError::ItemNotFound(id))?;
    let item = inventory.items.remove(position);
    info!(id = %id, name = %item.name, "item deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Item deleted ({}): {}",
        id, item.name
    )));
    Ok(result.with_affected_items(vec![item]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{record_sale, SaleForm};
    use crate::test_utils::inventory_with;
    use chrono::Utc;

    #[test]
    fn removes_the_item() {
        let (mut inv, id) = inventory_with("Lamp", 2, 15.0);
        let result = run(&mut inv, id).unwrap();
        assert!(inv.items().is_empty());
        assert_eq!(result.affected_items[0].name, "Lamp");
    }

    #[test]
    fn keeps_sales_and_transactions_that_reference_it() {
        let (mut inv, id) = inventory_with("Lamp", 2, 15.0);
        record_sale::run(&mut inv, &SaleForm::new(id, 1), Utc::now()).unwrap();
        let sales_before = inv.sales().to_vec();
        let transactions_before = inv.transactions().to_vec();

        run(&mut inv, id).unwrap();

        assert_eq!(inv.sales(), sales_before.as_slice());
        assert_eq!(inv.transactions(), transactions_before.as_slice());
        assert_eq!(inv.sales()[0].item_id, id);
        assert!(inv.item(id).is_err());
    }

    #[test]
    fn deleting_twice_is_not_found() {
        let (mut inv, id) = inventory_with("Lamp", 2, 15.0);
        run(&mut inv, id).unwrap();
        assert!(matches!(run(&mut inv, id), Err(StockError::ItemNotFound(_))));
    }
}
