use crate::commands::{CmdMessage, CmdResult, SaleForm};
use crate::error::{Result, StockError};
use crate::inventory::Inventory;
use crate::model::{Sale, SaleHistoryEntry, Transaction};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::helpers::{parse_item_id, parse_positive_count};

/// Sells `quantity` units of an item: decrements stock and appends the sale,
/// its mirrored transaction and a sales-history entry on the item.
///
/// All checks run before the first write; on error nothing changes.
pub fn run(inventory: &mut Inventory, form: &SaleForm, now: DateTime<Utc>) -> Result<CmdResult> {
    let item_id = parse_item_id("item", &form.item_id)?;
    let quantity = parse_positive_count("quantity", &form.quantity)?;

    let item = inventory.item(item_id)?;
    if item.stock < quantity {
        debug!(id = %item_id, requested = quantity, available = item.stock, "sale refused");
        return Err(StockError::InsufficientStock {
            item: item.name.clone(),
            requested: quantity,
            available: item.stock,
        });
    }

    let sale_id = inventory.next_sale_id(now)?;
    let item = inventory.item_mut(item_id)?;
    item.stock -= quantity;
    item.sales_history.push(SaleHistoryEntry {
        date: now,
        quantity,
    });

    let sale = Sale {
        id: sale_id,
        item_id,
        item_name: item.name.clone(),
        quantity,
        total: f64::from(quantity) * item.price,
        timestamp: now,
    };
    let item = item.clone();

    inventory.transactions.push(Transaction::mirror(&sale));
    inventory.sales.push(sale.clone());
    info!(sale = %sale.id, item = %item_id, quantity, total = sale.total, "sale recorded");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Sold {} x {}",
        quantity, item.name
    )));
    if item.is_low_stock() {
        result.add_message(CmdMessage::warning(format!(
            "Low stock: {} ({} left)",
            item.name, item.stock
        )));
    }

    Ok(result
        .with_affected_items(vec![item])
        .with_recorded_sales(vec![sale]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemId, TransactionKind};
    use crate::test_utils::inventory_with;

    #[test]
    fn selling_entire_stock_empties_the_item() {
        let (mut inv, id) = inventory_with("Cheese", 5, 4.0);

        let result = run(&mut inv, &SaleForm::new(id, 5), Utc::now()).unwrap();

        assert_eq!(inv.item(id).unwrap().stock, 0);
        assert_eq!(inv.sales().len(), 1);
        assert_eq!(inv.transactions().len(), 1);
        assert_eq!(inv.sales()[0].total, 20.0);
        assert_eq!(inv.transactions()[0].total, 20.0);
        assert_eq!(result.recorded_sales.len(), 1);
    }

    #[test]
    fn sale_and_transaction_share_an_id() {
        let (mut inv, id) = inventory_with("Apples", 30, 0.5);

        run(&mut inv, &SaleForm::new(id, 4), Utc::now()).unwrap();

        let sale = &inv.sales()[0];
        let tx = &inv.transactions()[0];
        assert_eq!(sale.id, tx.id);
        assert_eq!(sale.item_id, id);
        assert_eq!(sale.item_name, "Apples");
        assert_eq!(tx.kind, TransactionKind::Sale);
        assert_eq!(tx.quantity, 4);
    }

    #[test]
    fn appends_to_item_sales_history() {
        let (mut inv, id) = inventory_with("Pears", 30, 0.5);
        let now = Utc::now();

        run(&mut inv, &SaleForm::new(id, 2), now).unwrap();
        run(&mut inv, &SaleForm::new(id, 3), now).unwrap();

        let history = &inv.item(id).unwrap().sales_history;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].quantity, 2);
        assert_eq!(history[1].quantity, 3);
        assert_eq!(history[1].date, now);
    }

    #[test]
    fn overselling_changes_nothing() {
        let (mut inv, id) = inventory_with("Cheese", 5, 4.0);
        let items_before = inv.items().to_vec();

        let err = run(&mut inv, &SaleForm::new(id, 6), Utc::now()).unwrap_err();

        assert!(matches!(
            err,
            StockError::InsufficientStock {
                requested: 6,
                available: 5,
                ..
            }
        ));
        assert_eq!(inv.items(), items_before.as_slice());
        assert!(inv.sales().is_empty());
        assert!(inv.transactions().is_empty());
    }

    #[test]
    fn unknown_item_is_not_found() {
        let (mut inv, _) = inventory_with("Cheese", 5, 4.0);
        let err = run(&mut inv, &SaleForm::new(ItemId(1), 1), Utc::now()).unwrap_err();
        assert!(matches!(err, StockError::ItemNotFound(ItemId(1))));
    }

    #[test]
    fn zero_or_garbage_quantity_is_invalid() {
        let (mut inv, id) = inventory_with("Cheese", 5, 4.0);
        for qty in ["0", "-2", "two", ""] {
            let err = run(&mut inv, &SaleForm::new(id, qty), Utc::now()).unwrap_err();
            assert!(matches!(err, StockError::InvalidInput(_)), "{}", qty);
        }
        assert!(inv.sales().is_empty());
    }

    #[test]
    fn dropping_below_threshold_warns() {
        let (mut inv, id) = inventory_with("Cheese", 12, 4.0);
        let result = run(&mut inv, &SaleForm::new(id, 3), Utc::now()).unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.starts_with("Low stock")));
    }
}
