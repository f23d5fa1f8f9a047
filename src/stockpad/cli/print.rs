use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use stockpad::api::{CmdMessage, MessageLevel};
use stockpad::config::StockConfig;
use stockpad::views::{
    Alert, Dashboard, ItemRow, PerishableRow, PerishableStatus, SaleRow, TransactionRow,
};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 32;
const COLUMN_GAP: &str = "  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn render_dashboard(dash: &Dashboard, alerts: &[Alert], config: &StockConfig) -> String {
    let mut out = String::new();
    let low = dash.low_stock.to_string();
    let low = if dash.low_stock > 0 {
        low.yellow().to_string()
    } else {
        low
    };

    out.push_str(&format!("{:<16}{}\n", "Total items", dash.total_items));
    out.push_str(&format!("{:<16}{}\n", "Low stock", low));
    out.push_str(&format!(
        "{:<16}{}\n",
        "Today's sales",
        config.money(dash.today_sales)
    ));
    out.push_str(&format!("{:<16}{} units\n", "Forecast", dash.forecast));

    if !alerts.is_empty() {
        out.push('\n');
        out.push_str(&render_alerts(alerts));
    }
    out
}

pub(super) fn render_alerts(alerts: &[Alert]) -> String {
    if alerts.is_empty() {
        return "No alerts.\n".to_string();
    }
    alerts
        .iter()
        .map(|a| format!("{} {} ({} left)\n", "Low stock:".yellow(), a.name, a.stock))
        .collect()
}

pub(super) fn render_items(rows: &[ItemRow], config: &StockConfig) -> String {
    if rows.is_empty() {
        return "No items found.\n".to_string();
    }
    let body = rows
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                truncate_to_width(&r.name, NAME_WIDTH),
                r.category.clone(),
                r.stock.to_string(),
                config.money(r.price),
            ]
        })
        .collect();
    let highlight: Vec<bool> = rows
        .iter()
        .map(|r| config.highlight_low_stock && r.low_stock)
        .collect();

    render_table(&["ID", "Name", "Category", "Stock", "Price"], body)
        .into_iter()
        .enumerate()
        .map(|(i, line)| match i.checked_sub(1) {
            Some(row) if highlight[row] => format!("{}\n", line.red()),
            Some(_) => format!("{}\n", line),
            None => format!("{}\n", line.bold()),
        })
        .collect()
}

pub(super) fn render_sales(rows: &[SaleRow], config: &StockConfig) -> String {
    if rows.is_empty() {
        return "No sales recorded.\n".to_string();
    }
    let body = rows
        .iter()
        .map(|r| {
            vec![
                truncate_to_width(&r.item_name, NAME_WIDTH),
                r.quantity.to_string(),
                config.money(r.total),
                r.timestamp.with_timezone(&Local).format("%H:%M:%S").to_string(),
                format_time_ago(r.timestamp),
            ]
        })
        .collect();
    with_bold_header(render_table(
        &["Item", "Qty", "Total", "Time", "When"],
        body,
    ))
}

pub(super) fn render_transactions(rows: &[TransactionRow], config: &StockConfig) -> String {
    if rows.is_empty() {
        return "No transactions.\n".to_string();
    }
    let body = rows
        .iter()
        .map(|r| {
            vec![
                r.date.clone(),
                r.kind.to_string(),
                truncate_to_width(&r.item, NAME_WIDTH),
                r.quantity.to_string(),
                config.money(r.total),
            ]
        })
        .collect();
    with_bold_header(render_table(
        &["Date", "Type", "Item", "Qty", "Total"],
        body,
    ))
}

pub(super) fn render_perishables(rows: &[PerishableRow]) -> String {
    if rows.is_empty() {
        return "No perishable items.\n".to_string();
    }
    let body = rows
        .iter()
        .map(|r| {
            vec![
                truncate_to_width(&r.name, NAME_WIDTH),
                r.stock.to_string(),
                r.expiration_date.to_string(),
                r.days_remaining.to_string(),
                r.status.to_string(),
            ]
        })
        .collect();

    render_table(&["Item", "Stock", "Expires", "Days", "Status"], body)
        .into_iter()
        .enumerate()
        .map(|(i, line)| match i.checked_sub(1).map(|row| rows[row].status) {
            Some(PerishableStatus::Expired) => format!("{}\n", line.red()),
            Some(PerishableStatus::ExpiringSoon) => format!("{}\n", line.yellow()),
            Some(PerishableStatus::Good) => format!("{}\n", line),
            None => format!("{}\n", line.bold()),
        })
        .collect()
}

fn with_bold_header(lines: Vec<String>) -> String {
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("{}\n", line.bold())
            } else {
                format!("{}\n", line)
            }
        })
        .collect()
}

/// Lays out a header plus rows in width-aligned columns. Colors are applied
/// by the caller to whole lines so they never skew the alignment.
fn render_table(headers: &[&str], rows: Vec<Vec<String>>) -> Vec<String> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    std::iter::once(header)
        .chain(rows)
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, width)| pad_to_width(cell, *width))
                .collect::<Vec<_>>()
                .join(COLUMN_GAP)
                .trim_end()
                .to_string()
        })
        .collect()
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockpad::model::{ItemId, SaleId, TransactionKind};

    fn plain() -> StockConfig {
        StockConfig {
            currency: "$".into(),
            highlight_low_stock: false,
        }
    }

    #[test]
    fn table_columns_line_up() {
        let lines = render_table(
            &["A", "B"],
            vec![
                vec!["long value".into(), "x".into()],
                vec!["s".into(), "y".into()],
            ],
        );
        assert_eq!(lines[0], "A           B");
        assert_eq!(lines[1], "long value  x");
        assert_eq!(lines[2], "s           y");
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(pad_to_width("日本", 6), "日本  ");
    }

    #[test]
    fn truncation_marks_the_cut() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn items_table_shows_money_with_currency() {
        let rows = vec![ItemRow {
            id: ItemId(1),
            name: "Soap".into(),
            category: "Household".into(),
            stock: 4,
            price: 2.5,
            low_stock: true,
        }];
        let out = render_items(&rows, &plain());
        assert!(out.contains("Soap"));
        assert!(out.contains("$2.50"));
    }

    #[test]
    fn transactions_table_renders_kind() {
        let rows = vec![TransactionRow {
            id: SaleId(9),
            date: "1/2/2025".into(),
            kind: TransactionKind::Sale,
            item: "Soap".into(),
            quantity: 3,
            total: 7.5,
        }];
        let out = render_transactions(&rows, &plain());
        assert!(out.contains("1/2/2025"));
        assert!(out.contains("Sale"));
        assert!(out.contains("$7.50"));
    }

    #[test]
    fn empty_tables_say_so() {
        assert_eq!(render_items(&[], &plain()), "No items found.\n");
        assert_eq!(render_alerts(&[]), "No alerts.\n");
        assert_eq!(render_perishables(&[]), "No perishable items.\n");
    }
}
