use crate::error::{Result, StockError};
use crate::model::ItemId;
use chrono::NaiveDate;

fn present<'a>(field: &str, raw: &'a str) -> Result<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(StockError::invalid(field, "is required"));
    }
    Ok(trimmed)
}

pub fn required_text(field: &str, raw: &str) -> Result<String> {
    present(field, raw).map(str::to_string)
}

/// A whole number of units, zero allowed.
pub fn parse_count(field: &str, raw: &str) -> Result<u32> {
    present(field, raw)?.parse::<u32>().map_err(|_| {
        StockError::invalid(field, format!("'{}' is not a non-negative integer", raw.trim()))
    })
}

/// A whole number of units, at least one.
pub fn parse_positive_count(field: &str, raw: &str) -> Result<u32> {
    match parse_count(field, raw)? {
        0 => Err(StockError::invalid(field, "must be at least 1")),
        n => Ok(n),
    }
}

pub fn parse_price(field: &str, raw: &str) -> Result<f64> {
    let trimmed = present(field, raw)?;
    let price: f64 = trimmed
        .parse()
        .map_err(|_| StockError::invalid(field, format!("'{}' is not a number", trimmed)))?;
    if !price.is_finite() || price < 0.0 {
        return Err(StockError::invalid(
            field,
            format!("'{}' is not a non-negative amount", trimmed),
        ));
    }
    Ok(price)
}

pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate> {
    let trimmed = present(field, raw)?;
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        StockError::invalid(field, format!("'{}' is not a YYYY-MM-DD date", trimmed))
    })
}

pub fn parse_item_id(field: &str, raw: &str) -> Result<ItemId> {
    present(field, raw)?
        .parse()
        .map_err(|_| StockError::invalid(field, format!("'{}' is not an item id", raw.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_invalid<T: std::fmt::Debug>(r: Result<T>) -> bool {
        matches!(r, Err(StockError::InvalidInput(_)))
    }

    #[test]
    fn counts_reject_blank_negative_and_fractional() {
        assert_eq!(parse_count("stock", " 12 ").unwrap(), 12);
        assert_eq!(parse_count("stock", "0").unwrap(), 0);
        assert!(is_invalid(parse_count("stock", "")));
        assert!(is_invalid(parse_count("stock", "-1")));
        assert!(is_invalid(parse_count("stock", "2.5")));
        assert!(is_invalid(parse_count("stock", "ten")));
    }

    #[test]
    fn positive_count_rejects_zero() {
        assert_eq!(parse_positive_count("quantity", "3").unwrap(), 3);
        assert!(is_invalid(parse_positive_count("quantity", "0")));
    }

    #[test]
    fn prices_must_be_finite_and_non_negative() {
        assert_eq!(parse_price("price", "4.75").unwrap(), 4.75);
        assert_eq!(parse_price("price", "0").unwrap(), 0.0);
        assert!(is_invalid(parse_price("price", "-0.5")));
        assert!(is_invalid(parse_price("price", "NaN")));
        assert!(is_invalid(parse_price("price", "inf")));
        assert!(is_invalid(parse_price("price", "")));
    }

    #[test]
    fn dates_use_iso_format() {
        assert_eq!(
            parse_date("expiration date", "2025-02-28").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
        assert!(is_invalid(parse_date("expiration date", "2025-02-30")));
        assert!(is_invalid(parse_date("expiration date", "28/02/2025")));
    }

    #[test]
    fn error_names_the_field() {
        let err = parse_count("stock", "x").unwrap_err();
        assert!(err.to_string().contains("stock"));
    }
}
