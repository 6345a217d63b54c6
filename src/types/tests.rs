use super::{argmax, parse_decimal, parse_price, parse_quantity, parse_timestamp, FieldError, Tally};
use anyhow::Result;
use chrono::{Datelike, Timelike};
use rust_decimal::Decimal;
use serde_json::json;
use std::str::FromStr;

#[test]
fn test_argmax_keeps_the_first_key_among_equal_maxima() {
    let pairs = vec![("a", 1), ("b", 3), ("c", 3), ("d", 2)];

    assert_eq!(argmax(pairs), Some(("b", 3)));
    assert_eq!(argmax(Vec::<(&str, u32)>::new()), None);
}

#[test]
fn test_tally_accumulates_in_first_insertion_order() {
    let mut tally: Tally<String, u64> = Tally::new();
    tally.add("milk", 1);
    tally.add("bread", 2);
    tally.add("milk", 4);

    let keys: Vec<&String> = tally.iter().map(|(key, _)| key).collect();

    assert_eq!(keys, vec!["milk", "bread"]);
    assert_eq!(tally.get("milk"), Some(5));
    assert_eq!(tally.get("eggs"), None);
    assert_eq!(tally.len(), 2);
}

#[test]
fn test_tally_argmax_prefers_the_earliest_key_on_ties() {
    let mut tally: Tally<String, u64> = Tally::new();
    tally.add("Tesco Metro", 2);
    tally.add("Tesco Express", 2);

    assert_eq!(tally.argmax(), Some((&"Tesco Metro".to_string(), 2)));
}

#[test]
fn test_tally_try_add_keeps_total_when_combine_fails() {
    let mut tally: Tally<String, u8> = Tally::new();

    assert_eq!(tally.try_add("bread", 200, u8::checked_add), Some(()));
    assert_eq!(tally.try_add("bread", 50, u8::checked_add), Some(()));
    assert_eq!(tally.try_add("bread", 10, u8::checked_add), None);
    assert_eq!(tally.get("bread"), Some(250));
}

#[test]
fn test_tally_top_is_descending_and_stable() {
    let mut tally: Tally<String, u64> = Tally::new();

    for (name, quantity) in [("a", 1), ("b", 5), ("c", 2), ("d", 5), ("e", 2), ("f", 2), ("g", 9)] {
        tally.add(name, quantity);
    }

    let top = tally.top(5);
    let names: Vec<&str> = top.iter().map(|(name, _)| name.as_str()).collect();

    assert_eq!(names, vec!["g", "b", "d", "c", "e"]);
}

#[test]
fn test_tally_serializes_as_an_ordered_map() -> Result<()> {
    let mut tally: Tally<&'static str, usize> = Tally::new();
    tally.add(&"July", 2);
    tally.add(&"January", 1);

    assert_eq!(serde_json::to_string(&tally)?, r#"{"July":2,"January":1}"#);

    Ok(())
}

#[test]
fn test_decimal_parsing_accepts_strings_and_numbers() -> Result<()> {
    assert_eq!(parse_decimal(&json!("12.50"))?, Decimal::from_str("12.50")?);
    assert_eq!(parse_decimal(&json!(" 3.5 "))?, Decimal::from_str("3.5")?);
    assert_eq!(parse_decimal(&json!(40))?, Decimal::from(40));
    assert_eq!(parse_decimal(&json!(0.8))?, Decimal::from_str("0.8")?);

    Ok(())
}

#[test]
fn test_decimal_parsing_rejects_non_numeric_values() {
    assert!(matches!(parse_decimal(&json!("abc")), Err(FieldError::NotNumeric(_))));
    assert!(matches!(parse_decimal(&json!("")), Err(FieldError::NotNumeric(_))));
    assert!(matches!(parse_decimal(&json!(true)), Err(FieldError::NotNumeric(_))));
    assert_eq!(parse_decimal(&json!(null)), Err(FieldError::Missing));
}

#[test]
fn test_price_parsing_rejects_negative_amounts() {
    assert!(matches!(parse_price(&json!("-0.80")), Err(FieldError::Negative(_))));
    assert!(parse_price(&json!("0.00")).is_ok());
}

#[test]
fn test_quantity_parsing_requires_a_non_negative_whole_number() -> Result<()> {
    assert_eq!(parse_quantity(&json!("2"))?, 2);
    assert_eq!(parse_quantity(&json!(7))?, 7);
    assert!(matches!(parse_quantity(&json!("-1")), Err(FieldError::Negative(_))));
    assert!(matches!(parse_quantity(&json!(-3)), Err(FieldError::Negative(_))));
    assert!(matches!(parse_quantity(&json!("1.5")), Err(FieldError::NotWhole(_))));
    assert!(matches!(parse_quantity(&json!(2.5)), Err(FieldError::NotWhole(_))));
    assert!(matches!(parse_quantity(&json!("two")), Err(FieldError::NotNumeric(_))));

    Ok(())
}

#[test]
fn test_timestamp_parsing_supports_export_and_iso_formats() -> Result<()> {
    let export = parse_timestamp("2025-07-04 23:10:00")?;
    assert_eq!((export.month(), export.day(), export.hour()), (7, 4, 23));

    let iso = parse_timestamp("2025-01-02T09:00")?;
    assert_eq!((iso.month(), iso.hour(), iso.minute()), (1, 9, 0));

    let offset = parse_timestamp("2025-12-31T22:30:00+01:00")?;
    assert_eq!((offset.month(), offset.day(), offset.hour()), (12, 31, 22));

    assert!(matches!(parse_timestamp("yesterday"), Err(FieldError::Timestamp(_))));

    Ok(())
}
