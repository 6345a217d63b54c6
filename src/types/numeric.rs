use crate::types::errors::FieldError;
use crate::types::Quantity;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Reads a monetary amount that may arrive as a JSON string (`"12.50"`) or a JSON number.
pub fn parse_decimal(value: &Value) -> Result<Decimal, FieldError> {
    match value {
        Value::String(text) => decimal_from_str(text),
        Value::Number(number) => decimal_from_str(&number.to_string()),
        Value::Null => Err(FieldError::Missing),
        other => Err(FieldError::NotNumeric(other.to_string()))
    }
}

/// Same as [`parse_decimal`] but rejects negative amounts.
pub fn parse_price(value: &Value) -> Result<Decimal, FieldError> {
    let price = parse_decimal(value)?;

    if price.is_sign_negative() && !price.is_zero() {
        return Err(FieldError::Negative(price.to_string()));
    }

    Ok(price)
}

/// Reads a non-negative whole quantity from a JSON string (`"2"`) or a JSON number.
pub fn parse_quantity(value: &Value) -> Result<Quantity, FieldError> {
    match value {
        Value::String(text) => quantity_from_str(text),
        Value::Number(number) => {
            if let Some(quantity) = number.as_u64() {
                Ok(quantity)
            } else if number.as_i64().is_some() {
                Err(FieldError::Negative(number.to_string()))
            } else {
                Err(FieldError::NotWhole(number.to_string()))
            }
        }
        Value::Null => Err(FieldError::Missing),
        other => Err(FieldError::NotNumeric(other.to_string()))
    }
}

fn decimal_from_str(text: &str) -> Result<Decimal, FieldError> {
    let text = text.trim();

    if text.is_empty() {
        return Err(FieldError::NotNumeric("an empty string".to_string()));
    }

    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| FieldError::NotNumeric(format!("'{text}'")))
}

fn quantity_from_str(text: &str) -> Result<Quantity, FieldError> {
    let text = text.trim();

    if text.is_empty() {
        return Err(FieldError::NotNumeric("an empty string".to_string()));
    }

    if let Ok(quantity) = text.parse::<Quantity>() {
        return Ok(quantity);
    }

    match text.parse::<i64>() {
        Ok(_) => Err(FieldError::Negative(text.to_string())),
        Err(_) if Decimal::from_str(text).is_ok() => Err(FieldError::NotWhole(text.to_string())),
        Err(_) => Err(FieldError::NotNumeric(format!("'{text}'")))
    }
}
