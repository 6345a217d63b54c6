use serde::Deserialize;
use serde_json::Value;

use crate::models::errors::AnalysisError;
use crate::models::{LineItem, TransactionRecord};
use crate::types::{parse_decimal, parse_price, parse_quantity, parse_timestamp};

/// The exported account document as it appears on disk.
///
/// Only the two sections the report needs are modelled. Purchase records stay as
/// loose JSON values here so that a bad record surfaces as a record-level error
/// instead of failing the whole document parse.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    #[serde(rename = "Purchase")]
    pub purchases: Vec<Vec<Value>>,
    #[serde(rename = "Customer Profile And Contact Data")]
    pub profile: RawProfile
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawProfile {
    #[serde(rename = "Online Account")]
    pub online_account: RawOnlineAccount
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawOnlineAccount {
    #[serde(rename = "first name")]
    pub first_name: String
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecord {
    store_name: Option<String>,
    #[serde(rename = "timeStamp", alias = "timestamp")]
    time_stamp: Option<String>,
    basket_value_net: Option<Value>,
    overall_basket_savings: Option<Value>,
    payment_type: Option<Vec<RawPayment>>,
    #[serde(rename = "product", alias = "products")]
    products: Option<Vec<RawLineItem>>
}

#[derive(Debug, Deserialize)]
struct RawPayment {
    #[serde(rename = "type")]
    kind: Option<String>
}

#[derive(Debug, Deserialize)]
struct RawLineItem {
    name: Option<String>,
    quantity: Option<Value>,
    #[serde(alias = "unitPrice")]
    price: Option<Value>
}

impl RawDocument {
    /// Purchase records live in the first element of the `Purchase` array.
    pub fn into_records(self) -> (String, Vec<Value>) {
        let records = self.purchases.into_iter().next().unwrap_or_default();
        (self.profile.online_account.first_name, records)
    }
}

/// Validates one loose purchase record into a [`TransactionRecord`].
///
/// `index` is the record's position in the purchase array and is carried into
/// every error so a bad export can be traced back to its source.
pub fn validate_record(index: usize, value: Value) -> Result<TransactionRecord, AnalysisError> {
    let raw: RawRecord = serde_json::from_value(value)
        .map_err(|error| AnalysisError::unreadable(index, error))?;

    let store_name = raw.store_name
        .ok_or_else(|| AnalysisError::missing(index, "storeName"))?;

    let time_stamp = raw.time_stamp
        .ok_or_else(|| AnalysisError::missing(index, "timeStamp"))?;
    let timestamp = parse_timestamp(&time_stamp)
        .map_err(|error| AnalysisError::malformed(index, "timeStamp", error))?;

    let basket_value_net = raw.basket_value_net
        .ok_or_else(|| AnalysisError::missing(index, "basketValueNet"))
        .and_then(|value| parse_decimal(&value).map_err(|error| AnalysisError::malformed(index, "basketValueNet", error)))?;

    let overall_basket_savings = raw.overall_basket_savings
        .ok_or_else(|| AnalysisError::missing(index, "overallBasketSavings"))
        .and_then(|value| parse_decimal(&value).map_err(|error| AnalysisError::malformed(index, "overallBasketSavings", error)))?;

    let mut payments = raw.payment_type.unwrap_or_default().into_iter();
    let mut payment_methods = Vec::new();

    if let Some(primary) = payments.next() {
        let kind = primary.kind
            .ok_or_else(|| AnalysisError::missing(index, "paymentType[0].type"))?;
        payment_methods.push(kind);
    }

    //NOTE: Only the first entry is authoritative, untyped entries after it are dropped
    payment_methods.extend(payments.filter_map(|payment| payment.kind));

    let products = raw.products
        .ok_or_else(|| AnalysisError::missing(index, "product"))?
        .into_iter()
        .enumerate()
        .map(|(position, item)| validate_line_item(index, position, item))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TransactionRecord {
        store_name,
        timestamp,
        basket_value_net,
        overall_basket_savings,
        payment_methods,
        products
    })
}

fn validate_line_item(index: usize, position: usize, item: RawLineItem) -> Result<LineItem, AnalysisError> {
    let field = |name: &str| format!("product[{position}].{name}");

    let name = item.name
        .ok_or_else(|| AnalysisError::missing(index, field("name")))?;

    let quantity = item.quantity
        .ok_or_else(|| AnalysisError::missing(index, field("quantity")))
        .and_then(|value| parse_quantity(&value).map_err(|error| AnalysisError::malformed(index, field("quantity"), error)))?;

    let unit_price = item.price
        .ok_or_else(|| AnalysisError::missing(index, field("price")))
        .and_then(|value| parse_price(&value).map_err(|error| AnalysisError::malformed(index, field("price"), error)))?;

    Ok(LineItem {
        name,
        quantity,
        unit_price
    })
}
