use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::types::Quantity;

/// One shopping trip after validation.
///
/// Every field here is guaranteed present and well-typed; anything missing or
/// non-numeric in the source document was rejected when the dataset was built.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// Name of the store the trip happened at.
    pub store_name: String,
    /// Wall-clock time of the trip in the shopper's local time.
    pub timestamp: NaiveDateTime,
    /// Basket total after discounts.
    pub basket_value_net: Decimal,
    /// Total savings applied to the basket.
    pub overall_basket_savings: Decimal,
    /// Payment methods in the order they were listed. Only the first one counts.
    pub payment_methods: Vec<String>,
    /// Products in the basket, in receipt order.
    pub products: Vec<LineItem>
}

impl TransactionRecord {
    /// The payment method that paid for this trip, if the record lists any.
    pub fn primary_payment(&self) -> Option<&str> {
        self.payment_methods.first().map(String::as_str)
    }
}

/// A single product line on a receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub name: String,
    pub quantity: Quantity,
    pub unit_price: Decimal
}

impl LineItem {
    pub fn line_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }
}
