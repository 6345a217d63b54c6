//! The report handed to whatever renders the year-in-review cards.

mod highlights;

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::types::{Quantity, Tally, TripCount};

pub use highlights::{highlights, Highlight};

/// Everything the analysis derives from one customer's year of purchases.
///
/// Built once per run and never modified. Optional fields are `None` when the
/// underlying data has nothing to say (no summer trips, no seasonal spike, no
/// payment information) and the matching card is expected to be skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub customer_name: String,

    pub total_spent: Decimal,
    pub total_trips: TripCount,
    pub total_savings: Decimal,
    pub avg_basket: Decimal,
    pub biggest_shop: Decimal,

    pub favorite_store: String,
    pub favorite_store_count: TripCount,
    pub favorite_payment: Option<String>,

    pub total_products: Quantity,
    pub unique_products: usize,
    pub product_frequency: Tally<String, Quantity>,
    pub product_spending: Tally<String, Decimal>,
    pub top_product: String,
    pub top_product_count: Quantity,
    pub top5_products: Vec<ProductCount>,
    pub chocolate_count: Quantity,

    pub month_frequency: Tally<&'static str, TripCount>,
    pub day_of_week_frequency: [TripCount; 7],
    pub busiest_month: &'static str,
    pub favorite_day: &'static str,
    pub night_owl_trips: TripCount,
    pub weekend_trips: TripCount,
    pub weekday_trips: TripCount,
    pub shopping_personality: ShoppingPersonality,

    pub summer_flavor: Option<String>,
    pub summer_flavor_count: Option<Quantity>,

    pub spike_product: Option<String>,
    pub spike_month: Option<&'static str>,
    pub spike_data: Option<Vec<MonthCount>>
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCount {
    pub name: String,
    pub quantity: Quantity
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    pub month: &'static str,
    pub count: Quantity
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShoppingPersonality {
    #[serde(rename = "Weekend Warrior")]
    WeekendWarrior,
    #[serde(rename = "Weekday Regular")]
    WeekdayRegular
}

impl ShoppingPersonality {
    /// Weekend trips must strictly outnumber weekday trips; a tie is a weekday regular.
    pub fn classify(weekend_trips: TripCount, weekday_trips: TripCount) -> Self {
        if weekend_trips > weekday_trips {
            ShoppingPersonality::WeekendWarrior
        } else {
            ShoppingPersonality::WeekdayRegular
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShoppingPersonality::WeekendWarrior => "Weekend Warrior",
            ShoppingPersonality::WeekdayRegular => "Weekday Regular"
        }
    }
}

impl fmt::Display for ShoppingPersonality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
