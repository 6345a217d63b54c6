use rust_decimal::Decimal;
use serde::Serialize;

use crate::insights::{Insights, MonthCount};
use crate::types::{Quantity, TripCount};

/// One card in the year-in-review deck.
///
/// Cards carry only the numbers they display. Styling, copy and emoji belong to
/// the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "card", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Highlight {
    Welcome,
    TotalSpend {
        total_spent: Decimal,
        avg_basket: Decimal
    },
    TripCount {
        total_trips: TripCount
    },
    FavoriteStore {
        store: String,
        visits: TripCount
    },
    TopProduct {
        product: String,
        count: Quantity
    },
    SummerFlavor {
        product: String,
        count: Quantity
    },
    SeasonalSpike {
        product: String,
        month: &'static str,
        month_count: Quantity,
        monthly: Vec<MonthCount>
    },
    ChocolateIndex {
        count: Quantity
    },
    NightOwl {
        trips: TripCount
    },
    Savings {
        total_savings: Decimal
    },
    BiggestSplurge {
        biggest_shop: Decimal,
        unique_products: usize,
        favorite_payment: Option<String>
    },
    Finale {
        customer_name: String,
        total_trips: TripCount,
        total_products: Quantity,
        total_spent: Decimal,
        total_savings: Decimal
    }
}

/// Lays out the deck in display order, leaving out cards with nothing to show.
pub fn highlights(insights: &Insights) -> Vec<Highlight> {
    let mut deck = vec![
        Highlight::Welcome,
        Highlight::TotalSpend {
            total_spent: insights.total_spent,
            avg_basket: insights.avg_basket
        },
        Highlight::TripCount {
            total_trips: insights.total_trips
        },
        Highlight::FavoriteStore {
            store: insights.favorite_store.clone(),
            visits: insights.favorite_store_count
        },
        Highlight::TopProduct {
            product: insights.top_product.clone(),
            count: insights.top_product_count
        },
    ];

    if let (Some(product), Some(count)) = (&insights.summer_flavor, insights.summer_flavor_count) {
        deck.push(Highlight::SummerFlavor {
            product: product.clone(),
            count
        });
    }

    if let (Some(product), Some(month), Some(monthly)) = (&insights.spike_product, insights.spike_month, &insights.spike_data) {
        let month_count = monthly.iter()
            .find(|entry| entry.month == month)
            .map_or(0, |entry| entry.count);

        deck.push(Highlight::SeasonalSpike {
            product: product.clone(),
            month,
            month_count,
            monthly: monthly.clone()
        });
    }

    if insights.chocolate_count > 0 {
        deck.push(Highlight::ChocolateIndex {
            count: insights.chocolate_count
        });
    }

    if insights.night_owl_trips > 0 {
        deck.push(Highlight::NightOwl {
            trips: insights.night_owl_trips
        });
    }

    deck.push(Highlight::Savings {
        total_savings: insights.total_savings
    });

    deck.push(Highlight::BiggestSplurge {
        biggest_shop: insights.biggest_shop,
        unique_products: insights.unique_products,
        favorite_payment: insights.favorite_payment.as_deref().map(display_payment)
    });

    deck.push(Highlight::Finale {
        customer_name: insights.customer_name.clone(),
        total_trips: insights.total_trips,
        total_products: insights.total_products,
        total_spent: insights.total_spent,
        total_savings: insights.total_savings
    });

    deck
}

/// `MASTERCARD_DEBIT` reads as `MASTERCARD DEBIT` on a card.
fn display_payment(method: &str) -> String {
    method.replace('_', " ")
}
