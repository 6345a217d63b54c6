use rust_decimal::Decimal;

use crate::insights::ProductCount;
use crate::models::{AnalysisError, LineItem};
use crate::types::{Quantity, Tally};

const CHOCOLATE_MARKERS: [&str; 2] = ["chocolate", "choc "];

/// Running per-product totals across every basket.
#[derive(Debug, Default)]
pub struct ProductStats {
    pub total_products: Quantity,
    pub chocolate_count: Quantity,
    pub frequency: Tally<String, Quantity>,
    pub spending: Tally<String, Decimal>
}

impl ProductStats {
    pub fn record(&mut self, item: &LineItem) -> Result<(), AnalysisError> {
        self.total_products = self.total_products.checked_add(item.quantity)
            .ok_or_else(|| AnalysisError::overflow("totalProducts"))?;

        self.frequency.add(item.name.as_str(), item.quantity);

        let line_total = item.line_total()
            .ok_or_else(|| AnalysisError::overflow("productSpending"))?;
        self.spending.try_add(item.name.as_str(), line_total, Decimal::checked_add)
            .ok_or_else(|| AnalysisError::overflow("productSpending"))?;

        if is_chocolate(&item.name) {
            self.chocolate_count += item.quantity;
        }

        Ok(())
    }

    pub fn unique_products(&self) -> usize {
        self.frequency.len()
    }

    pub fn top(&self, count: usize) -> Vec<ProductCount> {
        self.frequency.top(count)
            .into_iter()
            .map(|(name, quantity)| ProductCount { name, quantity })
            .collect()
    }
}

/// Case-insensitive substring match. The space in `"choc "` is part of the marker.
pub fn is_chocolate(name: &str) -> bool {
    let name = name.to_lowercase();
    CHOCOLATE_MARKERS.iter().any(|marker| name.contains(marker))
}
