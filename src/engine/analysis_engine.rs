use rust_decimal::Decimal;
use tracing::debug;

use crate::engine::calendar::CalendarStats;
use crate::engine::products::ProductStats;
use crate::engine::spike::{SpikeDetector, SPIKE_THRESHOLD};
use crate::insights::{Insights, ShoppingPersonality};
use crate::models::{AnalysisError, TransactionDataset};
use crate::types::{Quantity, Tally, TripCount};

const TOP_PRODUCTS: usize = 5;

/// Stateless calculator that turns a year of purchases into [`Insights`].
///
/// Analysis is a single pass of independent reductions over the records. It does
/// no I/O and never mutates its input, so the same dataset always produces the
/// same report.
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    spike_threshold: Quantity
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self {
            spike_threshold: SPIKE_THRESHOLD
        }
    }

    /// Overrides the minimum yearly quantity a product needs before it can be a spike.
    pub fn with_spike_threshold(mut self, threshold: Quantity) -> Self {
        self.spike_threshold = threshold;
        self
    }

    /// Runs every reduction over `dataset` and assembles the report.
    ///
    /// # Errors
    /// Returns `AnalysisError` if:
    /// - The dataset has no records.
    /// - A running total overflows.
    pub fn analyze(&self, dataset: &TransactionDataset) -> Result<Insights, AnalysisError> {
        if dataset.is_empty() {
            return Err(AnalysisError::EmptyDataset);
        }

        let mut total_spent = Decimal::ZERO;
        let mut total_savings = Decimal::ZERO;
        let mut stores: Tally<String, TripCount> = Tally::new();
        let mut payments: Tally<String, TripCount> = Tally::new();
        let mut products = ProductStats::default();
        let mut calendar = CalendarStats::default();
        let mut spikes = SpikeDetector::new(self.spike_threshold);

        for record in &dataset.records {
            total_spent = total_spent.checked_add(record.basket_value_net)
                .ok_or_else(|| AnalysisError::overflow("totalSpent"))?;
            total_savings = total_savings.checked_add(record.overall_basket_savings)
                .ok_or_else(|| AnalysisError::overflow("totalSavings"))?;

            stores.add(record.store_name.as_str(), 1);

            if let Some(method) = record.primary_payment() {
                payments.add(method, 1);
            }

            for item in &record.products {
                products.record(item)?;
                spikes.record(&record.timestamp, item);
            }

            calendar.record(record);
        }

        let total_trips = dataset.len();
        let biggest_shop = dataset.records.iter()
            .map(|record| record.basket_value_net)
            .max()
            .ok_or(AnalysisError::EmptyDataset)?;
        let avg_basket = total_spent.checked_div(Decimal::from(total_trips as u64))
            .ok_or_else(|| AnalysisError::overflow("avgBasket"))?;

        let (favorite_store, favorite_store_count) = stores.argmax()
            .map(|(store, count)| (store.clone(), count))
            .ok_or(AnalysisError::EmptyDataset)?;

        // Baskets with no line items at all leave the top product empty.
        let (top_product, top_product_count) = products.frequency.argmax()
            .map(|(name, count)| (name.clone(), count))
            .unwrap_or_default();

        let busiest_month = calendar.busiest_month()
            .ok_or(AnalysisError::EmptyDataset)?;
        let favorite_day = calendar.favorite_day()
            .ok_or(AnalysisError::EmptyDataset)?;

        let weekend_trips = calendar.weekend_trips();
        let weekday_trips = calendar.weekday_trips();
        let summer_flavor = calendar.summer_flavor();
        let spike = spikes.detect();

        debug!(
            "Analysed {total_trips} trips: {} products, {} distinct, favourite store [{favorite_store}]",
            products.total_products,
            products.unique_products()
        );

        Ok(Insights {
            customer_name: dataset.customer_first_name.clone(),
            total_spent,
            total_trips,
            total_savings,
            avg_basket,
            biggest_shop,
            favorite_store,
            favorite_store_count,
            favorite_payment: payments.argmax().map(|(method, _)| method.clone()),
            total_products: products.total_products,
            unique_products: products.unique_products(),
            top5_products: products.top(TOP_PRODUCTS),
            top_product,
            top_product_count,
            chocolate_count: products.chocolate_count,
            product_frequency: products.frequency,
            product_spending: products.spending,
            day_of_week_frequency: calendar.day_of_week,
            busiest_month,
            favorite_day,
            night_owl_trips: calendar.night_owl_trips,
            weekend_trips,
            weekday_trips,
            shopping_personality: ShoppingPersonality::classify(weekend_trips, weekday_trips),
            summer_flavor: summer_flavor.as_ref().map(|(name, _)| name.clone()),
            summer_flavor_count: summer_flavor.map(|(_, count)| count),
            spike_product: spike.as_ref().map(|spike| spike.product.clone()),
            spike_month: spike.as_ref().map(|spike| spike.month),
            spike_data: spike.map(|spike| spike.monthly),
            month_frequency: calendar.month_frequency
        })
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyses `dataset` with the default thresholds.
pub fn analyze(dataset: &TransactionDataset) -> Result<Insights, AnalysisError> {
    AnalysisEngine::new().analyze(dataset)
}
