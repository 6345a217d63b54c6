use std::ops::AddAssign;

use chrono::{Datelike, NaiveDateTime};
use tracing::debug;

use crate::engine::calendar::MONTH_NAMES;
use crate::insights::MonthCount;
use crate::models::LineItem;
use crate::types::{argmax, Quantity, Tally};

/// Products bought fewer times than this over the year are too sparse to call a spike.
pub const SPIKE_THRESHOLD: Quantity = 10;

/// Quantity of one product bought in each calendar month, January first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthlyCounts([Quantity; 12]);

impl MonthlyCounts {
    fn single(month0: usize, quantity: Quantity) -> Self {
        let mut counts = [0; 12];
        counts[month0] = quantity;
        Self(counts)
    }

    pub fn total(&self) -> Quantity {
        self.0.iter().sum()
    }

    /// Population standard deviation over the twelve months divided by the mean.
    /// Zero when nothing was bought.
    pub fn coefficient_of_variation(&self) -> f64 {
        let months = self.0.len() as f64;
        let mean = self.total() as f64 / months;

        if mean <= 0.0 {
            return 0.0;
        }

        let variance = self.0.iter()
            .map(|&count| (count as f64 - mean).powi(2))
            .sum::<f64>() / months;

        variance.sqrt() / mean
    }

    /// The earliest month holding the highest count.
    pub fn peak_month(&self) -> &'static str {
        argmax(self.0.iter().copied().enumerate())
            .map_or(MONTH_NAMES[0], |(month0, _)| MONTH_NAMES[month0])
    }

    pub fn to_month_counts(&self) -> Vec<MonthCount> {
        MONTH_NAMES.iter()
            .zip(self.0.iter())
            .map(|(&month, &count)| MonthCount { month, count })
            .collect()
    }
}

impl AddAssign for MonthlyCounts {
    fn add_assign(&mut self, rhs: Self) {
        for (count, extra) in self.0.iter_mut().zip(rhs.0) {
            *count += extra;
        }
    }
}

/// The product whose monthly purchases were the most uneven over the year.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalSpike {
    pub product: String,
    pub month: &'static str,
    pub monthly: Vec<MonthCount>
}

/// Builds a month-by-month purchase history per product and picks the spikiest.
#[derive(Debug)]
pub struct SpikeDetector {
    threshold: Quantity,
    history: Tally<String, MonthlyCounts>
}

impl SpikeDetector {
    pub fn new(threshold: Quantity) -> Self {
        Self {
            threshold,
            history: Tally::new()
        }
    }

    pub fn record(&mut self, timestamp: &NaiveDateTime, item: &LineItem) {
        let counts = MonthlyCounts::single(timestamp.month0() as usize, item.quantity);
        self.history.add(item.name.as_str(), counts);
    }

    /// Among products bought at least `threshold` times, the one with the strictly
    /// highest coefficient of variation. A perfectly even product never qualifies.
    pub fn detect(&self) -> Option<SeasonalSpike> {
        let candidates = self.history.iter()
            .filter(|(_, counts)| counts.total() >= self.threshold)
            .map(|(product, counts)| ((product, counts), counts.coefficient_of_variation()));

        let ((product, counts), variation) = argmax(candidates)
            .filter(|(_, variation)| *variation > 0.0)?;

        debug!("Seasonal spike candidate [{product}] with coefficient of variation {variation:.3}");

        Some(SeasonalSpike {
            product: product.clone(),
            month: counts.peak_month(),
            monthly: counts.to_month_counts()
        })
    }
}
