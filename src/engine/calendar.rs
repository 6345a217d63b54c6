use chrono::{Datelike, NaiveDateTime, Timelike};
use std::ops::RangeInclusive;

use crate::models::TransactionRecord;
use crate::types::{argmax, Quantity, Tally, TripCount};

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December"
];

pub const DAY_NAMES: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"
];

const NIGHT_OWL_HOUR: u32 = 22;
const SUMMER_MONTHS: RangeInclusive<u32> = 6..=8;

pub fn month_name(timestamp: &NaiveDateTime) -> &'static str {
    MONTH_NAMES[timestamp.month0() as usize]
}

/// Trip counts bucketed by when the trip happened.
#[derive(Debug, Default)]
pub struct CalendarStats {
    pub month_frequency: Tally<&'static str, TripCount>,
    pub day_of_week: [TripCount; 7],
    pub night_owl_trips: TripCount,
    pub summer_products: Tally<String, Quantity>
}

impl CalendarStats {
    pub fn record(&mut self, record: &TransactionRecord) {
        let timestamp = &record.timestamp;

        self.month_frequency.add(&month_name(timestamp), 1);
        self.day_of_week[timestamp.weekday().num_days_from_sunday() as usize] += 1;

        if timestamp.hour() >= NIGHT_OWL_HOUR {
            self.night_owl_trips += 1;
        }

        if SUMMER_MONTHS.contains(&timestamp.month()) {
            for item in &record.products {
                self.summer_products.add(item.name.as_str(), item.quantity);
            }
        }
    }

    pub fn weekend_trips(&self) -> TripCount {
        self.day_of_week[0] + self.day_of_week[6]
    }

    pub fn weekday_trips(&self) -> TripCount {
        self.day_of_week[1..6].iter().sum()
    }

    pub fn busiest_month(&self) -> Option<&'static str> {
        self.month_frequency.argmax().map(|(month, _)| *month)
    }

    /// Sunday is checked first, so it wins a tie with any other day.
    pub fn favorite_day(&self) -> Option<&'static str> {
        argmax(self.day_of_week.iter().copied().enumerate())
            .map(|(day, _)| DAY_NAMES[day])
    }

    pub fn summer_flavor(&self) -> Option<(String, Quantity)> {
        self.summer_products.argmax().map(|(name, count)| (name.clone(), count))
    }
}
