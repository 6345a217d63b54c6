use crate::types::errors::FieldError;
use chrono::{DateTime, NaiveDateTime};

const NAIVE_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M"
];

/// Parses a purchase timestamp into the shopper's wall-clock time.
///
/// Timestamps without an offset are already local. RFC 3339 timestamps keep the
/// wall-clock time at their own offset rather than being shifted to the host zone.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, FieldError> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.naive_local());
    }

    NAIVE_FORMATS.iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| FieldError::Timestamp(value.to_string()))
}
