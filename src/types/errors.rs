use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Value is missing")]
    Missing,
    #[error("Expected a number but found {0}")]
    NotNumeric(String),
    #[error("Expected a whole number but found {0}")]
    NotWhole(String),
    #[error("Value must not be negative: {0}")]
    Negative(String),
    #[error("Unrecognised timestamp: {0}")]
    Timestamp(String)
}
