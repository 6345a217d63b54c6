use crate::types::FieldError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Dataset contains no purchase records")]
    EmptyDataset,
    #[error("Purchase record [{index}] is malformed at [{field}]: {reason}")]
    MalformedRecord {
        index: usize,
        field: String,
        reason: String
    },
    #[error("Numeric overflow occurred while totalling [{metric}]")]
    Overflow {
        metric: &'static str
    }
}

impl AnalysisError {
    pub fn malformed(index: usize, field: impl Into<String>, error: FieldError) -> Self {
        Self::MalformedRecord {
            index,
            field: field.into(),
            reason: error.to_string()
        }
    }

    pub fn missing(index: usize, field: impl Into<String>) -> Self {
        Self::malformed(index, field, FieldError::Missing)
    }

    pub fn unreadable(index: usize, error: serde_json::Error) -> Self {
        Self::MalformedRecord {
            index,
            field: "record".to_string(),
            reason: error.to_string()
        }
    }

    pub fn overflow(metric: &'static str) -> Self {
        Self::Overflow { metric }
    }
}
