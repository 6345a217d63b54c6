use tracing::debug;

use crate::models::errors::AnalysisError;
use crate::models::raw::{validate_record, RawDocument};
use crate::models::TransactionRecord;

/// A single customer's purchases for the year, fully validated.
///
/// Records keep the order they had in the source document. Nothing downstream
/// assumes they are sorted by time.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDataset {
    pub customer_first_name: String,
    pub records: Vec<TransactionRecord>
}

impl TransactionDataset {
    pub fn new(customer_first_name: impl Into<String>, records: Vec<TransactionRecord>) -> Self {
        Self {
            customer_first_name: customer_first_name.into(),
            records
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TryFrom<RawDocument> for TransactionDataset {
    type Error = AnalysisError;

    /// Validates every purchase record, failing on the first malformed one.
    fn try_from(document: RawDocument) -> Result<Self, Self::Error> {
        let (customer_first_name, raw_records) = document.into_records();

        let records = raw_records.into_iter()
            .enumerate()
            .map(|(index, value)| validate_record(index, value))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Validated {} purchase records for [{customer_first_name}]", records.len());

        Ok(Self::new(customer_first_name, records))
    }
}
