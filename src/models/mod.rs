mod dataset;
mod errors;
mod raw;
mod record;

pub use dataset::TransactionDataset;
pub use errors::AnalysisError;
pub use raw::RawDocument;
pub use record::{LineItem, TransactionRecord};
