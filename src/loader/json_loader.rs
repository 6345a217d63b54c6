use std::path::Path;

use tokio::fs;
use tokio::task::spawn_blocking;
use tracing::{debug, info};

use crate::loader::errors::LoadError;
use crate::models::{RawDocument, TransactionDataset};

/// Reads and parses an account export from disk.
///
/// Only the document shape is checked here: the purchase and profile sections must
/// exist. Individual purchase records are validated later when the dataset is built.
pub async fn load_document(path: impl AsRef<Path>) -> Result<RawDocument, LoadError> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).await
        .map_err(|error| LoadError::io(path, error))?;

    debug!("Read {} bytes from [{}]", contents.len(), path.display());

    //NOTE: Parsing a full year of purchases is CPU bound, keep it off the async workers
    let document = spawn_blocking(move || parse_document(&contents)).await??;

    info!(
        "Loaded export for [{}] with {} purchase records",
        document.profile.online_account.first_name,
        document.purchases.first().map_or(0, Vec::len)
    );

    Ok(document)
}

/// Loads an export and validates every purchase record into a [`TransactionDataset`].
///
/// # Errors
/// Returns `LoadError` if:
/// - The file cannot be read or is not an account document.
/// - Any purchase record is malformed ([`LoadError::Invalid`]).
pub async fn load_dataset(path: impl AsRef<Path>) -> Result<TransactionDataset, LoadError> {
    let document = load_document(path).await?;
    let dataset = TransactionDataset::try_from(document)?;

    info!("Validated {} purchase records", dataset.len());

    Ok(dataset)
}

pub fn parse_document(contents: &str) -> Result<RawDocument, LoadError> {
    Ok(serde_json::from_str(contents)?)
}
