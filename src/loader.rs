//! Static dataset loading.
//!
//! Thin I/O in front of the denormaliser: read the JSON document, parse
//! it into a [`RawDataset`], and denormalise. A failure at any stage is
//! terminal for session initialization and is surfaced to the caller;
//! nothing here retries.
//!
//! With the `fetch` cargo feature enabled, [`fetch_dataset`] pulls the
//! document over HTTP. That is the system's only suspension point —
//! everything else in the crate is synchronous.

use crate::dataset::Dataset;
use crate::denormalise::denormalise;
use crate::error::ChargenError;
use crate::raw::RawDataset;
use log::info;
use std::path::Path;

/// Parse and denormalise a dataset from a JSON string.
///
/// # Errors
///
/// [`ChargenError::DatasetParse`] for malformed JSON, or any
/// denormalisation error.
pub fn load_dataset(json: &str) -> Result<Dataset, ChargenError> {
    let raw: RawDataset = serde_json::from_str(json)?;
    denormalise(raw)
}

/// Read, parse and denormalise a dataset from a file.
///
/// # Errors
///
/// [`ChargenError::DatasetIo`] for read failures, then as
/// [`load_dataset`].
pub fn load_dataset_file(path: impl AsRef<Path>) -> Result<Dataset, ChargenError> {
    let path = path.as_ref();
    info!("loading dataset from {}", path.display());
    let json = std::fs::read_to_string(path)?;
    load_dataset(&json)
}

/// Fetch, parse and denormalise a dataset over HTTP.
///
/// # Errors
///
/// [`ChargenError::DatasetFetch`] for network failures or non-success
/// statuses, then any denormalisation error.
#[cfg(feature = "fetch")]
pub async fn fetch_dataset(url: &str) -> Result<Dataset, ChargenError> {
    info!("fetching dataset from {url}");
    let raw: RawDataset = reqwest::get(url)
        .await?
        .error_for_status()?
        .json()
        .await?;
    denormalise(raw)
}
