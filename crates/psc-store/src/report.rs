//! Timestamped report files.

use std::path::PathBuf;

use psc_core::types::StoreStockResult;

use crate::cache::{create_data_dir, CacheKey};
use crate::error::StoreError;

/// Writes the full result list of a sweep (not just in-stock stores) to a
/// file named after the search key and the generation time, so repeated
/// sweeps never collide.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    data_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Persist `results` as `stock_<postcode>_<radius>_<millis>.json`,
    /// creating the data directory first if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory or file cannot be
    /// written, [`StoreError::Serialize`] if the results cannot be
    /// encoded.
    pub fn write(
        &self,
        results: &[StoreStockResult],
        key: &CacheKey,
    ) -> Result<PathBuf, StoreError> {
        create_data_dir(&self.data_dir)?;

        let timestamp = chrono::Utc::now().timestamp_millis();
        let path = self.data_dir.join(format!(
            "stock_{}_{}_{timestamp}.json",
            key.postcode(),
            key.radius_miles()
        ));

        let json = serde_json::to_string(results)?;
        std::fs::write(&path, json).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}
