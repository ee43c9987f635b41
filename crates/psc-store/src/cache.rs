//! Disk cache for enumerated store lists.
//!
//! Store enumeration is slow by design (one paced request per page), so
//! the full list for a given search is persisted and reused across runs.
//! The cache never expires on its own: store locations barely change, and
//! staleness is the operator's call (`--refresh` or deleting the file).

use std::path::{Path, PathBuf};

use psc_core::postcode::normalize_postcode;
use psc_core::types::StoreRecord;

use crate::error::StoreError;

/// Identifies one cached search: the whitespace-stripped postcode and the
/// radius it was enumerated with. Searches with a different radius get
/// their own cache file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKey {
    postcode: String,
    radius_miles: u32,
}

impl CacheKey {
    #[must_use]
    pub fn new(postcode: &str, radius_miles: u32) -> Self {
        Self {
            postcode: normalize_postcode(postcode),
            radius_miles,
        }
    }

    /// The normalized postcode component of the key.
    #[must_use]
    pub fn postcode(&self) -> &str {
        &self.postcode
    }

    #[must_use]
    pub fn radius_miles(&self) -> u32 {
        self.radius_miles
    }

    pub(crate) fn cache_file_name(&self) -> String {
        format!("stores_{}_{}.json", self.postcode, self.radius_miles)
    }
}

/// Write-through cache mapping a [`CacheKey`] to a store list on disk.
///
/// Single-process, single-writer; no locking.
#[derive(Debug, Clone)]
pub struct StoreCache {
    data_dir: PathBuf,
}

impl StoreCache {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    #[must_use]
    pub fn path_for(&self, key: &CacheKey) -> PathBuf {
        self.data_dir.join(key.cache_file_name())
    }

    /// Try to load the store list cached for `key`.
    ///
    /// Any failure — missing file, unreadable file, malformed JSON — is a
    /// plain cache miss, never an error: the caller falls back to a fresh
    /// enumeration.
    #[must_use]
    pub fn load(&self, key: &CacheKey) -> Option<Vec<StoreRecord>> {
        let path = self.path_for(key);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "cache miss");
                return None;
            }
        };

        match serde_json::from_str::<Vec<StoreRecord>>(&contents) {
            Ok(stores) => Some(stores),
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "cache file malformed; treating as miss");
                None
            }
        }
    }

    /// Persist the full store list for `key`, creating the data directory
    /// first if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory or file cannot be
    /// written, [`StoreError::Serialize`] if the list cannot be encoded.
    pub fn save(&self, key: &CacheKey, stores: &[StoreRecord]) -> Result<PathBuf, StoreError> {
        create_data_dir(&self.data_dir)?;

        let path = self.path_for(key);
        let json = serde_json::to_string(stores)?;
        std::fs::write(&path, json).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}

pub(crate) fn create_data_dir(data_dir: &Path) -> Result<(), StoreError> {
    std::fs::create_dir_all(data_dir).map_err(|source| StoreError::Io {
        path: data_dir.to_path_buf(),
        source,
    })
}
