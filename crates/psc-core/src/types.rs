//! Domain types shared across the stock-check pipeline.
//!
//! Serialized field names stay camelCase (`storeId`, `displayName`, ...)
//! so cache and report files remain shape-compatible with the files the
//! retailer's own endpoints and earlier sweeps produced.

use serde::{Deserialize, Serialize};

/// A resolved search origin. Produced once per run by the geocoder and
/// consumed only by store enumeration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// A pharmacy store as enumerated from the store-search endpoint or
/// deserialized from the on-disk cache.
///
/// `store_id` is externally assigned and unique within a run's store list.
/// `postcode` and `phone_number` come from nested address/contact blocks
/// that the endpoint sometimes omits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRecord {
    pub store_id: i64,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// The retailer's per-store stock status code.
///
/// `"G"` is the only code the tool interprets (item in stock). Other codes
/// exist upstream but are undocumented, so they are carried through
/// verbatim rather than mapped onto a guessed enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockLevel(String);

impl StockLevel {
    /// The code the stock endpoint returns for an in-stock item.
    pub const IN_STOCK: &'static str = "G";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_in_stock(&self) -> bool {
        self.0 == Self::IN_STOCK
    }
}

impl std::fmt::Display for StockLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One store's stock level for the queried medication, as returned by the
/// stock endpoint.
///
/// The endpoint reports store ids as strings even though store search
/// reports them as numbers; the id is kept as received and normalized only
/// at join time (see [`crate::aggregate`]). Transient — never persisted on
/// its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    pub store_id: String,
    pub stock_level: StockLevel,
}

/// A stock record joined back to its store's metadata. The full list of
/// these is what a run persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStockResult {
    pub store_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_postcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_phone_number: Option<String>,
    pub stock_status: StockLevel,
}
