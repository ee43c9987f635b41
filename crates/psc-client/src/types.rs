//! Wire types for the retailer's three endpoints.
//!
//! The endpoints are undocumented; these shapes are the ones observed from
//! live responses, modeled as explicit `Deserialize` structs so a schema
//! mismatch surfaces as a typed deserialization error instead of a panic
//! on a missing nested field.
//!
//! ## Store search
//! Each result wraps its payload in a capitalized `Location` object. The
//! nested `Address` and `contactDetails` blocks are omitted for some
//! stores (kiosks, concessions), so both — and their inner fields — are
//! optional. `size` is the count returned on this page, `total` the grand
//! total for the search; both drive pagination.
//!
//! ## Stock
//! `stockLevels[].storeId` is a **string** even though store search
//! reports ids as numbers. Kept as received; the join normalizes.

use serde::Deserialize;

use psc_core::types::{StockRecord, StoreRecord};

/// Response from `GET geocoder/postalcode?postalcode=...`.
#[derive(Debug, Deserialize)]
pub struct GeocoderResponse {
    pub results: Vec<GeocoderResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocoderResult {
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: GeoPoint,
}

#[derive(Debug, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// One page from `GET search/store?type=geo&...`.
#[derive(Debug, Deserialize)]
pub struct StoreSearchResponse {
    /// Number of results on this page.
    pub size: u32,
    /// Grand total of stores matching the search.
    pub total: u32,
    pub results: Vec<StoreSearchEntry>,
}

#[derive(Debug, Deserialize)]
pub struct StoreSearchEntry {
    #[serde(rename = "Location")]
    pub location: StoreLocation,
}

#[derive(Debug, Deserialize)]
pub struct StoreLocation {
    pub id: i64,
    pub displayname: String,
    #[serde(rename = "Address", default)]
    pub address: Option<StoreAddress>,
    #[serde(rename = "contactDetails", default)]
    pub contact_details: Option<ContactDetails>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StoreAddress {
    #[serde(default)]
    pub postcode: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactDetails {
    #[serde(default)]
    pub phone: Option<String>,
}

impl StoreLocation {
    /// Project the wire shape onto the domain record, flattening the
    /// optional nested blocks.
    #[must_use]
    pub fn into_record(self) -> StoreRecord {
        StoreRecord {
            store_id: self.id,
            display_name: self.displayname,
            postcode: self.address.and_then(|a| a.postcode),
            phone_number: self.contact_details.and_then(|c| c.phone),
        }
    }
}

/// Response from `POST itemStock`.
#[derive(Debug, Deserialize)]
pub struct StockLevelsResponse {
    #[serde(rename = "stockLevels")]
    pub stock_levels: Vec<StockRecord>,
}
