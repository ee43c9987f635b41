//! Store enumeration: offset-paginated search around a coordinate.

use psc_core::types::{GeoCoordinate, StoreRecord};

use crate::client::{read_json, StockCheckClient};
use crate::error::ClientError;
use crate::types::StoreSearchResponse;

/// Maximum number of store-search pages to fetch before returning an
/// error. Prevents an infinite loop if the server stops advancing the
/// page window (e.g. `size` of 0 with a non-zero `total`).
const MAX_PAGES: usize = 200;

impl StockCheckClient {
    /// Fetch one page of the store search, `offset` entries in.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] — network or TLS failure.
    /// - [`ClientError::UnexpectedStatus`] — non-2xx response.
    /// - [`ClientError::Deserialize`] — body does not match the expected
    ///   page shape (including a missing `results` field).
    pub(crate) async fn fetch_store_page(
        &self,
        center: GeoCoordinate,
        radius_miles: u32,
        offset: u32,
    ) -> Result<StoreSearchResponse, ClientError> {
        let url = self.endpoint("search/store");
        let radius = radius_miles.to_string();
        let from = offset.to_string();
        let latitude = center.latitude.to_string();
        let longitude = center.longitude.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("type", "geo"),
                ("radius", radius.as_str()),
                ("from", from.as_str()),
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
            ])
            .send()
            .await?;

        read_json(response, "store search page").await
    }

    /// Enumerate every store within `radius_miles` of `center`.
    ///
    /// Pages are fetched in increasing offset order, starting at 0 and
    /// advancing by each page's declared `size`; enumeration stops once
    /// `offset + size` reaches the latest page's declared `total`. The
    /// pacer runs after every page — including the last one, since the
    /// stock sweep follows immediately on the same assumed rate limit.
    ///
    /// The list is fully materialized: a caller needs the complete store
    /// set before batching stock lookups, so any page failure discards
    /// what was collected and fails the enumeration.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_store_page`]. Returns
    /// [`ClientError::PaginationLimit`] if the page count exceeds
    /// [`MAX_PAGES`] without the window converging on `total`.
    pub async fn enumerate_stores(
        &self,
        center: GeoCoordinate,
        radius_miles: u32,
    ) -> Result<Vec<StoreRecord>, ClientError> {
        let mut stores: Vec<StoreRecord> = Vec::new();
        let mut offset: u32 = 0;
        let mut page_count: usize = 0;

        loop {
            page_count += 1;
            if page_count > MAX_PAGES {
                return Err(ClientError::PaginationLimit {
                    max_pages: MAX_PAGES,
                });
            }

            let page = self.fetch_store_page(center, radius_miles, offset).await?;

            tracing::info!(
                from = offset + 1,
                to = (offset + page.size).min(page.total),
                total = page.total,
                "fetched store page"
            );

            stores.extend(
                page.results
                    .into_iter()
                    .map(|entry| entry.location.into_record()),
            );

            self.pacer.pause().await;

            // `total` is re-read from every page rather than snapshotted;
            // the latest page is the server's most recent claim.
            if offset + page.size >= page.total {
                break;
            }
            offset += page.size;
        }

        tracing::info!(count = stores.len(), "store enumeration complete");
        Ok(stores)
    }
}
