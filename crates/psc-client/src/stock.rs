//! Batched stock lookups with per-batch failure isolation.

use serde::Serialize;

use psc_core::types::StockRecord;

use crate::client::{read_json, StockCheckClient};
use crate::error::ClientError;
use crate::types::StockLevelsResponse;

/// Request body for `POST itemStock`. The endpoint accepts a product list
/// but the tool only ever asks about one medication per sweep.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StockQuery<'a> {
    product_id_list: [&'a str; 1],
    store_id_list: &'a [i64],
}

/// Outcome of a full stock sweep. A sweep never fails outright: batches
/// that error are skipped and counted, and total loss shows up as an empty
/// `levels` with `failed_batches == batches`.
#[derive(Debug, Default)]
pub struct StockSweep {
    /// Per-store stock levels from every batch that succeeded, in batch
    /// arrival order.
    pub levels: Vec<StockRecord>,
    /// Number of batches the sweep attempted.
    pub batches: usize,
    /// Number of batches that failed and were skipped.
    pub failed_batches: usize,
}

/// Number of batches a sweep over `id_count` store ids performs.
///
/// With `include_trailing` false this truncates (`floor`): a trailing
/// partial batch of fewer than `batch_size` ids is never queried. With it
/// true the tail is included (`ceil`).
#[must_use]
pub(crate) fn batch_count(id_count: usize, batch_size: usize, include_trailing: bool) -> usize {
    if include_trailing {
        id_count.div_ceil(batch_size)
    } else {
        id_count / batch_size
    }
}

impl StockCheckClient {
    /// Query stock levels for one batch of store ids.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] — network or TLS failure.
    /// - [`ClientError::UnexpectedStatus`] — non-2xx response.
    /// - [`ClientError::Deserialize`] — body does not match the expected
    ///   shape (including a missing `stockLevels` field).
    pub(crate) async fn fetch_stock_batch(
        &self,
        product_id: &str,
        store_ids: &[i64],
    ) -> Result<Vec<StockRecord>, ClientError> {
        let url = self.endpoint("itemStock");
        let response = self
            .client
            .post(&url)
            .json(&StockQuery {
                product_id_list: [product_id],
                store_id_list: store_ids,
            })
            .send()
            .await?;

        let parsed: StockLevelsResponse = read_json(response, "stock levels").await?;
        Ok(parsed.stock_levels)
    }

    /// Sweep stock levels for `product_id` across `store_ids`, in
    /// consecutive batches of the configured size.
    ///
    /// A batch failure is logged and skipped — its stores are simply
    /// absent from the result — and later batches still run. The pacer
    /// runs after every batch except the last.
    pub async fn fetch_all_stock(&self, product_id: &str, store_ids: &[i64]) -> StockSweep {
        let batches = batch_count(
            store_ids.len(),
            self.stock_batch_size,
            self.include_trailing_batch,
        );

        let mut sweep = StockSweep {
            batches,
            ..StockSweep::default()
        };

        if batches == 0 {
            tracing::warn!(
                stores = store_ids.len(),
                batch_size = self.stock_batch_size,
                "fewer stores than one full batch; nothing to query"
            );
            return sweep;
        }

        tracing::info!(
            stores = store_ids.len(),
            batches,
            batch_size = self.stock_batch_size,
            "fetching stock levels"
        );

        for (index, batch) in store_ids
            .chunks(self.stock_batch_size)
            .take(batches)
            .enumerate()
        {
            tracing::debug!(
                batch = index + 1,
                batches,
                size = batch.len(),
                "fetching stock batch"
            );

            match self.fetch_stock_batch(product_id, batch).await {
                Ok(mut levels) => sweep.levels.append(&mut levels),
                Err(error) => {
                    sweep.failed_batches += 1;
                    tracing::warn!(batch = index + 1, %error, "stock batch failed; skipping");
                }
            }

            if index + 1 < batches {
                self.pacer.pause().await;
            }
        }

        sweep
    }
}

#[cfg(test)]
#[path = "stock_test.rs"]
mod tests;
