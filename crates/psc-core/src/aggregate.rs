//! Joins stock levels back to store metadata.
//!
//! The stock endpoint reports store ids as strings while store search
//! reports them as numbers, so the join parses the stock side to `i64`
//! before comparing. A stock record whose id is unparseable or absent from
//! the known store set never aborts the sweep — it lands in
//! [`Aggregation::unmatched`] for the caller to report.

use std::collections::HashMap;

use crate::types::{StockRecord, StoreRecord, StoreStockResult};

/// Output of one aggregation pass: joined results in stock-arrival order,
/// plus the store ids that failed to join.
#[derive(Debug, Default)]
pub struct Aggregation {
    pub results: Vec<StoreStockResult>,
    pub unmatched: Vec<String>,
}

impl Aggregation {
    /// The subsequence of results whose status code means in stock.
    #[must_use]
    pub fn in_stock(&self) -> Vec<&StoreStockResult> {
        self.results
            .iter()
            .filter(|r| r.stock_status.is_in_stock())
            .collect()
    }
}

/// Join each stock record to the store it refers to.
///
/// The queried id space should be a subset of `stores` (stock is only ever
/// requested for enumerated or cached stores), so `unmatched` being
/// non-empty indicates the server answered for a store it was not asked
/// about, or returned a malformed id.
#[must_use]
pub fn aggregate(stock: &[StockRecord], stores: &[StoreRecord]) -> Aggregation {
    let by_id: HashMap<i64, &StoreRecord> =
        stores.iter().map(|store| (store.store_id, store)).collect();

    let mut aggregation = Aggregation::default();
    for record in stock {
        let store = record
            .store_id
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|id| by_id.get(&id));

        match store {
            Some(store) => aggregation.results.push(StoreStockResult {
                store_name: store.display_name.clone(),
                store_postcode: store.postcode.clone(),
                store_phone_number: store.phone_number.clone(),
                stock_status: record.stock_level.clone(),
            }),
            None => aggregation.unmatched.push(record.store_id.clone()),
        }
    }

    aggregation
}
