//! One stock-check run: cache-or-enumerate the store list, sweep stock
//! levels, join, summarize, persist.

use anyhow::Context;

use psc_client::{ClientOptions, StockCheckClient};
use psc_core::{aggregate, AppConfig, Medication};
use psc_store::{CacheKey, ReportWriter, StoreCache};

fn client_options(config: &AppConfig) -> ClientOptions {
    ClientOptions {
        base_url: config.base_url.clone(),
        request_timeout_secs: config.request_timeout_secs,
        user_agent: config.user_agent.clone(),
        inter_request_delay_ms: config.inter_request_delay_ms,
        stock_batch_size: config.stock_batch_size,
        include_trailing_batch: config.include_trailing_batch,
    }
}

/// Run one sweep. Geocoding and store-enumeration failures abort the run
/// with no report written; failed stock batches and join misses only
/// degrade the report and are called out in the summary.
pub(crate) async fn run_stock_check(
    config: &AppConfig,
    postcode: &str,
    medication: Medication,
    refresh: bool,
) -> anyhow::Result<()> {
    let key = CacheKey::new(postcode, config.radius_miles);
    let cache = StoreCache::new(&config.data_dir);
    let client =
        StockCheckClient::new(&client_options(config)).context("failed to build HTTP client")?;

    let cached = if refresh { None } else { cache.load(&key) };
    let stores = match cached {
        Some(stores) => {
            tracing::info!(count = stores.len(), postcode = key.postcode(), "using cached store list");
            stores
        }
        None => {
            tracing::info!(
                radius = config.radius_miles,
                "no cached store list; enumerating stores (this may take a few minutes)"
            );
            let center = client
                .resolve_postcode(postcode)
                .await
                .context("postcode resolution failed")?;
            let stores = client
                .enumerate_stores(center, config.radius_miles)
                .await
                .context("store enumeration failed")?;
            let path = cache
                .save(&key, &stores)
                .context("failed to write store cache")?;
            tracing::info!(path = %path.display(), "store list cached");
            stores
        }
    };

    println!(
        "Checking {} across {} stores within {} miles of {}...",
        medication.label(),
        stores.len(),
        config.radius_miles,
        key.postcode()
    );

    let store_ids: Vec<i64> = stores.iter().map(|s| s.store_id).collect();
    let sweep = client
        .fetch_all_stock(medication.product_id(), &store_ids)
        .await;

    if sweep.failed_batches > 0 {
        tracing::warn!(
            failed = sweep.failed_batches,
            batches = sweep.batches,
            "some stock batches failed; the report will under-count availability"
        );
    }

    let aggregation = aggregate(&sweep.levels, &stores);
    if !aggregation.unmatched.is_empty() {
        tracing::warn!(
            ids = ?aggregation.unmatched,
            "stock levels returned for stores missing from the store list"
        );
    }

    let in_stock = aggregation.in_stock();
    println!("Found stock in {} locations.", in_stock.len());
    for result in &in_stock {
        println!(
            "  \u{2713} {:<32} {:<10} {}",
            result.store_name,
            result.store_postcode.as_deref().unwrap_or("-"),
            result.store_phone_number.as_deref().unwrap_or("-"),
        );
    }

    let writer = ReportWriter::new(&config.data_dir);
    let path = writer
        .write(&aggregation.results, &key)
        .context("failed to write report")?;
    println!("Stock check complete. Report written to {}.", path.display());

    Ok(())
}

#[cfg(test)]
#[path = "check_test.rs"]
mod tests;
