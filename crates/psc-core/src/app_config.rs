use std::path::PathBuf;

/// Runtime configuration for a stock-check run.
///
/// Every field has an environment default (see [`crate::config`]); nothing
/// is required, so the tool runs out of the box against the live retailer.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL the three endpoint paths are appended to.
    pub base_url: String,
    /// Search radius in miles around the resolved postcode.
    pub radius_miles: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Fixed delay between paginated requests, in milliseconds. The remote
    /// rate limit is assumed, not documented; keep this generous.
    pub inter_request_delay_ms: u64,
    /// Number of store ids per stock lookup request.
    pub stock_batch_size: usize,
    /// Whether a trailing partial batch (fewer than `stock_batch_size` ids)
    /// is queried at all. Off by default: the last few stores of an
    /// uneven list are skipped rather than sent as a short batch.
    pub include_trailing_batch: bool,
    /// Directory holding cached store lists and written reports.
    pub data_dir: PathBuf,
    pub log_level: String,
}
