//! HTTP client for the retailer's pharmacy stock-check endpoints.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::rate_limit::RequestPacer;

/// Construction parameters for [`StockCheckClient`], typically derived from
/// the application config by the CLI.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL the endpoint paths (`geocoder/postalcode`, `search/store`,
    /// `itemStock`) are appended to.
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Fixed delay between paginated requests; zero disables pacing.
    pub inter_request_delay_ms: u64,
    /// Store ids per stock lookup request.
    pub stock_batch_size: usize,
    /// Whether a trailing partial batch is queried (see
    /// [`crate::stock::batch_count`]).
    pub include_trailing_batch: bool,
}

/// Client for the geocoding, store-search, and stock endpoints.
///
/// All requests run strictly sequentially; the injected [`RequestPacer`]
/// spaces out paginated calls. Responses are parsed through explicit wire
/// types ([`crate::types`]) so shape mismatches surface as
/// [`ClientError::Deserialize`].
pub struct StockCheckClient {
    pub(crate) client: Client,
    base_url: String,
    pub(crate) pacer: RequestPacer,
    pub(crate) stock_batch_size: usize,
    pub(crate) include_trailing_batch: bool,
}

impl StockCheckClient {
    /// Creates a client with configured timeout, `User-Agent`, and pacing.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(options: &ClientOptions) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(options.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: options.base_url.trim_end_matches('/').to_owned(),
            pacer: RequestPacer::new(options.inter_request_delay_ms),
            stock_batch_size: options.stock_batch_size.max(1),
            include_trailing_batch: options.include_trailing_batch,
        })
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

/// Check the response status and parse its body as `T`.
///
/// Non-2xx responses become [`ClientError::UnexpectedStatus`]; a body that
/// does not match the expected shape becomes [`ClientError::Deserialize`]
/// with `context` naming the endpoint.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    context: &str,
) -> Result<T, ClientError> {
    let status = response.status();
    let url = response.url().to_string();

    if !status.is_success() {
        return Err(ClientError::UnexpectedStatus {
            status: status.as_u16(),
            url,
        });
    }

    let body = response.text().await?;
    serde_json::from_str::<T>(&body).map_err(|e| ClientError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}
