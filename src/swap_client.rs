use std::time::Duration;

use reqwest::StatusCode;

use crate::data::{Quote, QuoteRequest};
use crate::error::SwapError;

pub const DEFAULT_QUOTE_URL: &str = "https://swap.coinhall.org/v1/swap";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the swap-quote HTTP API.
#[derive(Clone)]
pub struct SwapClient {
    http: reqwest::Client,
    base_url: String,
}

impl SwapClient {
    /// Create a new instance pointing at the given endpoint, e.g. the hosted
    /// Coinhall API or a local stub.
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, SwapError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    /// Fetch a swap quote. Numeric fields are returned as sent; they are
    /// checked when the swap is executed.
    pub async fn quote(&self, req: &QuoteRequest) -> Result<Quote, SwapError> {
        log::debug!("GET {} {:?}", self.base_url, req);
        let resp = self
            .http
            .get(&self.base_url)
            .query(&req.query_params())
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(SwapError::Upstream { status: status.as_u16() });
        }

        let body = resp.bytes().await?;
        let quote: Quote = serde_json::from_slice(&body)?;
        log::info!(
            "Quote {} -> {}: expected {}, minimum {}",
            req.from_asset,
            req.to_asset,
            quote.expected_return,
            quote.minimum_receive
        );
        Ok(quote)
    }
}
