use crate::agent::{PaperAgent, SigningAgent};
use crate::config::SwapConfig;
use crate::data::{QuoteRequest, TransactionResult};
use crate::executor::execute_swap;
use crate::swap_client::{SwapClient, DEFAULT_QUOTE_URL, DEFAULT_TIMEOUT};
use anyhow::{Context, Result};
use std::time::Duration;

/// One quote-then-execute run.
pub struct Trader {
    swap_client: SwapClient,
    request: QuoteRequest,
    agent: Box<dyn SigningAgent>,
}

impl Trader {
    /// Builds a trader that signs with the paper agent.
    pub fn new(cfg: SwapConfig) -> Result<Self> {
        let agent = Box::new(PaperAgent::new(cfg.sender_address.clone()));
        Self::with_agent(cfg, agent)
    }

    pub fn with_agent(cfg: SwapConfig, agent: Box<dyn SigningAgent>) -> Result<Self> {
        // defaults for optional settings
        let url = cfg.quote_api_url.unwrap_or_else(|| DEFAULT_QUOTE_URL.to_string());
        let timeout = cfg.quote_timeout_secs.map(Duration::from_secs).unwrap_or(DEFAULT_TIMEOUT);
        let slippage_bps = cfg.slippage_bps.unwrap_or(100);

        let swap_client = SwapClient::new(url, timeout)?;
        let request = QuoteRequest::new(cfg.chain_id, cfg.from_asset, cfg.to_asset, cfg.amount, slippage_bps)?;

        Ok(Self { swap_client, request, agent })
    }

    pub async fn run(&self) -> Result<TransactionResult> {
        let quote = self
            .swap_client
            .quote(&self.request)
            .await
            .context("Failed to simulate swap")?;

        log::info!("Expected return amount: {}", quote.expected_return);
        log::info!("Minimum amount to be received: {}", quote.minimum_receive);
        for (i, hop) in quote.route.iter().enumerate() {
            log::info!("Route hop {}: {} via {}", i, hop.return_asset.symbol, hop.dex);
        }

        let res = execute_swap(&quote.contract_input, self.agent.as_ref())
            .await
            .context("Failed to execute swap")?;
        log::info!("Swap broadcast: txhash={} height={}", res.txhash, res.height);
        Ok(res)
    }
}
