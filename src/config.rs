use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize, Clone)]
pub struct SwapConfig {
    /// Quote endpoint. Defaults to the hosted Coinhall API
    #[serde(default)]
    pub quote_api_url: Option<String>,
    pub chain_id: String,
    pub from_asset: String,
    pub to_asset: String,
    /// Amount to swap in base units of `from_asset`
    pub amount: String,
    /// Allowed slippage in basis points (1 bp = 0.01%). Defaults to 100 (1%)
    #[serde(default)]
    pub slippage_bps: Option<u16>,
    /// Address the paper agent signs as
    pub sender_address: String,
    /// Quote request timeout. Defaults to 30s
    #[serde(default)]
    pub quote_timeout_secs: Option<u64>,
}

impl SwapConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| anyhow!(e))
    }
}
