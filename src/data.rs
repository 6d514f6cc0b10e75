use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::SwapError;

/// Parameters of a single quote lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub chain_id: String,
    pub from_asset: String,
    pub to_asset: String,
    /// Base units, decimal integer string.
    pub amount: String,
    /// Slippage tolerance in basis points (1 bp = 0.01%).
    pub slippage_bps: u16,
}

impl QuoteRequest {
    pub const MAX_SLIPPAGE_BPS: u16 = 10_000;

    pub fn new(
        chain_id: impl Into<String>,
        from_asset: impl Into<String>,
        to_asset: impl Into<String>,
        amount: impl Into<String>,
        slippage_bps: u16,
    ) -> Result<Self, SwapError> {
        let amount = amount.into();
        if crate::coin::parse_base_units(&amount).is_none() {
            return Err(SwapError::InvalidRequest(format!("amount {amount:?} is not a base-unit integer")));
        }
        if slippage_bps > Self::MAX_SLIPPAGE_BPS {
            return Err(SwapError::InvalidRequest(format!(
                "slippage {slippage_bps} bps exceeds {}",
                Self::MAX_SLIPPAGE_BPS
            )));
        }
        Ok(Self {
            chain_id: chain_id.into(),
            from_asset: from_asset.into(),
            to_asset: to_asset.into(),
            amount,
            slippage_bps,
        })
    }

    /// Query parameters using the names the quote service expects.
    pub fn query_params(&self) -> [(&'static str, String); 5] {
        [
            ("chainId", self.chain_id.clone()),
            ("from", self.from_asset.clone()),
            ("to", self.to_asset.clone()),
            ("amount", self.amount.clone()),
            ("slippageBps", self.slippage_bps.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub expected_return: String,
    pub minimum_receive: String,
    pub contract_input: ContractCall,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub route: Vec<RouteHop>,
}

/// Contract invocation the quote service wants us to sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractCall {
    #[serde(default)]
    pub address: String,
    /// Opaque to us; forwarded to the contract as-is.
    #[serde(default)]
    pub execute_msg: Value,
    /// Order and duplicates are kept exactly as sent.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub funds: Vec<Fund>,
}

// The service sends `null` for empty lists.
fn null_as_empty<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(d)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fund {
    pub denom: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteHop {
    pub return_asset: ReturnAsset,
    pub dex: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnAsset {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Result of a broadcast as reported by the signing agent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionResult {
    pub txhash: String,
    /// Zero on success.
    pub code: u32,
    pub height: i64,
    pub raw_log: String,
}

impl TransactionResult {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}
