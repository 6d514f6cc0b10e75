use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwapError {
    #[error("invalid quote request: {0}")]
    InvalidRequest(String),
    #[error("quote request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("quote service returned status {status}")]
    Upstream { status: u16 },
    #[error("failed to decode quote: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("quote is not executable: {0}")]
    InvalidQuote(String),
    #[error("invalid amount {raw:?} for denom {denom}")]
    InvalidAmount { denom: String, raw: String },
    #[error("signing failed: {0}")]
    Signing(String),
    #[error("broadcast failed: {reason}")]
    Broadcast { reason: String },
}

/// Failure reported by a [`SigningAgent`](crate::agent::SigningAgent).
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("key unavailable: {0}")]
    KeyUnavailable(String),
    #[error("rejected: {0}")]
    Rejected(String),
    #[error("encode failed: {0}")]
    Encode(String),
    #[error("transport error: {0}")]
    Transport(String),
}
