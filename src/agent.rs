use async_trait::async_trait;
use base64::{engine::general_purpose, Engine};
use cosmwasm_std::Coin;
use serde::Serialize;
use serde_json::{json, Value};

use crate::data::TransactionResult;
use crate::error::AgentError;

/// CosmWasm `MsgExecuteContract`, in its JSON form. `msg` stays a JSON value
/// and protobuf encoding is left to the agent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecuteContractMsg {
    pub sender: String,
    pub contract: String,
    pub msg: Value,
    pub funds: Vec<Coin>,
}

impl ExecuteContractMsg {
    pub const TYPE_URL: &'static str = "/cosmwasm.wasm.v1.MsgExecuteContract";
}

/// Key custody, signing and broadcast. Supplied by the integrator.
///
/// Callers must not run two broadcasts from the same key concurrently; the
/// agent owns sequence numbers.
#[async_trait]
pub trait SigningAgent: Send + Sync {
    async fn address(&self) -> Result<String, AgentError>;

    /// Signs a transaction holding exactly `msgs` and returns its bytes.
    async fn sign_and_build(&self, msgs: &[ExecuteContractMsg]) -> Result<Vec<u8>, AgentError>;

    async fn broadcast(&self, tx_bytes: Vec<u8>) -> Result<TransactionResult, AgentError>;
}

/// Paper-trading agent: builds an unsigned JSON tx body and logs it instead
/// of broadcasting.
pub struct PaperAgent {
    address: String,
}

impl PaperAgent {
    pub fn new(address: String) -> Self {
        Self { address }
    }
}

#[async_trait]
impl SigningAgent for PaperAgent {
    async fn address(&self) -> Result<String, AgentError> {
        if self.address.is_empty() {
            return Err(AgentError::KeyUnavailable("no sender address configured".to_string()));
        }
        Ok(self.address.clone())
    }

    async fn sign_and_build(&self, msgs: &[ExecuteContractMsg]) -> Result<Vec<u8>, AgentError> {
        let messages: Vec<Value> = msgs
            .iter()
            .map(|m| -> Result<Value, serde_json::Error> {
                let mut v = serde_json::to_value(m)?;
                if let Value::Object(map) = &mut v {
                    map.insert("@type".to_string(), json!(ExecuteContractMsg::TYPE_URL));
                }
                Ok(v)
            })
            .collect::<Result<_, _>>()
            .map_err(|e| AgentError::Encode(e.to_string()))?;
        let body = json!({ "body": { "messages": messages, "memo": "" } });
        serde_json::to_vec(&body).map_err(|e| AgentError::Encode(e.to_string()))
    }

    async fn broadcast(&self, tx_bytes: Vec<u8>) -> Result<TransactionResult, AgentError> {
        log::info!("[PAPER] tx_bytes: {}", general_purpose::STANDARD.encode(&tx_bytes));
        Ok(TransactionResult {
            raw_log: "paper mode: not broadcast".to_string(),
            ..TransactionResult::default()
        })
    }
}
