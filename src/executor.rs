use crate::agent::{ExecuteContractMsg, SigningAgent};
use crate::coin::coins_from_funds;
use crate::data::{ContractCall, TransactionResult};
use crate::error::SwapError;

/// Signs and broadcasts `call` through `agent`.
///
/// Each step short-circuits; nothing is sent to the agent unless the contract
/// address is set and every fund amount parses. The broadcast result is
/// returned without waiting for inclusion.
pub async fn execute_swap(call: &ContractCall, agent: &dyn SigningAgent) -> Result<TransactionResult, SwapError> {
    if call.address.is_empty() {
        return Err(SwapError::InvalidQuote("empty contract address".to_string()));
    }
    let coins = coins_from_funds(&call.funds)?;

    let sender = agent.address().await.map_err(|e| SwapError::Signing(e.to_string()))?;
    let msg = ExecuteContractMsg {
        sender,
        contract: call.address.clone(),
        msg: call.execute_msg.clone(),
        funds: coins,
    };

    let tx_bytes = agent
        .sign_and_build(std::slice::from_ref(&msg))
        .await
        .map_err(|e| SwapError::Signing(e.to_string()))?;
    log::debug!("Signed tx for {} ({} bytes)", msg.contract, tx_bytes.len());

    let res = agent
        .broadcast(tx_bytes)
        .await
        .map_err(|e| SwapError::Broadcast { reason: e.to_string() })?;
    if !res.is_success() {
        return Err(SwapError::Broadcast {
            reason: format!("code {}: {}", res.code, res.raw_log),
        });
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use cosmwasm_std::{Coin, Uint128};
    use crate::data::Fund;
    use crate::error::AgentError;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<String>>,
        signed: Mutex<Vec<ExecuteContractMsg>>,
        fail_address: bool,
        fail_sign: bool,
        fail_broadcast: bool,
        code: u32,
    }

    #[async_trait]
    impl SigningAgent for Recorder {
        async fn address(&self) -> Result<String, AgentError> {
            self.calls.lock().unwrap().push("address".into());
            if self.fail_address {
                return Err(AgentError::KeyUnavailable("keyring locked".into()));
            }
            Ok("inj1sender".into())
        }

        async fn sign_and_build(&self, msgs: &[ExecuteContractMsg]) -> Result<Vec<u8>, AgentError> {
            self.calls.lock().unwrap().push("sign".into());
            if self.fail_sign {
                return Err(AgentError::Rejected("ledger declined".into()));
            }
            self.signed.lock().unwrap().extend_from_slice(msgs);
            Ok(vec![1, 2, 3])
        }

        async fn broadcast(&self, tx_bytes: Vec<u8>) -> Result<TransactionResult, AgentError> {
            self.calls.lock().unwrap().push("broadcast".into());
            if self.fail_broadcast {
                return Err(AgentError::Rejected("mempool full".into()));
            }
            assert_eq!(tx_bytes, vec![1, 2, 3]);
            Ok(TransactionResult { txhash: "ABC".into(), code: self.code, height: 10, raw_log: "out of gas".into() })
        }
    }

    fn call(address: &str, amount: &str) -> ContractCall {
        ContractCall {
            address: address.to_string(),
            execute_msg: json!({"swap": {}}),
            funds: vec![Fund { denom: "peggy0x".into(), amount: amount.into() }],
        }
    }

    #[tokio::test]
    async fn signs_then_broadcasts_once() {
        let agent = Recorder::default();
        let res = execute_swap(&call("inj1abc", "13000000"), &agent).await.unwrap();
        assert_eq!(res.txhash, "ABC");
        assert_eq!(*agent.calls.lock().unwrap(), vec!["address", "sign", "broadcast"]);

        let signed = agent.signed.lock().unwrap();
        assert_eq!(signed.len(), 1);
        assert_eq!(signed[0].sender, "inj1sender");
        assert_eq!(signed[0].contract, "inj1abc");
        assert_eq!(signed[0].funds, vec![Coin { denom: "peggy0x".into(), amount: Uint128::new(13_000_000) }]);
    }

    #[tokio::test]
    async fn invalid_amount_skips_agent() {
        let agent = Recorder::default();
        let err = execute_swap(&call("inj1abc", "12.5"), &agent).await.unwrap_err();
        assert!(matches!(err, SwapError::InvalidAmount { .. }));
        assert!(agent.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_address_skips_agent() {
        let agent = Recorder::default();
        let err = execute_swap(&call("", "1"), &agent).await.unwrap_err();
        assert!(matches!(err, SwapError::InvalidQuote(_)));
        assert!(agent.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn signing_failure_stops_before_broadcast() {
        let agent = Recorder { fail_sign: true, ..Recorder::default() };
        let err = execute_swap(&call("inj1abc", "1"), &agent).await.unwrap_err();
        assert!(matches!(err, SwapError::Signing(_)));
        assert_eq!(*agent.calls.lock().unwrap(), vec!["address", "sign"]);
    }

    #[tokio::test]
    async fn non_zero_code_is_broadcast_error() {
        let agent = Recorder { code: 11, ..Recorder::default() };
        match execute_swap(&call("inj1abc", "1"), &agent).await.unwrap_err() {
            SwapError::Broadcast { reason } => assert!(reason.contains("out of gas")),
            other => panic!("unexpected {other}"),
        }
    }

    #[tokio::test]
    async fn address_failure_is_signing_error() {
        let agent = Recorder { fail_address: true, ..Recorder::default() };
        match execute_swap(&call("inj1abc", "1"), &agent).await.unwrap_err() {
            SwapError::Signing(reason) => assert!(reason.contains("keyring locked")),
            other => panic!("unexpected {other}"),
        }
        assert_eq!(*agent.calls.lock().unwrap(), vec!["address"]);
    }

    #[tokio::test]
    async fn agent_broadcast_failure_is_broadcast_error() {
        let agent = Recorder { fail_broadcast: true, ..Recorder::default() };
        match execute_swap(&call("inj1abc", "1"), &agent).await.unwrap_err() {
            SwapError::Broadcast { reason } => assert_eq!(reason, "rejected: mempool full"),
            other => panic!("unexpected {other}"),
        }
        assert_eq!(*agent.calls.lock().unwrap(), vec!["address", "sign", "broadcast"]);
    }
}
