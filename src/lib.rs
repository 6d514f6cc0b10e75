//! Cosmos swap executor
//! - Quote via the Coinhall-style swap API
//! - Funds converted to canonical coins
//! - Signing and broadcast delegated to a `SigningAgent`

pub mod agent;
pub mod coin;
pub mod config;
pub mod data;
pub mod error;
pub mod executor;
pub mod swap_client;
pub mod trader;

pub use agent::{ExecuteContractMsg, PaperAgent, SigningAgent};
pub use coin::coins_from_funds;
pub use data::{ContractCall, Fund, Quote, QuoteRequest, RouteHop, TransactionResult};
pub use error::{AgentError, SwapError};
pub use executor::execute_swap;
pub use swap_client::SwapClient;
