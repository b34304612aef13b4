//! Direct blockchain reading over Solana JSON-RPC

pub mod account_parser;
pub mod rpc_client;
#[cfg(test)]
pub mod mock;

pub use account_parser::{parse_account_summary, AccountSummary};
pub use rpc_client::{AccountInfoSource, RpcRequest, SolanaRpcClient};
