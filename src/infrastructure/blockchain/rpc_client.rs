//! Solana JSON-RPC client for account lookups

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::shared::errors::CheckError;
use crate::shared::types::{Endpoints, Network};

const JSONRPC_VERSION: &str = "2.0";
const REQUEST_ID: u64 = 1;
const GET_ACCOUNT_INFO: &str = "getAccountInfo";

/// Source of raw `getAccountInfo` response bodies
#[async_trait]
pub trait AccountInfoSource: Send + Sync {
    /// Fetch the parsed JSON body of a `getAccountInfo` call. RPC-level
    /// errors are part of the body, not of the `Err` branch.
    async fn get_account_info(&self, network: Network, address: &str) -> Result<Value, CheckError>;
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EncodingConfig {
    pub encoding: &'static str,
}

/// JSON-RPC 2.0 request envelope
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'static str,
    pub params: (&'a str, EncodingConfig),
}

impl<'a> RpcRequest<'a> {
    pub fn get_account_info(address: &'a str) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id: REQUEST_ID,
            method: GET_ACCOUNT_INFO,
            params: (address, EncodingConfig { encoding: "base64" }),
        }
    }
}

/// HTTP JSON-RPC client holding one endpoint per network
pub struct SolanaRpcClient {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl SolanaRpcClient {
    /// Create new RPC client. Without a timeout, a request waits as long as
    /// the endpoint keeps the connection open.
    pub fn new(endpoints: Endpoints, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoints,
        })
    }

    /// URL a request for `network` is sent to
    pub fn endpoint(&self, network: Network) -> &str {
        self.endpoints.url(network)
    }
}

#[async_trait]
impl AccountInfoSource for SolanaRpcClient {
    async fn get_account_info(&self, network: Network, address: &str) -> Result<Value, CheckError> {
        let url = self.endpoint(network);
        let request = RpcRequest::get_account_info(address);
        debug!(%network, url, address, "sending getAccountInfo");

        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|source| CheckError::Transport { network, source })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| CheckError::Transport { network, source })?;
        debug!(%network, %status, bytes = body.len(), "received response");

        serde_json::from_str(&body).map_err(|e| {
            CheckError::malformed(network, format!("body is not JSON ({}): {}", status, e))
        })
    }
}
