use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::shared::errors::CheckError;
use crate::shared::types::Network;

use super::rpc_client::AccountInfoSource;

enum Canned {
    Body(Value),
    Malformed(String),
}

/// Mock RPC backend returning canned `getAccountInfo` bodies per
/// (network, address). Unknown addresses answer with a null value.
pub struct MockAccountSource {
    responses: HashMap<(Network, String), Canned>,
    calls: Mutex<Vec<(Network, String)>>,
}

impl MockAccountSource {
    pub fn builder() -> MockAccountSourceBuilder {
        MockAccountSourceBuilder {
            responses: HashMap::new(),
        }
    }

    /// Every (network, address) requested so far, in order
    pub fn calls(&self) -> Vec<(Network, String)> {
        self.calls.lock().unwrap().clone()
    }
}

pub struct MockAccountSourceBuilder {
    responses: HashMap<(Network, String), Canned>,
}

impl MockAccountSourceBuilder {
    pub fn with_account(
        self,
        network: Network,
        address: &str,
        owner: &str,
        data_b64: &str,
    ) -> Self {
        self.with_body(network, address, result_body(account_json(owner, data_b64)))
    }

    pub fn with_rpc_error(self, network: Network, address: &str, code: i64, message: &str) -> Self {
        self.with_body(
            network,
            address,
            json!({
                "jsonrpc": "2.0",
                "error": { "code": code, "message": message },
                "id": 1
            }),
        )
    }

    pub fn with_body(mut self, network: Network, address: &str, body: Value) -> Self {
        self.responses.insert((network, address.to_string()), Canned::Body(body));
        self
    }

    pub fn with_malformed(mut self, network: Network, address: &str, reason: &str) -> Self {
        self.responses
            .insert((network, address.to_string()), Canned::Malformed(reason.to_string()));
        self
    }

    pub fn build(self) -> MockAccountSource {
        MockAccountSource {
            responses: self.responses,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AccountInfoSource for MockAccountSource {
    async fn get_account_info(&self, network: Network, address: &str) -> Result<Value, CheckError> {
        self.calls.lock().unwrap().push((network, address.to_string()));

        match self.responses.get(&(network, address.to_string())) {
            Some(Canned::Body(body)) => Ok(body.clone()),
            Some(Canned::Malformed(reason)) => Err(CheckError::malformed(network, reason.clone())),
            None => Ok(result_body(Value::Null)),
        }
    }
}

/// Successful response wrapping `value`
pub fn result_body(value: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "result": {
            "context": { "apiVersion": "2.1.14", "slot": 341_197_053u64 },
            "value": value
        },
        "id": 1
    })
}

/// Account object as returned with base64 encoding
pub fn account_json(owner: &str, data_b64: &str) -> Value {
    json!({
        "lamports": 1_461_600u64,
        "data": [data_b64, "base64"],
        "owner": owner,
        "executable": false,
        "rentEpoch": u64::MAX,
        "space": 82
    })
}
