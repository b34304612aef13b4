//! Account existence checking

use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::infrastructure::blockchain::AccountInfoSource;
use crate::shared::errors::CheckError;
use crate::shared::types::Network;

/// Account found on a network
#[derive(Debug, Clone, PartialEq)]
pub struct AccountInfo {
    /// `result.value.owner`, when present as a string
    pub owner: Option<String>,
    /// The complete `result` object, untouched
    pub raw: Value,
}

/// Outcome of one `getAccountInfo` lookup
#[derive(Debug, Clone, PartialEq)]
pub enum AccountStatus {
    Exists(AccountInfo),
    NotFound,
    /// The node answered with an `error` member; carried verbatim
    RpcError(Value),
}

impl AccountStatus {
    pub fn exists(&self) -> bool {
        matches!(self, AccountStatus::Exists(_))
    }

    /// Classify a parsed JSON-RPC response body
    pub fn from_response(network: Network, body: &Value) -> Result<Self, CheckError> {
        if let Some(error) = body.get("error") {
            return Ok(AccountStatus::RpcError(error.clone()));
        }

        let result = body.get("result").ok_or_else(|| {
            CheckError::malformed(network, "response has neither result nor error")
        })?;
        let value = result
            .get("value")
            .ok_or_else(|| CheckError::malformed(network, "result has no value field"))?;

        if value.is_null() {
            return Ok(AccountStatus::NotFound);
        }

        Ok(AccountStatus::Exists(AccountInfo {
            owner: value.get("owner").and_then(Value::as_str).map(str::to_string),
            raw: result.clone(),
        }))
    }
}

/// Checks whether addresses exist on a given network
pub struct AccountChecker<S: AccountInfoSource> {
    source: Arc<S>,
}

impl<S: AccountInfoSource> AccountChecker<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    pub async fn check(
        &self,
        address: &str,
        network: Network,
    ) -> Result<AccountStatus, CheckError> {
        let body = self.source.get_account_info(network, address).await?;
        let status = AccountStatus::from_response(network, &body)?;
        debug!(%network, address, exists = status.exists(), "account checked");
        Ok(status)
    }
}
