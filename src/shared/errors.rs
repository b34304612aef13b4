//! Error handling for the application

use thiserror::Error;
use crate::shared::types::Network;

/// Failures that keep a single account check from producing a status
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("{network} RPC request failed: {source}")]
    Transport {
        network: Network,
        #[source]
        source: reqwest::Error,
    },

    #[error("{network} returned a malformed response: {reason}")]
    MalformedResponse {
        network: Network,
        reason: String,
    },
}

impl CheckError {
    pub fn malformed(network: Network, reason: impl Into<String>) -> Self {
        CheckError::MalformedResponse {
            network,
            reason: reason.into(),
        }
    }
}

/// General application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Check failed for {label}: {source}")]
    CheckFailed {
        label: String,
        #[source]
        source: CheckError,
    },

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
