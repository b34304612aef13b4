use std::time::Duration;
use crate::shared::errors::AppError;
use crate::shared::types::{default_entries, AddressEntry, Endpoints};

/// What to do when a check cannot produce a status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop the run and surface the error
    #[default]
    Abort,
    /// Print the failure inline and move on to the next check
    Continue,
}

/// Runtime configuration assembled from command-line arguments
#[derive(Debug, Clone)]
pub struct AppCfg {
    pub entries: Vec<AddressEntry>,
    pub endpoints: Endpoints,
    pub timeout: Option<Duration>,
    pub error_policy: ErrorPolicy,
}

impl Default for AppCfg {
    fn default() -> Self {
        Self {
            entries: default_entries(),
            endpoints: Endpoints::default(),
            timeout: None,
            error_policy: ErrorPolicy::Abort,
        }
    }
}

impl AppCfg {
    /// Build config with priority: CLI args > defaults
    pub fn from_cli_args(
        entries: &[String],
        devnet_url: Option<String>,
        mainnet_url: Option<String>,
        timeout_secs: Option<u64>,
        continue_on_error: bool,
    ) -> Result<Self, AppError> {
        let mut cfg = Self::default();

        if !entries.is_empty() {
            cfg.entries = entries
                .iter()
                .map(|raw| parse_entry(raw))
                .collect::<Result<_, _>>()?;
        }
        if let Some(url) = devnet_url {
            cfg.endpoints.devnet = url;
        }
        if let Some(url) = mainnet_url {
            cfg.endpoints.mainnet = url;
        }
        if let Some(secs) = timeout_secs {
            if secs == 0 {
                return Err(AppError::ConfigError("--timeout-secs must be at least 1".to_string()));
            }
            cfg.timeout = Some(Duration::from_secs(secs));
        }
        if continue_on_error {
            cfg.error_policy = ErrorPolicy::Continue;
        }

        Ok(cfg)
    }
}

/// Parse a `LABEL=ADDRESS` pair. The address is split on the last `=` so
/// labels may contain one.
pub fn parse_entry(raw: &str) -> Result<AddressEntry, AppError> {
    let (label, address) = raw
        .rsplit_once('=')
        .ok_or_else(|| AppError::ConfigError(format!("entry '{}' is not LABEL=ADDRESS", raw)))?;

    let label = label.trim();
    let address = address.trim();
    if label.is_empty() || address.is_empty() {
        return Err(AppError::ConfigError(format!(
            "entry '{}' needs both a label and an address",
            raw
        )));
    }

    Ok(AddressEntry::new(label, address))
}
