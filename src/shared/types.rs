//! Common types used across the application

use std::fmt;

/// Wrapped SOL mint
pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";
/// USDC mint on mainnet-beta
pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
/// USDC mint issued on devnet
pub const USDC_DEVNET_MINT: &str = "4zMMC9srt5Ri5X14GAgXhaHii3GnPAEERYPJgZJDncDU";
/// BONK mint
pub const BONK_MINT: &str = "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263";

pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";
pub const MAINNET_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// SPL Token program id as a base58 string
pub fn spl_token_program_id() -> String {
    spl_token::id().to_string()
}

/// Network environment an account is looked up on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    DevNet,
    MainnetBeta,
}

impl Network {
    /// Public RPC endpoint for this network
    pub fn default_url(&self) -> &'static str {
        match self {
            Network::DevNet => DEVNET_RPC_URL,
            Network::MainnetBeta => MAINNET_RPC_URL,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::DevNet => write!(f, "DevNet"),
            Network::MainnetBeta => write!(f, "Mainnet"),
        }
    }
}

/// RPC base URLs per network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub devnet: String,
    pub mainnet: String,
}

impl Endpoints {
    pub fn url(&self, network: Network) -> &str {
        match network {
            Network::DevNet => &self.devnet,
            Network::MainnetBeta => &self.mainnet,
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            devnet: Network::DevNet.default_url().to_string(),
            mainnet: Network::MainnetBeta.default_url().to_string(),
        }
    }
}

/// A labelled address to probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressEntry {
    pub label: String,
    pub address: String,
}

impl AddressEntry {
    pub fn new(label: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            address: address.into(),
        }
    }
}

/// Built-in table of token mints, in display order.
///
/// "USDC (current)" and "RAY" intentionally share an address: devnet has no
/// RAY mint, so the USDC mint stands in for it.
pub fn default_entries() -> Vec<AddressEntry> {
    vec![
        AddressEntry::new("SOL (wrapped)", SOL_MINT),
        AddressEntry::new("USDC (current)", USDC_MINT),
        AddressEntry::new("RAY", USDC_MINT),
        AddressEntry::new("USDC (devnet)", USDC_DEVNET_MINT),
        AddressEntry::new("BONK", BONK_MINT),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_urls_are_fixed() {
        assert_eq!(Network::DevNet.default_url(), "https://api.devnet.solana.com");
        assert_eq!(Network::MainnetBeta.default_url(), "https://api.mainnet-beta.solana.com");

        let endpoints = Endpoints::default();
        assert_eq!(endpoints.url(Network::DevNet), DEVNET_RPC_URL);
        assert_eq!(endpoints.url(Network::MainnetBeta), MAINNET_RPC_URL);
    }

    #[test]
    fn test_spl_token_program_id() {
        assert_eq!(spl_token_program_id(), "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
    }

    #[test]
    fn test_default_entries_order() {
        let entries = default_entries();
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["SOL (wrapped)", "USDC (current)", "RAY", "USDC (devnet)", "BONK"]
        );
        assert_eq!(entries[1].address, entries[2].address);
    }
}
