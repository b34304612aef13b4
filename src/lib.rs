//! acctprobe - compare Solana account presence across DevNet and MainnetBeta

pub mod domain;
pub mod infrastructure;
pub mod application;
pub mod shared;

// Re-export main types for convenience
pub use application::report::{ReportDriver, ReportSummary};
pub use domain::account::{AccountChecker, AccountInfo, AccountStatus};
pub use infrastructure::blockchain::{AccountInfoSource, SolanaRpcClient};
pub use shared::config::{AppCfg, ErrorPolicy};
pub use shared::types::{AddressEntry, Network};
