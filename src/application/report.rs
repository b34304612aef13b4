//! Console report comparing account presence across networks

use std::io::Write;
use std::sync::Arc;

use solana_sdk::pubkey::Pubkey;
use tracing::warn;

use crate::domain::account::{AccountChecker, AccountStatus};
use crate::infrastructure::blockchain::{parse_account_summary, AccountInfoSource};
use crate::shared::config::ErrorPolicy;
use crate::shared::errors::{AppError, CheckError};
use crate::shared::types::{spl_token_program_id, AddressEntry, Network};

type CheckOutcome = Result<AccountStatus, CheckError>;

/// Totals for a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportSummary {
    pub entries: usize,
    pub failed_checks: usize,
}

/// Walks the address table and prints one block per entry
pub struct ReportDriver<S: AccountInfoSource> {
    checker: AccountChecker<S>,
    error_policy: ErrorPolicy,
    token_program: String,
}

impl<S: AccountInfoSource> ReportDriver<S> {
    pub fn new(source: Arc<S>, error_policy: ErrorPolicy) -> Self {
        Self {
            checker: AccountChecker::new(source),
            error_policy,
            token_program: spl_token_program_id(),
        }
    }

    /// Check every entry on DevNet then Mainnet, in table order.
    ///
    /// Each line is written as soon as its check completes. Under
    /// [`ErrorPolicy::Abort`] the first failed check ends the run and
    /// everything already written stays in `out`.
    pub async fn run<W: Write>(
        &self,
        entries: &[AddressEntry],
        out: &mut W,
    ) -> Result<ReportSummary, AppError> {
        writeln!(out, "🔍 Checking {} accounts on DevNet and Mainnet", entries.len())?;
        writeln!(out)?;

        let mut summary = ReportSummary::default();
        for entry in entries {
            if let Err(e) = entry.address.parse::<Pubkey>() {
                warn!(
                    label = %entry.label,
                    address = %entry.address,
                    "address is not a valid pubkey: {}",
                    e
                );
            }

            writeln!(out, "🔍 {}: {}", entry.label, entry.address)?;
            out.flush()?;

            let devnet = self.check(entry, Network::DevNet).await?;
            render_status(out, Network::DevNet, &devnet)?;
            out.flush()?;

            let mainnet = self.check(entry, Network::MainnetBeta).await?;
            render_status(out, Network::MainnetBeta, &mainnet)?;

            render_owner(out, &devnet, &self.token_program)?;
            writeln!(out)?;
            out.flush()?;

            summary.failed_checks += devnet.is_err() as usize + mainnet.is_err() as usize;
            summary.entries += 1;
        }

        Ok(summary)
    }

    async fn check(
        &self,
        entry: &AddressEntry,
        network: Network,
    ) -> Result<CheckOutcome, AppError> {
        match self.checker.check(&entry.address, network).await {
            Ok(status) => Ok(Ok(status)),
            Err(e) if self.error_policy == ErrorPolicy::Continue => {
                warn!(label = %entry.label, "{}", e);
                Ok(Err(e))
            }
            Err(source) => Err(AppError::CheckFailed {
                label: entry.label.clone(),
                source,
            }),
        }
    }
}

fn render_status<W: Write>(
    out: &mut W,
    network: Network,
    outcome: &CheckOutcome,
) -> std::io::Result<()> {
    match outcome {
        Ok(AccountStatus::Exists(_)) => writeln!(out, "   📊 {}: ✅ EXISTS", network),
        Ok(AccountStatus::NotFound) => writeln!(out, "   📊 {}: ❌ NOT FOUND", network),
        Ok(AccountStatus::RpcError(payload)) => {
            writeln!(out, "   📊 {}: ❌ NOT FOUND", network)?;
            writeln!(out, "   ⚠️ RPC error: {}", payload)
        }
        Err(e) => writeln!(out, "   📊 {}: ❌ CHECK FAILED: {}", network, e),
    }
}

/// Owner and account details, printed for DevNet hits only
fn render_owner<W: Write>(
    out: &mut W,
    devnet: &CheckOutcome,
    token_program: &str,
) -> std::io::Result<()> {
    let Ok(AccountStatus::Exists(info)) = devnet else {
        return Ok(());
    };

    if let Some(owner) = &info.owner {
        writeln!(out, "   Owner: {}", owner)?;
        if owner == token_program {
            writeln!(out, "   ✅ Owned by SPL Token Program")?;
        } else {
            writeln!(out, "   ⚠️ Different owner (expected {})", token_program)?;
        }
    }
    if let Some(account) = parse_account_summary(&info.raw) {
        writeln!(
            out,
            "   Data size: {} bytes, {} lamports",
            account.data_len, account.lamports
        )?;
        if account.executable {
            writeln!(out, "   Executable: yes")?;
        }
    }

    Ok(())
}
