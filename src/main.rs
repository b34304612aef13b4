use std::sync::Arc;

use acctprobe::{AppCfg, ReportDriver, SolanaRpcClient};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Check whether Solana accounts exist on DevNet and Mainnet and who owns them"
)]
struct Args {
    /// Account to check as LABEL=ADDRESS (repeatable, replaces the built-in table)
    #[arg(long = "entry", value_name = "LABEL=ADDRESS")]
    entries: Vec<String>,

    /// DevNet RPC endpoint URL
    #[arg(long)]
    devnet_url: Option<String>,

    /// Mainnet-beta RPC endpoint URL
    #[arg(long)]
    mainnet_url: Option<String>,

    /// HTTP request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Report failed checks inline instead of stopping
    #[arg(long)]
    continue_on_error: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let app_cfg = AppCfg::from_cli_args(
        &args.entries,
        args.devnet_url,
        args.mainnet_url,
        args.timeout_secs,
        args.continue_on_error,
    )?;
    info!("Configuration: {:?}", app_cfg);

    let client = SolanaRpcClient::new(app_cfg.endpoints.clone(), app_cfg.timeout)
        .context("build HTTP client")?;
    let driver = ReportDriver::new(Arc::new(client), app_cfg.error_policy);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = driver.run(&app_cfg.entries, &mut out).await?;
    info!(
        entries = summary.entries,
        failed = summary.failed_checks,
        "report finished"
    );

    Ok(())
}
