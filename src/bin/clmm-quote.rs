use anyhow::{Context, Result};
use clap::Parser;
use clmm_swap_quote::config::QuoterConfig;
use clmm_swap_quote::quoter::{QuoteRequest, Quoter};
use clmm_swap_quote::snapshot::PoolSnapshot;
use clmm_swap_quote::{Address, U256};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "clmm-quote")]
#[command(about = "Quote an exact-input swap against a concentrated-liquidity pool snapshot")]
struct Args {
    /// Path to quoter configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON snapshot with pools and their initialized ticks
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Address of the token being sold
    #[arg(long)]
    token_in: Address,

    /// Address of the token being bought
    #[arg(long)]
    token_out: Address,

    /// Input amount in the smallest unit of `token_in`
    #[arg(short, long, value_parser = parse_amount)]
    amount_in: U256,

    /// Quote this pool instead of the deepest pool for the pair
    #[arg(short, long)]
    pool: Option<Address>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_amount(raw: &str) -> Result<U256, String> {
    U256::from_str_radix(raw.trim(), 10).map_err(|e| format!("invalid amount {raw:?}: {e}"))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => QuoterConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => QuoterConfig::default(),
    };

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let snapshot = PoolSnapshot::load(&args.snapshot)
        .with_context(|| format!("loading snapshot from {}", args.snapshot.display()))?;
    let (pools, ticks) = snapshot.into_providers();
    info!(pools = pools.len(), max_iterations = config.max_iterations, "snapshot loaded");

    let quoter = Quoter::from_config(pools, ticks, &config);
    let response = quoter
        .quote(&QuoteRequest {
            token_in: args.token_in,
            token_out: args.token_out,
            amount_in: args.amount_in,
            pool_address: args.pool,
        })
        .context("quote failed")?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
