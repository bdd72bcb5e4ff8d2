//! Staking metrics service.
//!
//! Run with: cargo run
//!
//! Serves integer APR percentages, locked-value statistics and circulating
//! supply over HTTP, backed by nothing but read-only JSON-RPC calls.

use clap::Parser;
use color_eyre::eyre::Result;
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stakemetrics::config::Config;
use stakemetrics::registry;
use stakemetrics::server;

#[derive(Debug, Parser)]
#[command(name = "stakemetrics", about = "Staking metrics over read-only RPC")]
struct Args {
    /// Load configuration from a TOML file instead of the environment.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Override the HTTP bind address.
    #[arg(long)]
    bind: Option<String>,
}

fn print_banner() {
    println!();
    println!(
        "{}",
        style("═══════════════════════════════════════════════════").cyan()
    );
    println!(
        "{}",
        style(" 📊 STAKEMETRICS - AMM Staking Pool Metrics").cyan().bold()
    );
    println!(
        "{}",
        style("    APR | Locked Value | Circulating Supply").cyan()
    );
    println!(
        "{}",
        style("═══════════════════════════════════════════════════").cyan()
    );
    println!();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    print_banner();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    config.validate()?;
    config.print_summary();
    tracing::info!("supported chains: {:?}", registry::supported_chains());

    let bind_addr = config.bind_addr.clone();
    let app = server::router(config);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
