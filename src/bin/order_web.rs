//! Futures Order Bot — Web Form Entry Point
//!
//! Serves the order form and places orders submitted through it.
//! Runs until SIGINT.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;

use futures_order_bot::adapters::binance::{self, BinanceAuth};
use futures_order_bot::adapters::web;
use futures_order_bot::config::loader;
use futures_order_bot::telemetry;
use futures_order_bot::usecases::order_submitter::OrderSubmitter;

#[derive(Parser, Debug)]
#[command(name = "order-web", about = "Binance Futures order form server", version)]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Environment + configuration ──────────────────────
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let config = loader::load_or_default(&args.config).context("Failed to load configuration")?;

    // ── 2. Logging ──────────────────────────────────────────
    telemetry::init(&config.logging)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.exchange.base_url,
        "Starting order form server"
    );

    // ── 3. Credentials + exchange client (shared by all requests) ──
    let auth = BinanceAuth::from_env().context("Failed to load API credentials from env")?;
    let executor = binance::connect(auth, &config.exchange).context("Failed to create futures client")?;
    let submitter = Arc::new(OrderSubmitter::new(Arc::new(executor)));

    // ── 4. Serve until SIGINT ───────────────────────────────
    web::serve(submitter, &config.web.bind_address, async {
        let _ = signal::ctrl_c().await;
        info!("SIGINT received, shutting down");
    })
    .await?;

    info!("Shutdown complete");
    Ok(())
}
