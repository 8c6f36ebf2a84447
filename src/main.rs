//! Futures Order Bot — CLI Entry Point
//!
//! Places a single futures order from positional arguments and reports
//! the outcome on stdout (and in the log file).
//!
//! Wiring sequence:
//! 1. Load `.env` (credentials) and config.toml (optional)
//! 2. Init tracing (append-only log file)
//! 3. Load API credentials from env vars
//! 4. Create signed futures client + order executor
//! 5. Place the order, print the outcome

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use futures_order_bot::adapters::binance::{self, BinanceAuth};
use futures_order_bot::config::loader;
use futures_order_bot::domain::order::OrderInput;
use futures_order_bot::telemetry;
use futures_order_bot::usecases::order_submitter::OrderSubmitter;

#[derive(Parser, Debug)]
#[command(name = "futures-order-bot", about = "Binance Futures Order Bot CLI", version)]
struct Cli {
    /// Trading pair symbol (e.g. BTCUSDT)
    symbol: String,

    /// Order side
    #[arg(value_parser = ["BUY", "SELL"])]
    side: String,

    /// Order type
    #[arg(value_parser = ["MARKET", "LIMIT", "STOP_LIMIT"])]
    order_type: String,

    /// Quantity to trade
    quantity: String,

    /// Price for LIMIT or STOP_LIMIT orders
    price: Option<String>,

    /// Stop price (only for STOP_LIMIT)
    stop_price: Option<String>,

    /// Path to the TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: String,
}

impl Cli {
    fn order_input(&self) -> OrderInput {
        OrderInput {
            symbol: self.symbol.clone(),
            side: self.side.clone(),
            order_type: self.order_type.clone(),
            quantity: self.quantity.clone(),
            price: self.price.clone(),
            stop_price: self.stop_price.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // ── 1. Environment + configuration ──────────────────────
    dotenvy::dotenv().ok();
    let config = loader::load_or_default(&cli.config).context("Failed to load configuration")?;

    // ── 2. Logging ──────────────────────────────────────────
    telemetry::init(&config.logging)?;

    // ── 3-4. Credentials + exchange client ──────────────────
    let auth = BinanceAuth::from_env().context("Failed to load API credentials from env")?;
    let executor = binance::connect(auth, &config.exchange).context("Failed to create futures client")?;
    let submitter = OrderSubmitter::new(Arc::new(executor));

    // ── 5. Place the order ──────────────────────────────────
    let input = cli.order_input();
    match submitter.place_order(&input).await {
        Ok(ack) => {
            println!(" '++' {} order placed successfully!", input.order_type);
            println!("{}", serde_json::to_string_pretty(&ack)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!(" 'X' Failed to place order: {}", e.reason());
            Ok(ExitCode::FAILURE)
        }
    }
}
