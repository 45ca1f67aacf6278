// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Blockchain explorer CLI
//!
//! A terminal browser for wallets and transactions on public blockchains,
//! backed by the BlockCypher data client.

mod display;

use anyhow::Result;
use blockcypher::{BlockCypherClient, BlockCypherConfig};
use chain_types::Currency;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "explorer-cli",
    about = "Browse wallets and transactions on public blockchains"
)]
struct Cli {
    /// Base URL of the explorer API (defaults to the public BlockCypher host).
    #[arg(long)]
    api_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a wallet snapshot and list its recent transactions.
    Wallet {
        /// Wallet address to look up.
        address: String,

        /// Currency chain to query (name or ticker symbol).
        #[arg(long, default_value = "bitcoin")]
        currency: Currency,
    },
    /// Fetch a single transaction with its inputs and outputs.
    Transaction {
        /// Transaction hash to look up.
        hash: String,

        /// Currency chain to query (name or ticker symbol).
        #[arg(long, default_value = "bitcoin")]
        currency: Currency,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = BlockCypherConfig {
        timeout_seconds: cli.timeout,
        ..Default::default()
    };
    if let Some(api_url) = cli.api_url {
        config.base_url = api_url;
    }

    let client = BlockCypherClient::new(config)?;

    match cli.command {
        Command::Wallet { address, currency } => {
            info!(%address, currency = currency.name(), "looking up wallet");
            let wallet = client.fetch_wallet(&address, currency).await?;
            display::print_wallet(&wallet, currency);
        }
        Command::Transaction { hash, currency } => {
            info!(%hash, currency = currency.name(), "looking up transaction");
            let transaction = client.fetch_transaction(&hash, currency).await?;
            display::print_transaction(&transaction, currency);
        }
    }

    Ok(())
}
