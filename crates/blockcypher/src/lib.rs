// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! BlockCypher API client for wallet and transaction lookups
//!
//! This crate wraps the public BlockCypher REST API: it builds request URLs,
//! issues HTTP GETs, decodes JSON response bodies into typed records, and
//! classifies failures into a small typed error taxonomy.
//!
//! # Architecture
//!
//! - **Endpoint Builder**: [`endpoints`] - pure URL construction per currency
//! - **Response Schemas**: [`models`] - [`models::Wallet`], [`models::Transaction`]
//!   and their inputs/outputs, mirroring the upstream JSON shape
//! - **Data Client**: [`client::BlockCypherClient`] - one fetch per call,
//!   exactly one outcome delivered
//! - **Error Taxonomy**: [`error`] - entity-scoped not-found kinds with the
//!   underlying transport/status/decode cause preserved
//!
//! # Example
//!
//! ```rust,no_run
//! use blockcypher::{BlockCypherClient, BlockCypherConfig};
//! use chain_types::Currency;
//!
//! # async fn run() -> Result<(), blockcypher::ClientError> {
//! let client = BlockCypherClient::new(BlockCypherConfig::default())?;
//! let wallet = client
//!     .fetch_wallet("1BitcoinEaterAddressDontSendf59kuE", Currency::Bitcoin)
//!     .await?;
//! println!("balance: {}", wallet.balance);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;

pub use client::BlockCypherClient;
pub use config::BlockCypherConfig;
pub use error::{ClientError, FetchFailure};
pub use models::{Input, Output, Transaction, Wallet};
