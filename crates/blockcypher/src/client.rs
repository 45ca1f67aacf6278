// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! The wallet/transaction data client
//!
//! [`BlockCypherClient`] executes one fetch per call: build the URL, issue a
//! single HTTP GET, decode the body against the expected schema, and deliver
//! exactly one outcome. There are no retries, no caching, and no shared
//! mutable state between calls; concurrent fetches are independent and may
//! complete in any order.

use std::time::Duration;

use chain_types::Currency;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::time::timeout;
use tracing::{debug, warn};
use url::Url;

use crate::{
    config::BlockCypherConfig,
    endpoints,
    error::{ClientError, FetchFailure},
    models::{Transaction, Wallet},
};

/// BlockCypher API client
///
/// Holds a pooled HTTP client and the configuration it was built from. Both
/// are read-only after construction, so one instance can serve concurrent
/// fetches from multiple tasks.
#[derive(Debug, Clone)]
pub struct BlockCypherClient {
    client: Client,
    config: BlockCypherConfig,
}

impl BlockCypherClient {
    /// Create a new client from the given configuration
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the base URL is empty or the HTTP
    /// client cannot be constructed.
    pub fn new(config: BlockCypherConfig) -> Result<Self, ClientError> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::Config("base URL cannot be empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("chain-explorer/0.1.0")
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Fetch the wallet snapshot for an address
    ///
    /// # Errors
    ///
    /// * [`ClientError::UrlGeneration`] if no request URL could be built;
    ///   no network call is made in that case
    /// * [`ClientError::WalletNotFound`] for transport failures, non-success
    ///   statuses, and undecodable bodies, with the cause preserved
    pub async fn fetch_wallet(
        &self,
        address: &str,
        currency: Currency,
    ) -> Result<Wallet, ClientError> {
        let url = endpoints::wallet_url(
            &self.config.base_url,
            address,
            currency,
            self.config.wallet_tx_limit,
        )?;

        debug!(%url, address, currency = currency.name(), "fetching wallet");

        let wallet: Wallet = self.get_json(url).await.map_err(|source| {
            warn!(address, currency = currency.name(), error = %source, "wallet fetch failed");
            ClientError::WalletNotFound {
                address: address.to_string(),
                currency,
                source,
            }
        })?;

        for tx in wallet
            .txs
            .iter()
            .filter(|tx| !tx.has_consistent_io_counts())
        {
            warn!(
                address,
                hash = %tx.hash,
                "transaction reports input/output counts that disagree with its lists"
            );
        }

        Ok(wallet)
    }

    /// Fetch one transaction by hash
    ///
    /// # Errors
    ///
    /// * [`ClientError::UrlGeneration`] if no request URL could be built;
    ///   no network call is made in that case
    /// * [`ClientError::TransactionNotFound`] for transport failures,
    ///   non-success statuses, and undecodable bodies, with the cause
    ///   preserved
    pub async fn fetch_transaction(
        &self,
        hash: &str,
        currency: Currency,
    ) -> Result<Transaction, ClientError> {
        let url = endpoints::transaction_url(&self.config.base_url, hash, currency)?;

        debug!(%url, hash, currency = currency.name(), "fetching transaction");

        let transaction: Transaction = self.get_json(url).await.map_err(|source| {
            warn!(hash, currency = currency.name(), error = %source, "transaction fetch failed");
            ClientError::TransactionNotFound {
                hash: hash.to_string(),
                currency,
                source,
            }
        })?;

        if !transaction.has_consistent_io_counts() {
            warn!(
                hash,
                "transaction reports input/output counts that disagree with its lists"
            );
        }

        Ok(transaction)
    }

    /// Issue one GET and decode the body
    ///
    /// Non-success statuses are reported as [`FetchFailure::Status`] without
    /// reading the body; the status code is the only signal the API gives
    /// for a missing entity.
    async fn get_json<T>(&self, url: Url) -> Result<T, FetchFailure>
    where
        T: DeserializeOwned,
    {
        let response = timeout(
            Duration::from_secs(self.config.timeout_seconds),
            self.client.get(url).send(),
        )
        .await
        .map_err(|_| FetchFailure::Timeout {
            seconds: self.config.timeout_seconds,
        })?
        .map_err(FetchFailure::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(FetchFailure::Transport)?;
        serde_json::from_slice(&body).map_err(FetchFailure::Decode)
    }
}
