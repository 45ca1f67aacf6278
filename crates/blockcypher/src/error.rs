// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the BlockCypher API client
//!
//! The outward-facing taxonomy keeps the three kinds callers branch on:
//! URL generation failure, wallet not found, and transaction not found. The
//! two not-found kinds carry the underlying [`FetchFailure`] as a source, so
//! the transport/status/decode distinction and the HTTP status code remain
//! available for diagnostics.

use chain_types::Currency;
use thiserror::Error;

/// Errors that can occur when working with the BlockCypher API client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration error, detected at client construction
    #[error("configuration error: {0}")]
    Config(String),

    /// The address or hash could not be combined with the currency into a
    /// valid request URL. Detected before any network call.
    #[error("could not build a request URL from {input:?}")]
    UrlGeneration {
        /// The base URL or path input that failed URL construction
        input: String,
    },

    /// No wallet could be produced for the address. Covers transport
    /// failure, a non-success HTTP status, and an undecodable body.
    #[error("no wallet found for {currency} address {address}")]
    WalletNotFound {
        /// The address that was looked up
        address: String,
        /// The currency chain that was queried
        currency: Currency,
        /// The underlying failure
        #[source]
        source: FetchFailure,
    },

    /// No transaction could be produced for the hash. Covers transport
    /// failure, a non-success HTTP status, and an undecodable body.
    #[error("no transaction found for {currency} hash {hash}")]
    TransactionNotFound {
        /// The transaction hash that was looked up
        hash: String,
        /// The currency chain that was queried
        currency: Currency,
        /// The underlying failure
        #[source]
        source: FetchFailure,
    },
}

/// Underlying cause of a failed fetch
#[derive(Debug, Error)]
pub enum FetchFailure {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured deadline elapsed
    #[error("request timed out after {seconds} seconds")]
    Timeout {
        /// The timeout that elapsed, in seconds
        seconds: u64,
    },

    /// The API answered with a non-success status
    #[error("API returned status {status}")]
    Status {
        /// The HTTP status code
        status: u16,
    },

    /// The response body did not decode against the expected schema
    #[error("response decoding failed: {0}")]
    Decode(#[from] serde_json::Error),
}
