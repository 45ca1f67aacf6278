// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Client configuration

/// Default base URL for the public BlockCypher API
pub const DEFAULT_API_URL: &str = "https://api.blockcypher.com";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Default cap on the number of transactions returned with a wallet
pub const DEFAULT_WALLET_TX_LIMIT: u32 = 50;

/// Configuration for the BlockCypher API client
#[derive(Debug, Clone)]
pub struct BlockCypherConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// Maximum number of transactions requested with a wallet lookup
    pub wallet_tx_limit: u32,
}

impl Default for BlockCypherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            wallet_tx_limit: DEFAULT_WALLET_TX_LIMIT,
        }
    }
}
