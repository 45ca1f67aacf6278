// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Request URL construction
//!
//! Pure construction of the two endpoint shapes the client uses:
//!
//! - `<base>/v1/<symbol>/main/addrs/<address>/full?limit=<n>`
//! - `<base>/v1/<symbol>/main/txs/<hash>`
//!
//! Addresses and hashes are caller-supplied opaque strings. They are placed
//! as percent-encoded path segments and are not otherwise validated; whether
//! an address is well-formed for its chain is the server's call.

use chain_types::Currency;
use url::Url;

use crate::error::ClientError;

/// Build the wallet lookup URL for an address on the given currency chain
///
/// # Errors
///
/// Returns [`ClientError::UrlGeneration`] if the base URL is invalid or
/// cannot carry path segments. No network activity is involved.
pub fn wallet_url(
    base_url: &str,
    address: &str,
    currency: Currency,
    limit: u32,
) -> Result<Url, ClientError> {
    let mut url = api_url(
        base_url,
        &["v1", currency.api_symbol(), "main", "addrs", address, "full"],
    )?;
    url.query_pairs_mut()
        .append_pair("limit", &limit.to_string());
    Ok(url)
}

/// Build the transaction lookup URL for a hash on the given currency chain
///
/// # Errors
///
/// Returns [`ClientError::UrlGeneration`] if the base URL is invalid or
/// cannot carry path segments. No network activity is involved.
pub fn transaction_url(base_url: &str, hash: &str, currency: Currency) -> Result<Url, ClientError> {
    api_url(base_url, &["v1", currency.api_symbol(), "main", "txs", hash])
}

fn api_url(base_url: &str, segments: &[&str]) -> Result<Url, ClientError> {
    let mut url = Url::parse(base_url).map_err(|_| ClientError::UrlGeneration {
        input: base_url.to_string(),
    })?;
    url.path_segments_mut()
        .map_err(|()| ClientError::UrlGeneration {
            input: base_url.to_string(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
