// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Response schemas for wallet and transaction lookups
//!
//! These records mirror the upstream JSON shape field for field; names are
//! the API's snake_case keys, verbatim. Everything is an immutable value
//! once decoded: a fetch produces a fresh snapshot and nothing is merged or
//! mutated afterwards.
//!
//! The `confirmed` timestamp is parsed against one fixed format
//! (`2014-03-29T01:29:19.000Z` style); any other shape fails decode rather
//! than defaulting. The `received` timestamp is kept as a raw string because
//! the upstream format for it is looser.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of an address's on-chain state at fetch time
///
/// All amounts are integers in the smallest currency unit. The transaction
/// list arrives in API order (most recent first) and is capped by the
/// `limit` query parameter of the wallet lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    /// The wallet address
    pub address: String,
    /// Total amount ever received, in the smallest currency unit
    pub total_received: u64,
    /// Total amount ever sent, in the smallest currency unit
    pub total_sent: u64,
    /// Confirmed balance
    pub balance: u64,
    /// Balance of unconfirmed transactions
    pub unconfirmed_balance: u64,
    /// Balance including unconfirmed transactions
    pub final_balance: u64,
    /// Number of confirmed transactions
    pub n_tx: u32,
    /// Number of unconfirmed transactions
    pub unconfirmed_n_tx: u32,
    /// Total number of transactions including unconfirmed ones
    pub final_n_tx: u32,
    /// Recent transactions, in API order
    pub txs: Vec<Transaction>,
}

/// One blockchain transaction with its inputs and outputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Hash of the block containing this transaction
    pub block_hash: String,
    /// Height of the containing block; -1 while unconfirmed
    pub block_height: i64,
    /// Position within the containing block; -1 while unconfirmed
    pub block_index: i64,
    /// Transaction hash
    pub hash: String,
    /// All addresses involved in the transaction
    pub addresses: Vec<String>,
    /// Total value transferred, in the smallest currency unit
    pub total: u64,
    /// Fees paid, in the smallest currency unit
    pub fees: u64,
    /// Size in bytes
    pub size: u32,
    /// Fee-based priority classification ("high", "medium", "low")
    pub preference: String,
    /// Address of the peer that relayed the transaction, if known
    pub relayed_by: Option<String>,
    /// Confirmation timestamp, strict fixed format
    #[serde(with = "confirmed_format")]
    pub confirmed: DateTime<Utc>,
    /// First-seen timestamp, kept raw
    pub received: String,
    /// Protocol version
    pub ver: u32,
    /// Whether a double spend against this transaction was detected
    pub double_spend: bool,
    /// Input count as reported by the API
    pub vin_sz: u32,
    /// Output count as reported by the API
    pub vout_sz: u32,
    /// Number of confirmations
    pub confirmations: u32,
    /// Confidence the transaction will be confirmed, 0-100
    pub confidence: u32,
    /// Transaction inputs, in API order
    pub inputs: Vec<Input>,
    /// Transaction outputs, in API order
    pub outputs: Vec<Output>,
}

impl Transaction {
    /// Whether the reported `vin_sz`/`vout_sz` counts agree with the decoded
    /// input and output lists
    ///
    /// The API is expected to keep these consistent, but a mismatch is a
    /// tolerated inconsistency, not a decode failure.
    pub fn has_consistent_io_counts(&self) -> bool {
        self.vin_sz as usize == self.inputs.len() && self.vout_sz as usize == self.outputs.len()
    }

    /// Whether the transaction has at least one confirmation
    pub fn is_confirmed(&self) -> bool {
        self.confirmations > 0
    }

    /// Confirmation count saturated at `cap`, for bounded display
    pub fn confirmations_capped(&self, cap: u32) -> u32 {
        self.confirmations.min(cap)
    }
}

/// One transaction input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    /// Hash of the transaction holding the consumed output
    pub prev_hash: String,
    /// Index of the consumed output in that transaction; -1 for coinbase
    pub output_index: i64,
    /// Value of the consumed output, in the smallest currency unit
    pub output_value: u64,
    /// Script type of the consumed output
    pub script_type: String,
    /// Raw unlocking script, hex encoded
    pub script: String,
    /// Addresses associated with the consumed output
    pub addresses: Vec<String>,
    /// Sequence number
    pub sequence: u64,
    /// Height of the block holding the consumed output
    pub age: u64,
    /// Name of the sending wallet, when the API knows it
    pub wallet_name: Option<String>,
    /// Token of the sending wallet, when the API knows it
    pub wallet_token: Option<String>,
}

/// One transaction output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
    /// Output value, in the smallest currency unit
    pub value: u64,
    /// Raw locking script, hex encoded
    pub script: String,
    /// Addresses the output pays to; empty for null-data outputs
    #[serde(default, deserialize_with = "null_as_empty")]
    pub addresses: Vec<String>,
    /// Script type ("pay-to-pubkey-hash", "null-data", ...)
    pub script_type: String,
    /// Hash of the transaction that spent this output, if any
    pub spent_by: Option<String>,
    /// Embedded data for null-data outputs, hex encoded
    pub data_hex: Option<String>,
    /// Embedded data for null-data outputs, decoded to text when possible
    pub data_string: Option<String>,
}

/// Null-data outputs carry `"addresses": null` upstream; decode that (or an
/// absent key) as an empty list instead of failing.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let addresses = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(addresses.unwrap_or_default())
}

/// Strict serde codec for the `confirmed` timestamp
///
/// The upstream API emits full ISO-8601 with exactly three fractional digits
/// and a literal `Z` suffix. Documents with any other shape must fail decode
/// rather than silently defaulting.
mod confirmed_format {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    /// The one accepted timestamp shape, e.g. `2014-03-29T01:29:19.000Z`
    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let naive = NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(de::Error::custom)?;
        Ok(naive.and_utc())
    }
}
