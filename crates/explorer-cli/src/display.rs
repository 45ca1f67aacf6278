// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Terminal presentation of wallets and transactions
//!
//! Presentation concerns live here, not in the client library: amounts are
//! converted from the smallest currency unit only at the display boundary,
//! and confirmation counts are capped the way block explorers usually show
//! them.

use blockcypher::{Transaction, Wallet};
use chain_types::Currency;

/// Smallest-unit denominator; all supported chains use 8 decimal places
const COIN_UNITS: u64 = 100_000_000;

/// Confirmation counts above this render as "6+"
const CONFIRMATION_DISPLAY_CAP: u32 = 6;

/// Render a smallest-unit amount in coin denomination with the ticker suffix
pub fn format_amount(value: u64, currency: Currency) -> String {
    let whole = value / COIN_UNITS;
    let frac = value % COIN_UNITS;
    format!("{whole}.{frac:08} {}", currency.symbol())
}

/// Render a bounded confirmation count ("0" through "6", then "6+")
pub fn confirmation_display(transaction: &Transaction) -> String {
    let capped = transaction.confirmations_capped(CONFIRMATION_DISPLAY_CAP);
    if transaction.confirmations > CONFIRMATION_DISPLAY_CAP {
        format!("{capped}+")
    } else {
        capped.to_string()
    }
}

/// Print a wallet summary followed by one row per transaction
pub fn print_wallet(wallet: &Wallet, currency: Currency) {
    println!("{} wallet {}", currency.name(), wallet.address);
    println!(
        "  balance:             {}",
        format_amount(wallet.balance, currency)
    );
    println!(
        "  unconfirmed balance: {}",
        format_amount(wallet.unconfirmed_balance, currency)
    );
    println!(
        "  final balance:       {}",
        format_amount(wallet.final_balance, currency)
    );
    println!(
        "  total received:      {}",
        format_amount(wallet.total_received, currency)
    );
    println!(
        "  total sent:          {}",
        format_amount(wallet.total_sent, currency)
    );
    println!(
        "  transactions:        {} ({} unconfirmed)",
        wallet.final_n_tx, wallet.unconfirmed_n_tx
    );

    if wallet.txs.is_empty() {
        println!();
        println!("No transactions yet.");
        return;
    }

    println!();
    println!("Recent transactions:");
    for tx in &wallet.txs {
        println!(
            "  {}  {}  {}  {} confirmations",
            tx.confirmed.format("%Y-%m-%d %H:%M"),
            tx.hash,
            format_amount(tx.total, currency),
            confirmation_display(tx),
        );
    }
}

/// Print one transaction with its metadata, inputs, and outputs
pub fn print_transaction(transaction: &Transaction, currency: Currency) {
    println!("{} transaction {}", currency.name(), transaction.hash);
    println!(
        "  block:         {} (index {})",
        transaction.block_height, transaction.block_index
    );
    println!(
        "  confirmed:     {}",
        transaction.confirmed.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("  received:      {}", transaction.received);
    println!(
        "  confirmations: {}",
        confirmation_display(transaction)
    );
    println!(
        "  total:         {}",
        format_amount(transaction.total, currency)
    );
    println!(
        "  fees:          {}",
        format_amount(transaction.fees, currency)
    );
    println!("  size:          {} bytes", transaction.size);
    println!("  preference:    {}", transaction.preference);
    if transaction.double_spend {
        println!("  double spend detected");
    }
    if !transaction.has_consistent_io_counts() {
        println!("  note: reported input/output counts disagree with the decoded lists");
    }

    println!();
    println!("Inputs ({}):", transaction.inputs.len());
    for input in &transaction.inputs {
        println!(
            "  {}  {}",
            join_or_placeholder(&input.addresses),
            format_amount(input.output_value, currency)
        );
    }

    println!();
    println!("Outputs ({}):", transaction.outputs.len());
    for output in &transaction.outputs {
        let spent = match &output.spent_by {
            Some(hash) => format!("  spent by {hash}"),
            None => String::new(),
        };
        println!(
            "  {}  {}{}",
            join_or_placeholder(&output.addresses),
            format_amount(output.value, currency),
            spent
        );
    }
}

fn join_or_placeholder(addresses: &[String]) -> String {
    if addresses.is_empty() {
        "(no address)".to_string()
    } else {
        addresses.join(", ")
    }
}
