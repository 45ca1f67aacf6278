// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Supported cryptocurrency identifiers
//!
//! This module provides the closed set of blockchains the explorer API can be
//! queried for, along with the ticker symbols used to build API paths and the
//! human-readable names used for display.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Supported cryptocurrency identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    /// Bitcoin - symbol: BTC
    Bitcoin,
    /// Litecoin - symbol: LTC
    Litecoin,
    /// Dogecoin - symbol: DOGE
    Dogecoin,
    /// Dash - symbol: DASH
    Dash,
}

impl Currency {
    /// Returns the upper-cased ticker symbol for this currency
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Bitcoin => "BTC",
            Self::Litecoin => "LTC",
            Self::Dogecoin => "DOGE",
            Self::Dash => "DASH",
        }
    }

    /// Returns the lower-cased symbol used as the API path segment
    pub const fn api_symbol(self) -> &'static str {
        match self {
            Self::Bitcoin => "btc",
            Self::Litecoin => "ltc",
            Self::Dogecoin => "doge",
            Self::Dash => "dash",
        }
    }

    /// Returns the human-readable name of the currency
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bitcoin => "Bitcoin",
            Self::Litecoin => "Litecoin",
            Self::Dogecoin => "Dogecoin",
            Self::Dash => "Dash",
        }
    }

    /// Returns all supported currencies
    pub const fn all() -> &'static [Self] {
        &[Self::Bitcoin, Self::Litecoin, Self::Dogecoin, Self::Dash]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Currency {
    type Err = CurrencyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept both the display name and the ticker symbol, case-insensitively
        match s.to_uppercase().as_str() {
            "BITCOIN" | "BTC" => Ok(Self::Bitcoin),
            "LITECOIN" | "LTC" => Ok(Self::Litecoin),
            "DOGECOIN" | "DOGE" => Ok(Self::Dogecoin),
            "DASH" => Ok(Self::Dash),
            _ => Err(CurrencyParseError::InvalidName(s.to_string())),
        }
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.name().to_lowercase())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CurrencyVisitor;

        impl serde::de::Visitor<'_> for CurrencyVisitor {
            type Value = Currency;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    formatter,
                    "a supported currency name (bitcoin, litecoin, dogecoin, dash) or symbol (BTC, LTC, DOGE, DASH)"
                )
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Currency::from_str(value).map_err(|_| {
                    E::invalid_value(
                        serde::de::Unexpected::Str(value),
                        &"a supported currency name (bitcoin, litecoin, dogecoin, dash)",
                    )
                })
            }
        }

        deserializer.deserialize_str(CurrencyVisitor)
    }
}

/// Error type for currency parsing
#[derive(Debug, thiserror::Error)]
pub enum CurrencyParseError {
    /// Unrecognized currency name or symbol
    #[error(
        "unsupported currency: {0}. Supported currencies are: bitcoin (BTC), litecoin (LTC), dogecoin (DOGE), dash (DASH)"
    )]
    InvalidName(String),
}
