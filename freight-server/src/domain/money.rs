//! Currency codes and static-table conversion.
//!
//! Rate tables quote prices in their own currency; everything stored on a
//! priced route is EUR. Conversion uses a static exchange-rate table
//! maintained by the rate-sheet importer; currencies outside the table are
//! rejected when the rate rows are parsed, not at conversion time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned for a currency code outside the configured table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported currency: {0}")]
pub struct InvalidCurrency(pub String);

/// A currency with a configured conversion rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Usd,
}

const EUR_TO_USD: f64 = 1.1401;
const USD_TO_EUR: f64 = 0.8771;

/// Convert an amount between configured currencies, rounded to 2 decimals.
pub fn convert_currency(amount: f64, from: Currency, to: Currency) -> f64 {
    let rate = match (from, to) {
        (Currency::Eur, Currency::Usd) => EUR_TO_USD,
        (Currency::Usd, Currency::Eur) => USD_TO_EUR,
        _ => return amount,
    };
    (amount * rate * 100.0).round() / 100.0
}

/// Convert an amount to EUR, the base currency for all stored prices.
pub fn convert_to_eur(amount: f64, from: Currency) -> f64 {
    convert_currency(amount, from, Currency::Eur)
}

impl FromStr for Currency {
    type Err = InvalidCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EUR" => Ok(Currency::Eur),
            "USD" => Ok(Currency::Usd),
            other => Err(InvalidCurrency(other.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        };
        f.write_str(s)
    }
}
