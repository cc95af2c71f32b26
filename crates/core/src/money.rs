//! Money amounts paired with their currency code.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in a specific currency.
///
/// Currency codes are kept as strings because custodian wallets report
/// balances in arbitrary crypto units ("BTC", "ETH") alongside fiat codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: Decimal,
    pub currency: String,
}

impl Money {
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
