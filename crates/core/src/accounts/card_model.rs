//! Card account model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::funding_source_model::FundingSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardNetwork {
    Visa,
    Mastercard,
    Amex,
    Other,
}

/// Lifecycle state of a financial account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialAccountState {
    Created,
    Active,
    Inactive,
    Cancelled,
}

/// A card account as returned by the account service.
///
/// Only masked details are ever present here; PAN/CVV stay in the PCI vault
/// and never reach the local cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub account_id: String,
    pub card_product_id: Option<String>,
    pub card_network: Option<CardNetwork>,
    pub last_four_digits: String,
    pub card_holder: Option<String>,
    pub state: FinancialAccountState,
    pub issued_at: Option<DateTime<Utc>>,
    pub funding_source: Option<FundingSource>,
}
