//! Funding source models.
//!
//! A funding source backs a card with spendable balance. Custodian wallets
//! are a richer kind of funding source that additionally carry the balance in
//! the custodied asset's native unit. On disk both are stored flat, so wallet
//! bytes remain readable as a bare [`FundingSourceRecord`] (losing only
//! `native_balance`); the cache's codec relies on that when it trial-decodes
//! legacy blobs.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Discriminator for the kind of funding source backing an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundingSourceType {
    CustodianWallet,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundingSourceState {
    Valid,
    Invalid,
}

/// Base funding source fields, common to every variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingSourceRecord {
    pub funding_source_id: String,
    #[serde(rename = "type")]
    pub source_type: FundingSourceType,
    pub balance: Option<Money>,
    pub amount_hold: Option<Money>,
    pub state: FundingSourceState,
}

/// A funding source custodied by an external wallet provider.
///
/// `native_balance` is the balance in the custodied asset's own unit (e.g.
/// BTC) while the embedded record's `balance` is the spendable fiat value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustodianWallet {
    #[serde(flatten)]
    pub record: FundingSourceRecord,
    pub native_balance: Money,
}

/// A funding source of any concrete kind.
///
/// Serializes untagged (each variant as its flat field set) to stay
/// byte-compatible with blobs written before custodian wallets existed. The
/// untagged `Deserialize` tries the wallet shape first and is meant for
/// funding sources embedded in other entities (a card's backing source);
/// whole funding-source collections are decoded by the cache codec, which
/// falls back wholesale rather than per element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FundingSource {
    CustodianWallet(CustodianWallet),
    Generic(FundingSourceRecord),
}

impl FundingSource {
    /// The base fields shared by every variant.
    pub fn record(&self) -> &FundingSourceRecord {
        match self {
            Self::CustodianWallet(wallet) => &wallet.record,
            Self::Generic(record) => record,
        }
    }

    pub fn funding_source_id(&self) -> &str {
        &self.record().funding_source_id
    }

    pub fn state(&self) -> FundingSourceState {
        self.record().state
    }

    pub fn balance(&self) -> Option<&Money> {
        self.record().balance.as_ref()
    }

    /// Balance in the custodied asset's native unit, when known.
    pub fn native_balance(&self) -> Option<&Money> {
        match self {
            Self::CustodianWallet(wallet) => Some(&wallet.native_balance),
            Self::Generic(_) => None,
        }
    }
}

impl From<CustodianWallet> for FundingSource {
    fn from(wallet: CustodianWallet) -> Self {
        Self::CustodianWallet(wallet)
    }
}

impl From<FundingSourceRecord> for FundingSource {
    fn from(record: FundingSourceRecord) -> Self {
        Self::Generic(record)
    }
}
