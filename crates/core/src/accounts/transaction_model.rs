//! Card transaction model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A single card transaction.
///
/// `transaction_id` is unique within one account's transaction list; lists
/// are kept ordered by `created_at` descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub created_at: DateTime<Utc>,
    pub amount: Money,
    pub native_amount: Option<Money>,
    pub description: String,
    /// Merchant category code, when the network reported one.
    pub mcc: Option<String>,
}
