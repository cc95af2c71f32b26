//! Merge-on-write reducer for transaction lists.

use cardkit_core::Transaction;

/// Reduces an account's cached transaction list against a newly fetched
/// page.
///
/// Incoming entries replace cached entries with the same `transaction_id`
/// (a settled transaction supersedes its pending form) and new entries are
/// appended; the union is then sorted by `created_at` descending. Both
/// empty-side fast paths return the other list unchanged — in particular the
/// first write of a fetched page is stored as-is without a needless sort,
/// and an empty page never clobbers cached history. Applying the same
/// incoming page twice yields the same list as applying it once.
pub fn merge_transactions(
    existing: Vec<Transaction>,
    incoming: Vec<Transaction>,
) -> Vec<Transaction> {
    if existing.is_empty() {
        return incoming;
    }
    if incoming.is_empty() {
        return existing;
    }
    let mut merged = existing;
    for transaction in incoming {
        match merged
            .iter_mut()
            .find(|t| t.transaction_id == transaction.transaction_id)
        {
            Some(slot) => *slot = transaction,
            None => merged.push(transaction),
        }
    }
    merged.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    merged
}
