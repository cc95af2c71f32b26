//! The cache facade consumed by UI and session collaborators.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use log::{debug, warn};

use cardkit_core::{Card, FundingSource, ProjectBranding, Transaction};

use crate::blob_store::BlobStore;
use crate::domain::Domain;
use crate::error::Result;
use crate::merge::merge_transactions;
use crate::store::{BrandingStore, DomainStore};

/// Durable cache handle over the five account-data domains.
///
/// Constructed once at SDK initialization and passed by reference to every
/// collaborator; there is no process-wide singleton. The handle is
/// `Send + Sync`: reads run lock-free against the last committed blob and
/// mutations are serialized per domain.
///
/// Reads return `None` for anything missing or undecodable; the caller is
/// expected to fall back to the account service and write the fetched result
/// through. Writes fail only on real I/O errors and are never retried here.
/// Entries are never evicted or expired by this cache.
pub struct AccountCache {
    blobs: Arc<BlobStore>,
    funding_sources: DomainStore<FundingSource>,
    funding_source_lists: DomainStore<Vec<FundingSource>>,
    cards: DomainStore<Card>,
    transactions: DomainStore<Vec<Transaction>>,
    branding: BrandingStore,
}

impl AccountCache {
    /// Opens the cache rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::with_blobs(BlobStore::new(dir.as_ref())?))
    }

    /// Opens a cache namespaced to one user below `base_dir`.
    ///
    /// The user's session token is hashed into the directory name, so
    /// switching users yields a disjoint cache and the token never touches
    /// disk.
    pub fn open_for_user(base_dir: impl AsRef<Path>, user_token: &str) -> Result<Self> {
        Ok(Self::with_blobs(BlobStore::scoped_to_user(
            base_dir, user_token,
        )?))
    }

    fn with_blobs(blobs: BlobStore) -> Self {
        let blobs = Arc::new(blobs);
        Self {
            funding_sources: DomainStore::new(blobs.clone(), Domain::FundingSources),
            funding_source_lists: DomainStore::new(blobs.clone(), Domain::FundingSourceLists),
            cards: DomainStore::new(blobs.clone(), Domain::Cards),
            transactions: DomainStore::new(blobs.clone(), Domain::Transactions),
            branding: BrandingStore::new(blobs.clone(), Domain::ProjectBranding),
            blobs,
        }
    }

    // Funding sources

    /// The cached primary funding source for `account_id`.
    pub fn funding_source(&self, account_id: &str) -> Option<FundingSource> {
        self.funding_sources.get(account_id)
    }

    /// All cached primary funding sources, keyed by account id.
    pub fn funding_sources(&self) -> Option<HashMap<String, FundingSource>> {
        self.funding_sources.get_all()
    }

    /// Caches the primary funding source for `account_id` and propagates it
    /// into an already-cached card for the same account.
    ///
    /// The propagation keeps the card's embedded funding source eventually
    /// consistent; it is best-effort, so a failed card re-write is logged
    /// and swallowed while the funding-source write stands. No rollback.
    pub fn put_funding_source(&self, account_id: &str, source: FundingSource) -> Result<()> {
        self.funding_sources.put(account_id, source.clone())?;
        if let Some(mut card) = self.cards.get(account_id) {
            card.funding_source = Some(source);
            if let Err(err) = self.cards.put(account_id, card) {
                warn!(
                    "failed to propagate funding source into cached card {}: {}",
                    account_id, err
                );
            }
        }
        Ok(())
    }

    /// The cached funding-source list for `account_id`.
    pub fn funding_source_list(&self, account_id: &str) -> Option<Vec<FundingSource>> {
        self.funding_source_lists.get(account_id)
    }

    /// All cached funding-source lists, keyed by account id.
    pub fn funding_source_lists(&self) -> Option<HashMap<String, Vec<FundingSource>>> {
        self.funding_source_lists.get_all()
    }

    /// Caches the funding-source list for `account_id`, replacing any cached
    /// list wholesale.
    pub fn put_funding_source_list(
        &self,
        account_id: &str,
        sources: Vec<FundingSource>,
    ) -> Result<()> {
        self.funding_source_lists.put(account_id, sources)
    }

    // Cards

    /// The cached card for `account_id`.
    pub fn card(&self, account_id: &str) -> Option<Card> {
        self.cards.get(account_id)
    }

    /// All cached cards, keyed by account id.
    pub fn cards(&self) -> Option<HashMap<String, Card>> {
        self.cards.get_all()
    }

    /// Caches `card` under its own account id.
    pub fn put_card(&self, card: Card) -> Result<()> {
        let account_id = card.account_id.clone();
        self.cards.put(&account_id, card)
    }

    // Transactions

    /// The cached transaction list for `account_id`, newest first.
    pub fn transactions(&self, account_id: &str) -> Option<Vec<Transaction>> {
        self.transactions.get(account_id)
    }

    /// All cached transaction lists, keyed by account id.
    pub fn transaction_lists(&self) -> Option<HashMap<String, Vec<Transaction>>> {
        self.transactions.get_all()
    }

    /// Merges a fetched transaction page into the cached list for
    /// `account_id`.
    ///
    /// Incoming entries replace same-id cached entries, the union is kept
    /// sorted newest first, and an empty page leaves cached history intact.
    pub fn put_transactions(&self, account_id: &str, incoming: Vec<Transaction>) -> Result<()> {
        debug!(
            "merging {} transactions into cache for {}",
            incoming.len(),
            account_id
        );
        self.transactions
            .merge(account_id, incoming, |existing, incoming| {
                merge_transactions(existing.unwrap_or_default(), incoming)
            })
    }

    // Project branding

    /// The cached project branding, if any.
    pub fn project_branding(&self) -> Option<ProjectBranding> {
        self.branding.get()
    }

    /// Caches the project branding singleton.
    pub fn put_project_branding(&self, branding: &ProjectBranding) -> Result<()> {
        self.branding.put(branding)
    }

    /// Drops every cached domain for this handle's directory.
    pub fn invalidate(&self) -> Result<()> {
        self.blobs.invalidate()
    }
}
