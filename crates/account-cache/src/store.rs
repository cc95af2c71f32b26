//! Generic keyed stores over one domain blob each.
//!
//! Every mutation is a read-modify-write of the whole domain map: decode the
//! current blob (absent decodes as an empty map), apply the change at one
//! key, encode, write. A per-store mutex serializes mutations so two
//! overlapping writers cannot silently drop each other's entries; the
//! original design had no such guard and raced. Reads take no lock — the
//! blob store's atomic replacement guarantees they see a complete snapshot.
//!
//! In-memory decoded maps are never shared across calls; each operation
//! decodes its own copy, so the write mutex is the only synchronization.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

use cardkit_core::{Card, FundingSource, ProjectBranding, Transaction};

use crate::blob_store::BlobStore;
use crate::codec;
use crate::domain::Domain;
use crate::error::Result;

/// How a value type decodes from and encodes to its domain blob.
pub(crate) trait StoredValue: Sized {
    fn decode_map(bytes: &[u8]) -> Option<HashMap<String, Self>>;
    fn encode_map(map: &HashMap<String, Self>) -> serde_json::Result<Vec<u8>>;
}

impl StoredValue for Card {
    fn decode_map(bytes: &[u8]) -> Option<HashMap<String, Self>> {
        codec::decode_map(bytes)
    }

    fn encode_map(map: &HashMap<String, Self>) -> serde_json::Result<Vec<u8>> {
        codec::encode_map(map)
    }
}

impl StoredValue for Vec<Transaction> {
    fn decode_map(bytes: &[u8]) -> Option<HashMap<String, Self>> {
        codec::decode_map(bytes)
    }

    fn encode_map(map: &HashMap<String, Self>) -> serde_json::Result<Vec<u8>> {
        codec::encode_map(map)
    }
}

impl StoredValue for FundingSource {
    fn decode_map(bytes: &[u8]) -> Option<HashMap<String, Self>> {
        codec::decode_map_polymorphic(bytes)
    }

    fn encode_map(map: &HashMap<String, Self>) -> serde_json::Result<Vec<u8>> {
        codec::encode_map(map)
    }
}

impl StoredValue for Vec<FundingSource> {
    fn decode_map(bytes: &[u8]) -> Option<HashMap<String, Self>> {
        codec::decode_list_map_polymorphic(bytes)
    }

    fn encode_map(map: &HashMap<String, Self>) -> serde_json::Result<Vec<u8>> {
        codec::encode_map(map)
    }
}

/// Keyed store for one domain: `account_id -> V`.
pub(crate) struct DomainStore<V> {
    blobs: Arc<BlobStore>,
    domain: Domain,
    write_lock: Mutex<()>,
    drift_logged: Once,
    _value: std::marker::PhantomData<fn() -> V>,
}

impl<V: StoredValue> DomainStore<V> {
    pub fn new(blobs: Arc<BlobStore>, domain: Domain) -> Self {
        Self {
            blobs,
            domain,
            write_lock: Mutex::new(()),
            drift_logged: Once::new(),
            _value: std::marker::PhantomData,
        }
    }

    /// The cached value for `key`, if present and decodable.
    pub fn get(&self, key: &str) -> Option<V> {
        self.get_all().and_then(|mut map| map.remove(key))
    }

    /// The whole cached map, if present and decodable.
    pub fn get_all(&self) -> Option<HashMap<String, V>> {
        let bytes = self.blobs.read(self.domain)?;
        match V::decode_map(&bytes) {
            Some(map) => Some(map),
            None => {
                // Bytes exist but match no known shape: persisted-format
                // drift. Treated as a miss, logged once for diagnostics.
                self.drift_logged.call_once(|| {
                    warn!("cache domain {} holds undecodable data", self.domain);
                });
                None
            }
        }
    }

    /// Inserts or replaces the value at `key`.
    pub fn put(&self, key: &str, value: V) -> Result<()> {
        self.merge(key, value, |_, incoming| incoming)
    }

    /// Updates the value at `key` to `reduce(existing, incoming)`.
    pub fn merge<F>(&self, key: &str, incoming: V, reduce: F) -> Result<()>
    where
        F: FnOnce(Option<V>, V) -> V,
    {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut map = self.get_all().unwrap_or_default();
        let existing = map.remove(key);
        map.insert(key.to_string(), reduce(existing, incoming));
        let bytes = V::encode_map(&map)?;
        self.blobs.write(self.domain, &bytes)
    }
}

/// Unkeyed store for a singleton domain value.
pub(crate) struct SingletonStore<V> {
    blobs: Arc<BlobStore>,
    domain: Domain,
    write_lock: Mutex<()>,
    drift_logged: Once,
    _value: std::marker::PhantomData<fn() -> V>,
}

impl<V: Serialize + DeserializeOwned> SingletonStore<V> {
    pub fn new(blobs: Arc<BlobStore>, domain: Domain) -> Self {
        Self {
            blobs,
            domain,
            write_lock: Mutex::new(()),
            drift_logged: Once::new(),
            _value: std::marker::PhantomData,
        }
    }

    pub fn get(&self) -> Option<V> {
        let bytes = self.blobs.read(self.domain)?;
        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(_) => {
                self.drift_logged.call_once(|| {
                    warn!("cache domain {} holds undecodable data", self.domain);
                });
                None
            }
        }
    }

    pub fn put(&self, value: &V) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let bytes = serde_json::to_vec(value)?;
        self.blobs.write(self.domain, &bytes)
    }
}

// Branding is the only singleton domain today; the alias keeps call sites
// readable.
pub(crate) type BrandingStore = SingletonStore<ProjectBranding>;
