//! Typed collection codec with polymorphic decode fallback.
//!
//! Domain blobs hold JSON maps keyed by account id. For funding sources the
//! stored shape is flat and untagged, a layout inherited from before
//! custodian wallets existed, so decoding has to discover the element type
//! by trial: first the whole collection as the richer derived shape, then
//! the whole collection as the base shape. Each attempt is all-or-nothing —
//! a collection that only partially matches the derived shape falls through
//! wholesale rather than producing a mixed result. When both attempts fail
//! the blob is reported as absent, never as an error.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use cardkit_core::{CustodianWallet, FundingSource, FundingSourceRecord};

/// An entity stored flat with a richer derived shape and a base shape.
pub(crate) trait PolymorphicEntity: Sized {
    type Derived: DeserializeOwned + Into<Self>;
    type Base: DeserializeOwned + Into<Self>;
}

impl PolymorphicEntity for FundingSource {
    type Derived = CustodianWallet;
    type Base = FundingSourceRecord;
}

pub(crate) fn encode_map<V: Serialize>(map: &HashMap<String, V>) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec(map)
}

pub(crate) fn decode_map<V: DeserializeOwned>(bytes: &[u8]) -> Option<HashMap<String, V>> {
    serde_json::from_slice(bytes).ok()
}

/// Decodes a keyed map of polymorphic entities, derived shape first.
pub(crate) fn decode_map_polymorphic<E: PolymorphicEntity>(
    bytes: &[u8],
) -> Option<HashMap<String, E>> {
    if let Some(derived) = decode_map::<E::Derived>(bytes) {
        return Some(lift(derived));
    }
    decode_map::<E::Base>(bytes).map(lift)
}

/// Decodes a keyed map of polymorphic entity lists, derived shape first.
pub(crate) fn decode_list_map_polymorphic<E: PolymorphicEntity>(
    bytes: &[u8],
) -> Option<HashMap<String, Vec<E>>> {
    if let Some(derived) = decode_map::<Vec<E::Derived>>(bytes) {
        return Some(lift_lists(derived));
    }
    decode_map::<Vec<E::Base>>(bytes).map(lift_lists)
}

fn lift<E, T: Into<E>>(map: HashMap<String, T>) -> HashMap<String, E> {
    map.into_iter().map(|(k, v)| (k, v.into())).collect()
}

fn lift_lists<E, T: Into<E>>(map: HashMap<String, Vec<T>>) -> HashMap<String, Vec<E>> {
    map.into_iter()
        .map(|(k, v)| (k, v.into_iter().map(Into::into).collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardkit_core::{FundingSourceState, FundingSourceType, Money};
    use rust_decimal_macros::dec;

    fn record(id: &str) -> FundingSourceRecord {
        FundingSourceRecord {
            funding_source_id: id.to_string(),
            source_type: FundingSourceType::Other,
            balance: Some(Money::new(dec!(100), "USD")),
            amount_hold: None,
            state: FundingSourceState::Valid,
        }
    }

    fn wallet(id: &str) -> CustodianWallet {
        CustodianWallet {
            record: FundingSourceRecord {
                source_type: FundingSourceType::CustodianWallet,
                ..record(id)
            },
            native_balance: Money::new(dec!(0.5), "ETH"),
        }
    }

    #[test]
    fn all_derived_collection_decodes_as_derived() {
        let mut stored = HashMap::new();
        stored.insert("acc_1".to_string(), wallet("fs_1"));
        stored.insert("acc_2".to_string(), wallet("fs_2"));
        let bytes = encode_map(&stored).unwrap();

        let decoded = decode_map_polymorphic::<FundingSource>(&bytes).unwrap();
        assert!(decoded.values().all(|fs| fs.native_balance().is_some()));
    }

    #[test]
    fn derived_collection_read_as_base_loses_native_balance() {
        let mut stored = HashMap::new();
        stored.insert("acc_1".to_string(), wallet("fs_1"));
        let bytes = encode_map(&stored).unwrap();

        let decoded = decode_map::<FundingSourceRecord>(&bytes).unwrap();
        assert_eq!(decoded["acc_1"].funding_source_id, "fs_1");
    }

    #[test]
    fn mixed_collection_falls_back_wholesale_to_base() {
        let mut stored = HashMap::new();
        stored.insert("acc_1".to_string(), FundingSource::from(wallet("fs_1")));
        stored.insert("acc_2".to_string(), FundingSource::from(record("fs_2")));
        let bytes = encode_map(&stored).unwrap();

        let decoded = decode_map_polymorphic::<FundingSource>(&bytes).unwrap();
        // The derived attempt fails on acc_2, so no element keeps the
        // derived-only fields: all-or-nothing, never a mixed result.
        assert!(decoded.values().all(|fs| fs.native_balance().is_none()));
        assert_eq!(decoded["acc_1"].funding_source_id(), "fs_1");
    }

    #[test]
    fn undecodable_bytes_are_absent() {
        assert!(decode_map_polymorphic::<FundingSource>(b"not json").is_none());
        assert!(decode_map_polymorphic::<FundingSource>(b"{\"acc\":42}").is_none());
    }

    #[test]
    fn list_collections_follow_the_same_fallback() {
        let mut stored = HashMap::new();
        stored.insert("acc_1".to_string(), vec![wallet("fs_1"), wallet("fs_2")]);
        let bytes = encode_map(&stored).unwrap();

        let derived = decode_list_map_polymorphic::<FundingSource>(&bytes).unwrap();
        assert!(derived["acc_1"].iter().all(|fs| fs.native_balance().is_some()));

        let mut mixed = HashMap::new();
        mixed.insert(
            "acc_1".to_string(),
            vec![
                FundingSource::from(wallet("fs_1")),
                FundingSource::from(record("fs_2")),
            ],
        );
        let bytes = encode_map(&mixed).unwrap();
        let decoded = decode_list_map_polymorphic::<FundingSource>(&bytes).unwrap();
        assert!(decoded["acc_1"].iter().all(|fs| fs.native_balance().is_none()));
    }
}
