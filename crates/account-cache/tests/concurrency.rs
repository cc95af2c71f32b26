//! Concurrency tests: serialized read-modify-write must not lose updates.

use std::sync::Arc;
use std::thread;

use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;
use tempfile::tempdir;

use cardkit_account_cache::AccountCache;
use cardkit_core::{Card, FinancialAccountState, Money, Transaction};

fn card(account_id: &str) -> Card {
    Card {
        account_id: account_id.to_string(),
        card_product_id: None,
        card_network: None,
        last_four_digits: "0000".to_string(),
        card_holder: None,
        state: FinancialAccountState::Active,
        issued_at: None,
        funding_source: None,
    }
}

fn tx(id: &str, created_at_secs: i64) -> Transaction {
    Transaction {
        transaction_id: id.to_string(),
        created_at: Utc.timestamp_opt(created_at_secs, 0).unwrap(),
        amount: Money::new(dec!(-1), "USD"),
        native_amount: None,
        description: "purchase".to_string(),
        mcc: None,
    }
}

#[test]
fn concurrent_puts_lose_no_updates() {
    let dir = tempdir().unwrap();
    let cache = Arc::new(AccountCache::open(dir.path()).unwrap());

    const WRITERS: usize = 16;
    let handles: Vec<_> = (0..WRITERS)
        .map(|i| {
            let cache = cache.clone();
            thread::spawn(move || {
                let account_id = format!("acc_{}", i);
                cache.put_card(card(&account_id)).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let cards = cache.cards().unwrap();
    assert_eq!(cards.len(), WRITERS);
    for i in 0..WRITERS {
        assert!(cards.contains_key(&format!("acc_{}", i)));
    }
}

#[test]
fn concurrent_merges_retain_every_transaction() {
    let dir = tempdir().unwrap();
    let cache = Arc::new(AccountCache::open(dir.path()).unwrap());

    const WRITERS: usize = 8;
    const PER_WRITER: usize = 5;
    let handles: Vec<_> = (0..WRITERS)
        .map(|w| {
            let cache = cache.clone();
            thread::spawn(move || {
                let page: Vec<_> = (0..PER_WRITER)
                    .map(|n| {
                        let seq = w * PER_WRITER + n;
                        tx(&format!("txn_{}", seq), seq as i64)
                    })
                    .collect();
                cache.put_transactions("acc_1", page).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let cached = cache.transactions("acc_1").unwrap();
    assert_eq!(cached.len(), WRITERS * PER_WRITER);
    // Newest first across all merged pages.
    for pair in cached.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[test]
fn writers_on_distinct_domains_do_not_interfere() {
    let dir = tempdir().unwrap();
    let cache = Arc::new(AccountCache::open(dir.path()).unwrap());

    let card_writer = {
        let cache = cache.clone();
        thread::spawn(move || {
            for i in 0..20 {
                cache.put_card(card(&format!("acc_{}", i))).unwrap();
            }
        })
    };
    let tx_writer = {
        let cache = cache.clone();
        thread::spawn(move || {
            for i in 0..20 {
                cache
                    .put_transactions("acc_0", vec![tx(&format!("txn_{}", i), i)])
                    .unwrap();
            }
        })
    };
    card_writer.join().unwrap();
    tx_writer.join().unwrap();

    assert_eq!(cache.cards().unwrap().len(), 20);
    assert_eq!(cache.transactions("acc_0").unwrap().len(), 20);
}
