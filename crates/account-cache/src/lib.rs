//! Durable local cache for financial-account data.
//!
//! Sits between the remote account service and the UI flows: successful
//! remote fetches are written back here, and reads serve as the optimistic
//! or offline fallback value. The cache never fetches remotely on miss — a
//! miss is returned to the caller, who falls back to the network and then
//! writes the result through.
//!
//! Layering, leaf first: [`BlobStore`](blob_store) persists one opaque blob
//! per domain with atomic replacement; the [`codec`] decodes whole typed
//! collections with a subtype-to-base fallback for funding sources; a
//! generic domain [`store`] provides serialized read-modify-write per
//! domain; [`AccountCache`] composes the five domains and applies the
//! cross-entity funding-source-into-card rule.

mod blob_store;
mod codec;
mod domain;
mod error;
mod merge;
mod store;

mod cache;

pub use cache::AccountCache;
pub use error::{CacheError, Result};
pub use merge::merge_transactions;
