//! Domain models shared across the SDK: money amounts, financial accounts,
//! funding sources, transactions and project branding.
//!
//! Everything in this crate is a plain value type with `serde` support and no
//! I/O. Persistence lives in the `cardkit-account-cache` crate.

pub mod accounts;
pub mod branding;
pub mod money;

pub use accounts::*;
pub use branding::ProjectBranding;
pub use money::Money;
