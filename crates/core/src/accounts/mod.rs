//! Financial account domain models.

mod card_model;
mod funding_source_model;
mod transaction_model;

pub use card_model::*;
pub use funding_source_model::*;
pub use transaction_model::*;
