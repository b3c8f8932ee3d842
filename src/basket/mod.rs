//! Basket Ledger: the shopper's session-local selection of products.

mod ledger;

pub use ledger::*;
