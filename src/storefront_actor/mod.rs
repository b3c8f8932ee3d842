//! The storefront session: the view-layer actor that composes the Catalog
//! Query Engine and the Basket Ledger.

mod service;

pub use service::*;
