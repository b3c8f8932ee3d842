//! Catalog Query Engine and catalog loading.

pub mod collation;
pub mod query;
pub mod source;

pub use query::*;
pub use source::*;
