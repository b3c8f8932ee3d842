pub mod product;
pub mod basket;
pub mod query;

pub use product::*;
pub use basket::*;
pub use query::*;
