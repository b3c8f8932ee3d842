use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ProductId;

/// Errors surfaced to callers of the storefront session.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorefrontError {
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
    #[error("Product is out of stock: {0}")]
    OutOfStock(ProductId),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Errors that can occur while loading the catalog at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateId(ProductId),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
