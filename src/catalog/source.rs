use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::domain::Product;
use crate::error::CatalogError;

/// Shared, read-only catalog. Loaded once at startup.
pub type Catalog = Arc<[Product]>;

const BUNDLED_CATALOG: &str = include_str!("../../assets/products.json");

/// Parses a JSON array of products.
///
/// Only id uniqueness is checked; prices, ratings and stock levels are taken
/// as supplied.
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let products: Vec<Product> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(products.len());
    for product in &products {
        if !seen.insert(product.id) {
            return Err(CatalogError::DuplicateId(product.id));
        }
    }

    debug!(product_count = products.len(), "Catalog parsed");
    Ok(products.into())
}

/// The sample catalog compiled into the binary.
pub fn bundled_catalog() -> Result<Catalog, CatalogError> {
    parse_catalog(BUNDLED_CATALOG)
}

#[instrument(fields(path = %path.display()), skip(path))]
pub async fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let catalog = parse_catalog(&json)?;
    info!(product_count = catalog.len(), "Catalog loaded");
    Ok(catalog)
}
