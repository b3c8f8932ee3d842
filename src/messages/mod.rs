use tokio::sync::oneshot;

use crate::basket::Basket;
use crate::domain::{Product, ProductId, SortOption};
use crate::error::StorefrontError;
use crate::view::StorefrontSnapshot;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// One user event for the storefront session. Each variant carries its
/// parameters and a oneshot channel for the response.
#[derive(Debug)]
pub enum StorefrontRequest {
    SetSearchTerm {
        search_term: String,
        respond_to: ServiceResponse<usize, StorefrontError>,
    },
    SetSortOption {
        sort_option: SortOption,
        respond_to: ServiceResponse<usize, StorefrontError>,
    },
    SetInStockOnly {
        in_stock_only: bool,
        respond_to: ServiceResponse<usize, StorefrontError>,
    },
    GetVisibleProducts {
        respond_to: ServiceResponse<Vec<Product>, StorefrontError>,
    },
    GetResultsText {
        respond_to: ServiceResponse<String, StorefrontError>,
    },
    AddToBasket {
        product_id: ProductId,
        respond_to: ServiceResponse<u32, StorefrontError>,
    },
    RemoveFromBasket {
        product_id: ProductId,
        respond_to: ServiceResponse<u32, StorefrontError>,
    },
    GetBasket {
        respond_to: ServiceResponse<Basket, StorefrontError>,
    },
    ShowBasket {
        respond_to: ServiceResponse<(), StorefrontError>,
    },
    HideBasket {
        respond_to: ServiceResponse<(), StorefrontError>,
    },
    GetSnapshot {
        respond_to: ServiceResponse<StorefrontSnapshot, StorefrontError>,
    },
    Shutdown,
    #[cfg(test)]
    GetCatalogSize {
        respond_to: ServiceResponse<usize, StorefrontError>,
    },
}
