use tokio::sync::mpsc;

use crate::basket::Basket;
use crate::domain::{Product, ProductId, SortOption};
use crate::error::StorefrontError;
use crate::messages::StorefrontRequest;
use crate::view::StorefrontSnapshot;

/// Handle for sending user events to a [`StorefrontService`](crate::storefront_actor::StorefrontService).
#[derive(Clone)]
pub struct StorefrontClient {
    sender: mpsc::Sender<StorefrontRequest>,
}

impl StorefrontClient {
    pub fn new(sender: mpsc::Sender<StorefrontRequest>) -> Self {
        Self { sender }
    }

    pub async fn shutdown(&self) -> Result<(), StorefrontError> {
        self.sender
            .send(StorefrontRequest::Shutdown)
            .await
            .map_err(|_| StorefrontError::ActorCommunicationError("Actor closed".to_string()))
    }
}

// Query inputs. Each returns the new result count.
client_method!(StorefrontClient => fn set_search_term(search_term: String) -> usize as StorefrontRequest::SetSearchTerm, Error = StorefrontError);
client_method!(StorefrontClient => fn set_sort_option(sort_option: SortOption) -> usize as StorefrontRequest::SetSortOption, Error = StorefrontError);
client_method!(StorefrontClient => fn set_in_stock_only(in_stock_only: bool) -> usize as StorefrontRequest::SetInStockOnly, Error = StorefrontError);
client_method!(StorefrontClient => fn visible_products() -> Vec<Product> as StorefrontRequest::GetVisibleProducts, Error = StorefrontError);
client_method!(StorefrontClient => fn results_text() -> String as StorefrontRequest::GetResultsText, Error = StorefrontError);

// Basket. Add and remove return the product's quantity afterwards.
client_method!(StorefrontClient => fn add_to_basket(product_id: ProductId) -> u32 as StorefrontRequest::AddToBasket, Error = StorefrontError);
client_method!(StorefrontClient => fn remove_from_basket(product_id: ProductId) -> u32 as StorefrontRequest::RemoveFromBasket, Error = StorefrontError);
client_method!(StorefrontClient => fn basket() -> Basket as StorefrontRequest::GetBasket, Error = StorefrontError);
client_method!(StorefrontClient => fn show_basket() -> () as StorefrontRequest::ShowBasket, Error = StorefrontError);
client_method!(StorefrontClient => fn hide_basket() -> () as StorefrontRequest::HideBasket, Error = StorefrontError);

client_method!(StorefrontClient => fn snapshot() -> StorefrontSnapshot as StorefrontRequest::GetSnapshot, Error = StorefrontError);

#[cfg(test)]
client_method!(StorefrontClient => fn get_catalog_size() -> usize as StorefrontRequest::GetCatalogSize, Error = StorefrontError);
