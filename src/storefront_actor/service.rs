use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::basket::Basket;
use crate::catalog::{query, results_text, Catalog};
use crate::clients::StorefrontClient;
use crate::domain::{Product, ProductId, QueryParams, SortOption};
use crate::error::StorefrontError;
use crate::messages::{ServiceResponse, StorefrontRequest};
use crate::view::StorefrontSnapshot;

/// Macro for clean error response handling
macro_rules! send_error {
    ($respond_to:expr, $error:expr) => {{
        let _ = $respond_to.send(Err($error));
        return;
    }};
}

/// Owns one shopper's session: the three query inputs, the visible product
/// list derived from them, and the basket.
///
/// Requests are handled one at a time and each runs to completion before the
/// next is read, so no locking is needed. The visible list is recomputed from
/// scratch after every input change, always from the current value of all
/// three inputs.
pub struct StorefrontService {
    receiver: mpsc::Receiver<StorefrontRequest>,
    catalog: Catalog,
    params: QueryParams,
    visible: Vec<Product>,
    basket: Basket,
}

impl StorefrontService {
    pub fn new(buffer_size: usize, catalog: Catalog, default_sort: SortOption) -> (Self, StorefrontClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let mut service = Self {
            receiver,
            catalog,
            params: QueryParams {
                sort_option: default_sort,
                ..QueryParams::default()
            },
            visible: Vec::new(),
            basket: Basket::new(),
        };
        service.refresh();
        let client = StorefrontClient::new(sender);
        (service, client)
    }

    #[instrument(name = "storefront_service", skip(self))]
    pub async fn run(mut self) {
        info!(catalog_size = self.catalog.len(), "StorefrontService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StorefrontRequest::SetSearchTerm { search_term, respond_to } => {
                    self.handle_set_search_term(search_term, respond_to);
                }
                StorefrontRequest::SetSortOption { sort_option, respond_to } => {
                    self.handle_set_sort_option(sort_option, respond_to);
                }
                StorefrontRequest::SetInStockOnly { in_stock_only, respond_to } => {
                    self.handle_set_in_stock_only(in_stock_only, respond_to);
                }
                StorefrontRequest::GetVisibleProducts { respond_to } => {
                    let _ = respond_to.send(Ok(self.visible.clone()));
                }
                StorefrontRequest::GetResultsText { respond_to } => {
                    let _ = respond_to.send(Ok(self.results_text()));
                }
                StorefrontRequest::AddToBasket { product_id, respond_to } => {
                    self.handle_add_to_basket(product_id, respond_to);
                }
                StorefrontRequest::RemoveFromBasket { product_id, respond_to } => {
                    self.handle_remove_from_basket(product_id, respond_to);
                }
                StorefrontRequest::GetBasket { respond_to } => {
                    let _ = respond_to.send(Ok(self.basket.clone()));
                }
                StorefrontRequest::ShowBasket { respond_to } => {
                    debug!("Showing basket");
                    self.basket.open();
                    let _ = respond_to.send(Ok(()));
                }
                StorefrontRequest::HideBasket { respond_to } => {
                    debug!("Hiding basket");
                    self.basket.close();
                    let _ = respond_to.send(Ok(()));
                }
                StorefrontRequest::GetSnapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.snapshot()));
                }
                StorefrontRequest::Shutdown => {
                    info!("StorefrontService shutting down");
                    break;
                }
                #[cfg(test)]
                StorefrontRequest::GetCatalogSize { respond_to } => {
                    let _ = respond_to.send(Ok(self.catalog.len()));
                }
            }
        }

        info!("StorefrontService stopped");
    }

    #[instrument(fields(search_term = %search_term), skip(self, search_term, respond_to))]
    fn handle_set_search_term(&mut self, search_term: String, respond_to: ServiceResponse<usize, StorefrontError>) {
        debug!("Processing set_search_term request");
        self.params.search_term = search_term;
        let _ = respond_to.send(Ok(self.refresh()));
    }

    #[instrument(fields(sort_option = %sort_option), skip(self, sort_option, respond_to))]
    fn handle_set_sort_option(&mut self, sort_option: SortOption, respond_to: ServiceResponse<usize, StorefrontError>) {
        debug!("Processing set_sort_option request");
        self.params.sort_option = sort_option;
        let _ = respond_to.send(Ok(self.refresh()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_set_in_stock_only(&mut self, in_stock_only: bool, respond_to: ServiceResponse<usize, StorefrontError>) {
        debug!("Processing set_in_stock_only request");
        self.params.in_stock_only = in_stock_only;
        let _ = respond_to.send(Ok(self.refresh()));
    }

    /// Looks the product up in the catalog and adds one unit. Out-of-stock
    /// products are refused, matching the disabled button on their card.
    /// Units already in the basket are not counted against stock.
    #[instrument(fields(product_id = %product_id), skip(self, product_id, respond_to))]
    fn handle_add_to_basket(&mut self, product_id: ProductId, respond_to: ServiceResponse<u32, StorefrontError>) {
        debug!("Processing add_to_basket request");

        let Some(product) = self.catalog.iter().find(|p| p.id == product_id) else {
            warn!("Product not found");
            send_error!(respond_to, StorefrontError::ProductNotFound(product_id));
        };

        if !product.in_stock() {
            warn!(product_name = %product.name, "Refusing to add out-of-stock product");
            send_error!(respond_to, StorefrontError::OutOfStock(product_id));
        }

        self.basket.add(product);
        let quantity = self.basket.quantity_of(product_id);
        info!(
            product_name = %product.name,
            quantity,
            total = self.basket.total(),
            "Added to basket"
        );
        let _ = respond_to.send(Ok(quantity));
    }

    #[instrument(fields(product_id = %product_id), skip(self, product_id, respond_to))]
    fn handle_remove_from_basket(&mut self, product_id: ProductId, respond_to: ServiceResponse<u32, StorefrontError>) {
        debug!("Processing remove_from_basket request");

        if self.basket.get(product_id).is_none() {
            debug!("Product not in basket");
        }
        self.basket.remove(product_id);

        let quantity = self.basket.quantity_of(product_id);
        info!(quantity, total = self.basket.total(), "Removed from basket");
        let _ = respond_to.send(Ok(quantity));
    }

    /// Re-runs the query with the latest inputs and returns the result count.
    fn refresh(&mut self) -> usize {
        self.visible = query(
            &self.catalog,
            &self.params.search_term,
            self.params.sort_option,
            self.params.in_stock_only,
        );
        debug!(
            search_term = %self.params.search_term,
            sort_option = %self.params.sort_option,
            in_stock_only = self.params.in_stock_only,
            result_count = self.visible.len(),
            "Visible products recomputed"
        );
        self.visible.len()
    }

    fn results_text(&self) -> String {
        results_text(&self.params.search_term, self.visible.len())
    }

    fn snapshot(&self) -> StorefrontSnapshot {
        StorefrontSnapshot {
            params: self.params.clone(),
            products: self.visible.clone(),
            results_text: self.results_text(),
            basket: self.basket.clone(),
        }
    }
}
