mod domain;
mod error;
mod messages;

mod basket;
mod catalog;
mod view;

mod clients;
mod storefront_actor;

mod app_system;

#[cfg(test)]
mod mock_framework;

use tracing::{info, warn, Instrument};

use crate::app_system::{setup_tracing, StorefrontConfig, StorefrontSystem};
use crate::domain::SortOption;
use crate::error::StorefrontError;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = StorefrontConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting storefront");

    let system = StorefrontSystem::start(&config)
        .await
        .map_err(|e| e.to_string())?;
    let client = system.storefront_client.clone();

    let span = tracing::info_span!("browsing");
    async {
        info!("Searching the catalog");
        client.set_search_term("tea".to_string()).await?;
        client.set_sort_option(SortOption::PriceAsc).await?;
        client.set_in_stock_only(true).await?;
        Ok::<_, StorefrontError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("shopping");
    async {
        let products = client.visible_products().await?;
        for product in products.iter().take(2) {
            client.add_to_basket(product.id).await?;
        }
        if let Some(first) = products.first() {
            client.add_to_basket(first.id).await?;
            client.remove_from_basket(first.id).await?;
            client.add_to_basket(first.id).await?;
        }
        client.show_basket().await?;
        Ok::<_, StorefrontError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    match client.snapshot().await {
        Ok(snapshot) => println!("{}", view::render(&snapshot)),
        Err(e) => warn!(error = %e, "Could not render storefront"),
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Storefront session completed successfully");
    Ok(())
}
