use tracing::{error, info, instrument};

use super::StorefrontConfig;
use crate::catalog::{bundled_catalog, load_catalog, Catalog};
use crate::clients::StorefrontClient;
use crate::error::CatalogError;
use crate::storefront_actor::StorefrontService;

/// Coordinator for one storefront session.
///
/// Loads the catalog, starts the session actor, and hands out its client.
/// Shutdown stops the actor and waits for its task to finish.
pub struct StorefrontSystem {
    pub storefront_client: StorefrontClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Loads the configured catalog (or the bundled one) and starts the system.
    #[instrument(name = "storefront_system", skip(config))]
    pub async fn start(config: &StorefrontConfig) -> Result<Self, CatalogError> {
        let catalog = match &config.catalog_path {
            Some(path) => load_catalog(path).await?,
            None => {
                info!("No catalog path configured, using bundled catalog");
                bundled_catalog()?
            }
        };
        Ok(Self::new(catalog, config))
    }

    /// Starts the system over an already-loaded catalog.
    pub fn new(catalog: Catalog, config: &StorefrontConfig) -> Self {
        info!(
            product_count = catalog.len(),
            mailbox_size = config.mailbox_size,
            default_sort = %config.default_sort,
            "Starting storefront system"
        );

        let (service, storefront_client) =
            StorefrontService::new(config.mailbox_size, catalog, config.default_sort);
        let handles = vec![tokio::spawn(service.run())];

        info!("Storefront system started successfully");

        Self {
            storefront_client,
            handles,
        }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront system");

        let _ = self.storefront_client.shutdown().await;

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Service shutdown error");
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Storefront system shutdown complete");
        Ok(())
    }
}
