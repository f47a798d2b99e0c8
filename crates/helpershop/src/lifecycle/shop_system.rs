use crate::clients::{CatalogClient, DraftClient, OrderLogClient};
use tracing::{error, info};

/// The composition root: owns every actor of the shop and hands out their
/// clients.
///
/// Three actors run for the process lifetime:
/// - **Catalog**: shared product stock (no dependencies)
/// - **Order log**: finalized orders (no dependencies)
/// - **Draft**: order composition, wired with the catalog and order-log
///   clients as its context
///
/// # Example
///
/// ```ignore
/// let system = ShopSystem::new();
///
/// let product_id = system.catalog_client.create_product(params).await?;
/// let draft_id = system.draft_client.open_draft().await?;
///
/// system.shutdown().await?;
/// ```
pub struct ShopSystem {
    /// Client for the shared product catalog.
    pub catalog_client: CatalogClient,

    /// Client for the order-composition drafts.
    pub draft_client: DraftClient,

    /// Client for the log of finalized orders.
    pub order_client: OrderLogClient,

    /// Task handles for all running actors, awaited on shutdown.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    /// Creates and starts the whole system.
    ///
    /// Actors are constructed first (no dependencies yet), then spawned
    /// with their context: the draft actor receives clones of the catalog
    /// and order-log clients so its hooks can resolve products and append
    /// orders.
    pub fn new() -> Self {
        let (catalog_actor, catalog_client) = crate::catalog_actor::new();
        let (order_actor, order_client) = crate::order_actor::new();
        let (draft_actor, draft_client) = crate::draft_actor::new();

        let catalog_handle = tokio::spawn(catalog_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(()));
        let draft_handle = tokio::spawn(
            draft_actor.run((catalog_client.clone(), order_client.clone())),
        );

        Self {
            catalog_client,
            draft_client,
            order_client,
            handles: vec![catalog_handle, order_handle, draft_handle],
        }
    }

    /// Gracefully shuts the system down: drops every client (closing the
    /// channels) and waits for each actor task to finish.
    ///
    /// Returns an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.catalog_client);
        drop(self.draft_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for ShopSystem {
    fn default() -> Self {
        Self::new()
    }
}
