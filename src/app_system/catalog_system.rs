use tracing::{error, info};
use crate::clients::ProductClient;
use crate::product_actor;

/// The running catalog: the product actor task and a client to reach it.
///
/// Handlers receive clones of `product_client`; the actor stops once every
/// clone has been dropped.
pub struct CatalogSystem {
    pub product_client: ProductClient,
    handle: tokio::task::JoinHandle<()>,
}

impl CatalogSystem {
    pub fn new(buffer_size: usize) -> Self {
        let (product_actor, product_client) = product_actor::new(buffer_size);
        let handle = tokio::spawn(product_actor.run());
        info!(buffer_size, "Catalog system started");

        Self { product_client, handle }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog system...");
        // Closing our side of the channel lets the actor loop finish once
        // the HTTP layer has released its clones too.
        drop(self.product_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Catalog system shutdown complete.");
        Ok(())
    }
}
