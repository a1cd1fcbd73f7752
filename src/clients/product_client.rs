use tracing::{debug, instrument};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::Product;
use crate::product_actor::ProductError;

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    /// Fetches a product, treating absence as [`ProductError::NotFound`].
    #[instrument(skip(self))]
    pub async fn fetch_product(&self, id: i64) -> Result<Product, ProductError> {
        self.get_product(id).await?.ok_or(ProductError::NotFound(id))
    }

    /// Replaces the whole record stored under `id`.
    #[instrument(skip(self, product), fields(sku = %product.sku))]
    pub async fn replace_product(&self, id: i64, product: Product) -> Result<(), ProductError> {
        debug!("Sending request");
        let body_id = product.product_id;
        self.inner.replace(id, product).await.map_err(|e| match e {
            FrameworkError::NotFound(_) => ProductError::NotFound(id),
            FrameworkError::IdMismatch { .. } => ProductError::IdMismatch { path: id, body: body_id },
            other => ProductError::ActorCommunicationError(other.to_string()),
        })
    }

    #[cfg(test)]
    #[instrument(skip(self))]
    pub async fn reset_products(&self) -> Result<(), ProductError> {
        debug!("Sending request");
        self.inner.reset().await.map_err(|e| ProductError::ActorCommunicationError(e.to_string()))
    }
}
