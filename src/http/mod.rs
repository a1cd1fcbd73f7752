//! HTTP surface of the catalog, built on axum.
//!
//! ## Routes
//!
//! - `GET /products/:product_id` — fetch one product.
//! - `POST /products/:product_id/details` — replace a product's details.

pub mod error;
pub mod handlers;

use axum::routing::{get, post};
use axum::Router;
use tracing::info;

use crate::clients::ProductClient;

/// Build the axum `Router` serving the catalog through `products`.
pub fn router(products: ProductClient) -> Router {
    Router::new()
        .route("/products/:product_id", get(handlers::get_product))
        .route("/products/:product_id/details", post(handlers::replace_product_details))
        .with_state(products)
}

/// Serve the catalog on `listener` until `shutdown` resolves.
pub async fn serve(
    listener: tokio::net::TcpListener,
    products: ProductClient,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    info!(addr = %listener.local_addr()?, "HTTP server listening");
    axum::serve(listener, router(products))
        .with_graceful_shutdown(shutdown)
        .await
}
