use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{info, instrument};

use crate::clients::ProductClient;
use crate::domain::Product;
use crate::product_actor::{ensure_path_matches, parse_payload, parse_product_id, validate_payload, ProductError};
use super::error::ApiError;

/// The segment axum could not decode (e.g. bad percent-encoding) is treated
/// like any other malformed id.
fn path_product_id(path: Result<Path<String>, PathRejection>) -> Result<i64, ProductError> {
    match path {
        Ok(Path(raw_id)) => parse_product_id(&raw_id),
        Err(rejection) => Err(ProductError::InvalidId(rejection.body_text())),
    }
}

/// `GET /products/{productId}`
///
/// A malformed id is reported as not found rather than bad request, which is
/// what existing clients of this endpoint expect.
#[instrument(skip(products, path))]
pub async fn get_product(
    State(products): State<ProductClient>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Product>, ApiError> {
    let id = path_product_id(path).map_err(|e| ApiError::NotFound(e.to_string()))?;
    let product = products.fetch_product(id).await?;

    info!(product_id = id, "Product fetched");
    Ok(Json(product))
}

/// `POST /products/{productId}/details`
///
/// Checks run in a fixed order and the first failure is returned: path id,
/// body syntax, field rules, path/body id agreement, then existence.
#[instrument(skip(products, path, body), fields(body_len = body.len()))]
pub async fn replace_product_details(
    State(products): State<ProductClient>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let id = path_product_id(path)?;
    let payload = parse_payload(&body)?;
    let product = validate_payload(payload).map_err(ProductError::from)?;
    ensure_path_matches(id, &product)?;
    products.replace_product(id, product).await?;

    info!(product_id = id, "Product details replaced");
    Ok(StatusCode::NO_CONTENT)
}
