use crate::domain::Product;
use super::dtos::ProductPayload;
use super::error::{ProductError, ValidationError};

pub const SKU_MAX_LEN: usize = 100;
pub const MANUFACTURER_MAX_LEN: usize = 200;

/// Parses a path segment as a product id: ASCII digits only, at least 1.
pub fn parse_product_id(raw: &str) -> Result<i64, ProductError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ProductError::InvalidId(raw.to_string()));
    }
    match raw.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(ProductError::InvalidId(raw.to_string())),
    }
}

/// Decodes an update body. Syntax errors and wrong field types both land here.
/// A bare `null` decodes as an empty payload, so it fails field validation.
pub fn parse_payload(body: &[u8]) -> Result<ProductPayload, ProductError> {
    serde_json::from_slice::<Option<ProductPayload>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| ProductError::MalformedBody(e.to_string()))
}

/// Checks the payload rules in order and stops at the first one broken.
/// String fields are trimmed before checking and stored trimmed.
pub fn validate_payload(payload: ProductPayload) -> Result<Product, ValidationError> {
    let product_id = at_least("product_id", payload.product_id, 1)?;
    let sku = bounded_text("sku", payload.sku, SKU_MAX_LEN)?;
    let manufacturer = bounded_text("manufacturer", payload.manufacturer, MANUFACTURER_MAX_LEN)?;
    let category_id = at_least("category_id", payload.category_id, 1)?;
    let weight = at_least("weight", payload.weight, 0)?;
    let some_other_id = at_least("some_other_id", payload.some_other_id, 1)?;

    Ok(Product {
        product_id,
        sku,
        manufacturer,
        category_id,
        weight,
        some_other_id,
    })
}

/// The body must describe the product named in the path.
pub fn ensure_path_matches(path_id: i64, product: &Product) -> Result<(), ProductError> {
    if product.product_id != path_id {
        return Err(ProductError::IdMismatch { path: path_id, body: product.product_id });
    }
    Ok(())
}

fn at_least(field: &'static str, value: Option<i64>, min: i64) -> Result<i64, ValidationError> {
    let value = value.ok_or(ValidationError::Required(field))?;
    if value < min {
        return Err(ValidationError::BelowMinimum { field, min });
    }
    Ok(value)
}

fn bounded_text(field: &'static str, value: Option<String>, max: usize) -> Result<String, ValidationError> {
    let trimmed = value.as_deref().map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(field));
    }
    // Byte length, not character count.
    if trimmed.len() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(trimmed.to_string())
}
