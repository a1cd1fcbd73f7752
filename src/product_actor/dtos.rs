use serde::Deserialize;

/// Body of `POST /products/{id}/details`.
///
/// Every field is optional so a missing key (or `null`) can be told apart
/// from a present zero. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductPayload {
    pub product_id: Option<i64>,
    pub sku: Option<String>,
    pub manufacturer: Option<String>,
    pub category_id: Option<i64>,
    pub weight: Option<i64>,
    pub some_other_id: Option<i64>,
}
