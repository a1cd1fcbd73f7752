use serde::{Deserialize, Serialize};

/// A catalog entry. Serialized as-is for `GET /products/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: i64,
    pub sku: String,
    pub manufacturer: String,
    pub category_id: i64,
    pub weight: i64,
    pub some_other_id: i64,
}

impl Product {
    pub fn new(
        product_id: i64,
        sku: impl Into<String>,
        manufacturer: impl Into<String>,
        category_id: i64,
        weight: i64,
        some_other_id: i64,
    ) -> Self {
        Self {
            product_id,
            sku: sku.into(),
            manufacturer: manufacturer.into(),
            category_id,
            weight,
            some_other_id,
        }
    }
}

/// The records present at startup, and restored by a test reset.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(1, "ABC-123-XYZ", "Acme Corporation", 100, 1250, 500),
        Product::new(2, "FOO-222-BAR", "Globex", 101, 900, 501),
    ]
}
