use crate::actor_framework::Entity;
use crate::domain::Product;

impl Entity for Product {
    type Id = i64;

    fn id(&self) -> &i64 { &self.product_id }
}
