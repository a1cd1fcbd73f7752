//! Product-specific domain logic: the update payload, its validation rules,
//! and the errors surfaced to callers.

mod dtos;
pub mod entity;
pub mod error;
pub mod validation;

pub use dtos::*;
pub use error::*;
pub use validation::*;

use crate::actor_framework::ResourceActor;
use crate::clients::ProductClient;
use crate::domain::{seed_products, Product};

/// Creates a new Product actor, seeded with the startup catalog, and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, seed_products);
    let client = ProductClient::new(generic_client);

    (actor, client)
}
