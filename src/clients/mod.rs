//! Typed handles over the generic resource clients.

#[macro_use]
mod macros;
mod product_client;

pub use product_client::ProductClient;
