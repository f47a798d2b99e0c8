//! The product catalog: the shared, process-wide stock of the shop.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CatalogClient;
use crate::model::Product;
use actor_store::ResourceActor;

/// Creates the catalog actor and its client.
pub fn new() -> (ResourceActor<Product>, CatalogClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    let client = CatalogClient::new(generic_client);
    (actor, client)
}
