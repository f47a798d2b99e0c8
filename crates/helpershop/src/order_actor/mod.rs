//! The order log: finalized orders, append-only and immutable.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderLogClient;
use crate::model::Order;
use actor_store::ResourceActor;

/// Creates the order-log actor and its client.
pub fn new() -> (ResourceActor<Order>, OrderLogClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    let client = OrderLogClient::new(generic_client);
    (actor, client)
}
