//! Order composition: drafts being assembled in the creation dialog.
//!
//! The draft actor is the one store with dependencies: adding a line item
//! resolves the product through the catalog client, and finalizing appends
//! the snapshot through the order-log client. Both arrive as the actor's
//! run context.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::DraftClient;
use crate::model::OrderDraft;
use actor_store::ResourceActor;

/// Creates the draft actor and its client.
pub fn new() -> (ResourceActor<OrderDraft>, DraftClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    let client = DraftClient::new(generic_client);
    (actor, client)
}
