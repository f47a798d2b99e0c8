//! Entity trait implementation for the Product domain type.
//!
//! Products are append-only: the catalog exposes no update, delete, or
//! custom action, so the corresponding associated types are unit and the
//! hooks are inert. Inputs are validated by the stock intake gate before
//! they reach this store.

use crate::catalog_actor::CatalogError;
use crate::model::{Product, ProductCreate, ProductId};
use actor_store::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CatalogError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(
            id,
            params.name,
            params.price,
            params.quantity,
            params.image,
        ))
    }

    // Products are immutable after creation; no client sends updates.
    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        _action: (),
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}
