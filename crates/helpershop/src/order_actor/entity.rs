//! Entity trait implementation for the Order domain type.
//!
//! An order is a frozen snapshot of a finalized draft: no updates, no
//! deletes, no actions. The log only ever appends and reads.

use crate::model::{Order, OrderCreate, OrderId};
use crate::order_actor::OrderError;
use actor_store::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            seller_name: params.seller_name,
            customer_name: params.customer_name,
            items: params.items,
            total: params.total,
            payment_method: params.payment_method,
        })
    }

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
