//! Entity trait implementation for the OrderDraft domain type.
//!
//! The interesting hooks live here: `handle_action` implements the
//! composition operations, consulting the catalog and order-log clients
//! injected as context. A failed action leaves the draft untouched.

use crate::clients::{CatalogClient, OrderLogClient};
use crate::draft_actor::{DraftAction, DraftActionResult, DraftError};
use crate::intake;
use crate::model::{DraftCreate, DraftId, DraftUpdate, OrderCreate, OrderDraft};
use actor_store::ActorEntity;
use async_trait::async_trait;

/// Dependencies the draft actor runs with: product lookup and the log to
/// append finalized orders to.
pub type DraftContext = (CatalogClient, OrderLogClient);

#[async_trait]
impl ActorEntity for OrderDraft {
    type Id = DraftId;
    type Create = DraftCreate;
    type Update = DraftUpdate;
    type Action = DraftAction;
    type ActionResult = DraftActionResult;
    type Context = DraftContext;
    type Error = DraftError;

    fn from_create_params(id: DraftId, _params: DraftCreate) -> Result<Self, Self::Error> {
        Ok(OrderDraft::new(id))
    }

    /// Text-change handlers from the dialog: each field updates
    /// independently.
    async fn on_update(
        &mut self,
        update: DraftUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(seller_name) = update.seller_name {
            self.seller_name = seller_name;
        }
        if let Some(customer_name) = update.customer_name {
            self.customer_name = customer_name;
        }
        if let Some(payment_method) = update.payment_method {
            self.payment_method = payment_method;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: DraftAction,
        ctx: &Self::Context,
    ) -> Result<DraftActionResult, Self::Error> {
        let (catalog, order_log) = ctx;
        match action {
            DraftAction::AddLineItem {
                product_name,
                quantity_text,
            } => {
                if product_name.trim().is_empty() || quantity_text.trim().is_empty() {
                    return Err(DraftError::MissingSelection);
                }
                let quantity = intake::parse_positive_quantity(&quantity_text)
                    .ok_or_else(|| DraftError::InvalidQuantity(quantity_text.clone()))?;
                let product = catalog
                    .find_by_name(&product_name)
                    .await
                    .map_err(|e| DraftError::ActorCommunication(e.to_string()))?
                    .ok_or_else(|| DraftError::ProductNotFound(product_name.clone()))?;

                // Price is snapshotted at add-time; the line keeps it even
                // if the catalog entry could change.
                let item = self.push_item(product.name, quantity, product.price);
                Ok(DraftActionResult::AddLineItem(item))
            }
            DraftAction::RemoveLineItem(id) => {
                Ok(DraftActionResult::RemoveLineItem(self.remove_item(id)))
            }
            DraftAction::Finalize {
                seller_name,
                customer_name,
                payment_method,
            } => {
                if seller_name.trim().is_empty()
                    || customer_name.trim().is_empty()
                    || payment_method.trim().is_empty()
                    || self.items.is_empty()
                {
                    return Err(DraftError::IncompleteOrder);
                }

                let order_id = order_log
                    .create_order(OrderCreate {
                        seller_name,
                        customer_name,
                        items: self.items.clone(),
                        total: self.total,
                        payment_method,
                    })
                    .await
                    .map_err(|e| DraftError::ActorCommunication(e.to_string()))?;

                // The log owns the snapshot now; the dialog starts over.
                self.reset();
                Ok(DraftActionResult::Finalize(order_id))
            }
        }
    }
}
