//! Client for the draft actor: the composition dialog's handle.

use crate::draft_actor::{DraftAction, DraftActionResult, DraftError};
use crate::model::{DraftCreate, DraftId, DraftUpdate, LineItem, LineItemId, OrderDraft, OrderId};
use actor_store::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the draft actor.
///
/// One draft per open dialog: `open_draft` on open, the composition
/// operations while it shows, `cancel` when it closes without an order.
#[derive(Clone)]
pub struct DraftClient {
    inner: ResourceClient<OrderDraft>,
}

impl DraftClient {
    pub fn new(inner: ResourceClient<OrderDraft>) -> Self {
        Self { inner }
    }

    /// Creates an empty draft and returns its id.
    #[instrument(skip(self))]
    pub async fn open_draft(&self) -> Result<DraftId, DraftError> {
        debug!("Sending request");
        self.inner
            .create(DraftCreate)
            .await
            .map_err(DraftError::from_framework)
    }

    /// Adds a line for the named product, parsing the quantity text.
    #[instrument(skip(self))]
    pub async fn add_line_item(
        &self,
        draft: DraftId,
        product_name: &str,
        quantity_text: &str,
    ) -> Result<LineItem, DraftError> {
        debug!("Sending request");
        let action = DraftAction::AddLineItem {
            product_name: product_name.to_string(),
            quantity_text: quantity_text.to_string(),
        };
        match self.inner.perform_action(draft, action).await {
            Ok(DraftActionResult::AddLineItem(item)) => Ok(item),
            Ok(_) => unreachable!("AddLineItem action must return AddLineItem result"),
            Err(e) => Err(DraftError::from_framework(e)),
        }
    }

    /// Removes a line. Returns whether a line was actually removed;
    /// unknown ids report `false` rather than failing.
    #[instrument(skip(self))]
    pub async fn remove_line_item(
        &self,
        draft: DraftId,
        item: LineItemId,
    ) -> Result<bool, DraftError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(draft, DraftAction::RemoveLineItem(item))
            .await
        {
            Ok(DraftActionResult::RemoveLineItem(removed)) => Ok(removed),
            Ok(_) => unreachable!("RemoveLineItem action must return RemoveLineItem result"),
            Err(e) => Err(DraftError::from_framework(e)),
        }
    }

    /// Finalizes the draft into an order and returns the new order's id.
    #[instrument(skip(self))]
    pub async fn finalize(
        &self,
        draft: DraftId,
        seller_name: &str,
        customer_name: &str,
        payment_method: &str,
    ) -> Result<OrderId, DraftError> {
        debug!("Sending request");
        let action = DraftAction::Finalize {
            seller_name: seller_name.to_string(),
            customer_name: customer_name.to_string(),
            payment_method: payment_method.to_string(),
        };
        match self.inner.perform_action(draft, action).await {
            Ok(DraftActionResult::Finalize(order_id)) => Ok(order_id),
            Ok(_) => unreachable!("Finalize action must return Finalize result"),
            Err(e) => Err(DraftError::from_framework(e)),
        }
    }

    /// Applies the dialog's text-change handlers to the draft.
    #[instrument(skip(self, update))]
    pub async fn update_fields(
        &self,
        draft: DraftId,
        update: DraftUpdate,
    ) -> Result<OrderDraft, DraftError> {
        debug!(?update, "update_fields called");
        self.inner
            .update(draft, update)
            .await
            .map_err(DraftError::from_framework)
    }

    /// Discards the draft; the dialog was closed without creating an
    /// order.
    #[instrument(skip(self))]
    pub async fn cancel(&self, draft: DraftId) -> Result<(), DraftError> {
        debug!("Sending request");
        self.inner
            .delete(draft)
            .await
            .map_err(DraftError::from_framework)
    }
}

#[async_trait]
impl ActorClient<OrderDraft> for DraftClient {
    type Error = DraftError;

    fn inner(&self) -> &ResourceClient<OrderDraft> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        DraftError::from_framework(e)
    }
}
