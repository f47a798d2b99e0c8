//! The home screen: entry point and the order-composition dialog.

use crate::clients::{DraftClient, OrderLogClient};
use crate::draft_actor::DraftError;
use crate::model::{DraftId, DraftUpdate, LineItem, LineItemId, OrderDraft, OrderId};
use crate::order_actor::OrderError;
use crate::screens::OrdersScreen;
use actor_store::ActorClient;

/// Adapter for the home view. Holds at most one open composition dialog,
/// backed by a draft in the draft store.
pub struct HomeScreen {
    drafts: DraftClient,
    orders: OrderLogClient,
    dialog: Option<DraftId>,
}

impl HomeScreen {
    pub fn new(drafts: DraftClient, orders: OrderLogClient) -> Self {
        Self {
            drafts,
            orders,
            dialog: None,
        }
    }

    /// The floating "+" button: opens the composition dialog with a fresh
    /// draft. Reopening while already open keeps the existing draft.
    pub async fn open_order_dialog(&mut self) -> Result<DraftId, DraftError> {
        if let Some(draft) = self.dialog {
            return Ok(draft);
        }
        let draft = self.drafts.open_draft().await?;
        self.dialog = Some(draft);
        Ok(draft)
    }

    /// The dialog's close button: discards the draft without an order.
    pub async fn close_order_dialog(&mut self) -> Result<(), DraftError> {
        if let Some(draft) = self.dialog.take() {
            self.drafts.cancel(draft).await?;
        }
        Ok(())
    }

    fn dialog(&self) -> Result<DraftId, DraftError> {
        self.dialog.ok_or(DraftError::DialogClosed)
    }

    /// "Adicionar Produto" inside the dialog.
    pub async fn add_product_to_order(
        &self,
        product_name: &str,
        quantity_text: &str,
    ) -> Result<LineItem, DraftError> {
        let draft = self.dialog()?;
        self.drafts
            .add_line_item(draft, product_name, quantity_text)
            .await
    }

    /// The per-line remove icon.
    pub async fn remove_product_from_order(&self, item: LineItemId) -> Result<bool, DraftError> {
        let draft = self.dialog()?;
        self.drafts.remove_line_item(draft, item).await
    }

    /// Text-change handlers for the seller/customer/payment fields.
    pub async fn set_order_fields(&self, update: DraftUpdate) -> Result<OrderDraft, DraftError> {
        let draft = self.dialog()?;
        self.drafts.update_fields(draft, update).await
    }

    /// Current dialog contents, for rendering the item list and total.
    pub async fn current_draft(&self) -> Result<OrderDraft, DraftError> {
        let draft = self.dialog()?;
        self.drafts
            .get(draft)
            .await?
            .ok_or_else(|| DraftError::NotFound(draft.to_string()))
    }

    /// "Criar Pedido": finalizes the draft. On success the dialog closes
    /// and the cleared draft is discarded; on rejection the dialog stays
    /// open with its state intact.
    pub async fn create_order(
        &mut self,
        seller_name: &str,
        customer_name: &str,
        payment_method: &str,
    ) -> Result<OrderId, DraftError> {
        let draft = self.dialog()?;
        let order_id = self
            .drafts
            .finalize(draft, seller_name, customer_name, payment_method)
            .await?;

        self.dialog = None;
        self.drafts.cancel(draft).await?;
        Ok(order_id)
    }

    /// "Visualizar Pedidos": navigates to the orders view, passing the
    /// accumulated log by value.
    pub async fn view_orders(&self) -> Result<OrdersScreen, OrderError> {
        let orders = self.orders.list().await?;
        Ok(OrdersScreen::new(orders))
    }
}
