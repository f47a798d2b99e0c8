//! Custom actions for the draft actor.
//!
//! The composition dialog's buttons map one-to-one onto these: "add
//! product", the per-line remove icon, and "create order".

use crate::model::{LineItem, LineItemId, OrderId};

/// Operations on an in-progress draft.
#[derive(Debug, Clone)]
pub enum DraftAction {
    /// Adds a line for the named product. Quantity arrives as the raw text
    /// field content and is parsed here; the product name must resolve in
    /// the catalog.
    AddLineItem {
        product_name: String,
        quantity_text: String,
    },
    /// Removes one line. Unknown ids are a no-op, not an error.
    RemoveLineItem(LineItemId),
    /// Converts the draft into an immutable order, appends it to the log
    /// and clears the draft. All three fields and at least one item are
    /// required.
    Finalize {
        seller_name: String,
        customer_name: String,
        payment_method: String,
    },
}

/// Results from draft actions - variants match 1:1 with [`DraftAction`].
#[derive(Debug, Clone)]
pub enum DraftActionResult {
    /// The line that was appended.
    AddLineItem(LineItem),
    /// Whether a line was actually removed.
    RemoveLineItem(bool),
    /// Id of the order appended to the log.
    Finalize(OrderId),
}
