//! The in-progress order being composed in the creation dialog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for drafts. One draft exists per open composition
/// dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftId(pub u32);

impl From<u32> for DraftId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for DraftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "draft_{}", self.0)
    }
}

/// Type-safe identifier for line items, issued from the owning draft's
/// counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineItemId(pub u32);

impl Display for LineItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// One product-and-quantity entry within a draft or finalized order.
///
/// `name` and `unit_price` are copied from the product at add-time, not
/// live references; a product's later state never changes an existing
/// line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineItemId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

/// The in-progress order: who is selling, who is buying, how they pay, and
/// the items picked so far with a running total.
///
/// Invariants maintained by the methods below:
/// - every item's `line_total` equals `quantity * unit_price`;
/// - `total` equals the sum of all current line totals, adjusted
///   incrementally and never re-derived by rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub id: DraftId,
    pub seller_name: String,
    pub customer_name: String,
    pub payment_method: String,
    pub items: Vec<LineItem>,
    pub total: Decimal,
    next_item_id: u32,
}

impl OrderDraft {
    /// Creates an empty draft for a freshly opened dialog.
    pub fn new(id: DraftId) -> Self {
        Self {
            id,
            seller_name: String::new(),
            customer_name: String::new(),
            payment_method: String::new(),
            items: Vec::new(),
            total: Decimal::ZERO,
            next_item_id: 1,
        }
    }

    /// Appends a line for `quantity` units of a product at `unit_price`
    /// and adds the line total to the draft total. Returns the new line.
    pub fn push_item(
        &mut self,
        name: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
    ) -> LineItem {
        let line_total = unit_price * Decimal::from(quantity);
        let item = LineItem {
            id: LineItemId(self.next_item_id),
            name: name.into(),
            quantity,
            unit_price,
            line_total,
        };
        self.next_item_id += 1;
        self.total += line_total;
        self.items.push(item.clone());
        item
    }

    /// Removes the line with the given id and subtracts exactly its
    /// `line_total` from the draft total. Unknown ids are a no-op and
    /// return `false`.
    pub fn remove_item(&mut self, id: LineItemId) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                let removed = self.items.remove(index);
                self.total -= removed.line_total;
                true
            }
            None => false,
        }
    }

    /// Clears the draft back to its empty initial state: no items, zero
    /// total, all text fields empty. The item-id counter is not reset, so
    /// ids stay unique across the dialog's lifetime.
    pub fn reset(&mut self) {
        self.seller_name.clear();
        self.customer_name.clear();
        self.payment_method.clear();
        self.items.clear();
        self.total = Decimal::ZERO;
    }

    /// True when the draft is back at its initial state: no items, zero
    /// total, every text field empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
            && self.total.is_zero()
            && self.seller_name.is_empty()
            && self.customer_name.is_empty()
            && self.payment_method.is_empty()
    }
}

/// Payload for creating a draft. A draft always starts empty, so there is
/// nothing to carry.
#[derive(Debug, Clone, Default)]
pub struct DraftCreate;

/// Payload for the text-change handlers of the composition dialog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftUpdate {
    pub seller_name: Option<String>,
    pub customer_name: Option<String>,
    pub payment_method: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(text: &str) -> Decimal {
        text.parse().unwrap()
    }

    #[test]
    fn total_is_exact_sum_of_line_totals() {
        let mut draft = OrderDraft::new(DraftId(1));
        draft.push_item("Caneta", 3, price("2.50"));
        draft.push_item("Caderno", 2, price("15.00"));
        draft.push_item("Borracha", 7, price("0.10"));

        let sum: Decimal = draft.items.iter().map(|item| item.line_total).sum();
        assert_eq!(draft.total, sum);
        assert_eq!(draft.total, price("38.20"));
    }

    #[test]
    fn line_total_is_quantity_times_unit_price() {
        let mut draft = OrderDraft::new(DraftId(1));
        let item = draft.push_item("Caneta", 3, price("2.50"));
        assert_eq!(item.quantity, 3);
        assert_eq!(item.unit_price, price("2.50"));
        assert_eq!(item.line_total, price("7.50"));
    }

    #[test]
    fn remove_then_re_add_restores_total() {
        let mut draft = OrderDraft::new(DraftId(1));
        draft.push_item("Caneta", 3, price("2.50"));
        let before = draft.total;

        let id = draft.push_item("Caderno", 2, price("15.00")).id;
        assert_ne!(draft.total, before);

        assert!(draft.remove_item(id));
        assert_eq!(draft.total, before);

        draft.push_item("Caderno", 2, price("15.00"));
        draft.push_item("Caderno", 2, price("15.00"));
        let last = draft.items.last().unwrap().id;
        assert!(draft.remove_item(last));
        assert_eq!(draft.total, before + price("30.00"));
    }

    #[test]
    fn removing_unknown_item_is_a_no_op() {
        let mut draft = OrderDraft::new(DraftId(1));
        draft.push_item("Caneta", 1, price("2.50"));
        let before = draft.clone();

        assert!(!draft.remove_item(LineItemId(42)));
        assert_eq!(draft, before);
    }

    #[test]
    fn item_ids_are_unique_within_a_draft() {
        let mut draft = OrderDraft::new(DraftId(1));
        let first = draft.push_item("Caneta", 1, price("1.00")).id;
        let second = draft.push_item("Caneta", 1, price("1.00")).id;
        assert_ne!(first, second);

        // Ids are not reused after removal
        draft.remove_item(second);
        let third = draft.push_item("Caneta", 1, price("1.00")).id;
        assert_ne!(third, second);
        assert_ne!(third, first);
    }

    #[test]
    fn reset_returns_draft_to_initial_state() {
        let mut draft = OrderDraft::new(DraftId(1));
        draft.seller_name = "Ana".to_string();
        draft.customer_name = "Bia".to_string();
        draft.payment_method = "Pix".to_string();
        draft.push_item("Caneta", 3, price("2.50"));

        draft.reset();
        assert!(draft.is_empty());
        assert_eq!(draft.total, Decimal::ZERO);
    }
}
