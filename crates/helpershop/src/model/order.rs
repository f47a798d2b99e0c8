/// Represents a finalized order in the order log.
///
/// Orders are snapshots of the draft they were finalized from and are
/// immutable once appended to the log. Finalizing does not decrement
/// product stock.
use crate::model::LineItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub seller_name: String,
    pub customer_name: String,
    pub items: Vec<LineItem>,
    pub total: Decimal,
    pub payment_method: String,
}

/// Payload for appending a finalized order to the log. Built by the draft
/// actor from validated draft state.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub seller_name: String,
    pub customer_name: String,
    pub items: Vec<LineItem>,
    pub total: Decimal,
    pub payment_method: String,
}
