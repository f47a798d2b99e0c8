//! The orders view.

use crate::model::Order;

/// Adapter for the orders view. Receives the accumulated order log by
/// value when the user navigates here from Home.
///
/// The view's body is currently empty: it holds the log but renders none
/// of it, matching the shipped behavior.
// TODO: render the received orders once the view gets a design.
pub struct OrdersScreen {
    orders: Vec<Order>,
}

impl OrdersScreen {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// The log this view was handed.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Lines the view displays. Empty regardless of the log's contents.
    pub fn rendered_lines(&self) -> Vec<String> {
        Vec::new()
    }
}
