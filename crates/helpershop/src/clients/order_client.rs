//! Client for the order log.

use crate::model::{Order, OrderCreate, OrderId};
use crate::order_actor::OrderError;
use actor_store::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the order-log actor.
///
/// Appending happens from the draft actor's finalize hook; screens only
/// read. The log never updates or removes an order.
#[derive(Clone)]
pub struct OrderLogClient {
    inner: ResourceClient<Order>,
}

impl OrderLogClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Appends a finalized order and returns its id.
    #[instrument(skip(self, params))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?params, "create_order called");
        self.inner
            .create(params)
            .await
            .map_err(OrderError::from_framework)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderLogClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from_framework(e)
    }
}
