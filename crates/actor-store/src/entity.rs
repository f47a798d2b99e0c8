//! The contract every stored resource type implements.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by a
/// [`ResourceActor`](crate::ResourceActor).
///
/// # Architecture Note
/// By defining one contract that every resource type (Product, OrderDraft,
/// Order) satisfies, the message loop is written once and reused
/// everywhere. The associated types keep each store's API strongly typed:
/// a product store only accepts a product create payload, and the compiler
/// rejects anything else.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can call other stores. The
/// `Context` associated type carries those dependencies; it is injected
/// when the actor starts (`run(context)`), not when it is constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier for this entity. Ids are issued from the actor's
    /// monotonic counter, hence the `From<u32>` bound; generation stays
    /// deterministic and testable.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations beyond create/read/update/delete.
    type Action: Send + Sync + Debug;

    /// Result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected into every hook. Use `()` when the
    /// entity needs none.
    type Context: Send + Sync;

    /// The error type for this entity. One enum per store: hooks for every
    /// operation share it, which keeps client signatures uniform.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity from its freshly issued id and the create
    /// payload. Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after the entity is constructed, before it is stored. Default
    /// does nothing.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request arrives.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed. Default does
    /// nothing.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
