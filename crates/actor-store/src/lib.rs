//! # Actor Store
//!
//! Generic building blocks for in-memory resource stores managed by actors.
//!
//! Each store owns a collection of entities of one type and processes
//! requests sequentially from a channel. Because a store's state is only
//! ever touched by its own task, no locks are needed; multiple stores run
//! in parallel on the Tokio runtime.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): your domain type plus its lifecycle
//!    hooks and DTOs.
//! 2. **Runtime** ([`ResourceActor`]): the message loop that owns the
//!    insertion-ordered store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): cloneable,
//!    type-safe handles that the rest of the application injects and calls.
//!
//! ## Example
//!
//! ```rust
//! use actor_store::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Product {
//!     id: u32,
//!     name: String,
//! }
//!
//! #[derive(Debug)]
//! struct ProductCreate {
//!     name: String,
//! }
//!
//! #[derive(Debug)]
//! enum ProductAction {}
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("product store error")]
//! struct ProductError;
//!
//! #[async_trait]
//! impl ActorEntity for Product {
//!     type Id = u32;
//!     type Create = ProductCreate;
//!     type Update = ();
//!     type Action = ProductAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = ProductError;
//!
//!     fn from_create_params(id: u32, params: ProductCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: params.name })
//!     }
//!
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, _: ProductAction, _: &()) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Product>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(ProductCreate { name: "Caneta".into() }).await.unwrap();
//!     let listed = client.list().await.unwrap();
//!     assert_eq!(listed[0].id, id);
//! }
//! ```
//!
//! ## Context injection
//!
//! Dependencies are injected at runtime via `run(context)`, not at
//! construction time. An entity whose hooks must call other stores declares
//! their clients as its `Context`; the composition root clones the clients
//! in when it spawns the actor. This late binding keeps construction free
//! of circular references.
//!
//! ## Testing
//!
//! The [`mock`] module provides an expectation-based [`mock::MockClient`]
//! so client and entity logic can be tested without spawning real actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
