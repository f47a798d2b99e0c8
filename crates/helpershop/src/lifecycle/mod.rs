//! Runtime orchestration: starting, wiring and stopping the actors.
//!
//! Actors are created without dependencies, then started with their
//! context injected; the draft actor is the only one that needs any
//! (catalog lookup and the order log). Shutdown is cooperative: dropping
//! every client closes the channels and each actor drains and exits.

pub mod shop_system;

pub use shop_system::*;

pub use actor_store::tracing::setup_tracing;
