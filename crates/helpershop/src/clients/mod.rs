//! Type-safe wrappers around [`ResourceClient`](actor_store::ResourceClient).
//!
//! Each client exposes the domain-named operations its store's contract
//! allows, and nothing more: the catalog and order log have no mutation
//! beyond create, the draft client carries the composition operations.

pub mod catalog_client;
pub mod draft_client;
pub mod order_client;

pub use catalog_client::*;
pub use draft_client::*;
pub use order_client::*;
