//! # HelperShop
//!
//! An in-memory shop-management core: stock products with a price,
//! quantity and photo, compose orders from them, and keep a log of
//! finalized orders. No persistence, no network: everything lives in
//! process memory and is gone on restart.
//!
//! ## Module Tour
//!
//! - [`model`]: pure data such as [`Product`](model::Product),
//!   [`OrderDraft`](model::OrderDraft), [`LineItem`](model::LineItem),
//!   [`Order`](model::Order), money formatting.
//! - [`catalog_actor`], [`draft_actor`], [`order_actor`]: the three
//!   stores, built on the generic [`actor_store`] framework. The draft
//!   actor holds the composition logic: line items are priced at
//!   add-time, the running total is adjusted incrementally, and
//!   finalizing snapshots the draft into the order log.
//! - [`clients`]: typed handles injected wherever a store is needed.
//! - [`intake`]: parsing and validation gates for raw form input.
//! - [`picker`]: image-acquisition and permission seams (the device
//!   integrations live outside this crate).
//! - [`screens`]: thin adapters translating view events into client
//!   calls, plus the [`Route`](screens::Route) destinations.
//! - [`lifecycle`]: the [`ShopSystem`](lifecycle::ShopSystem)
//!   composition root and tracing setup.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod catalog_actor;
pub mod clients;
pub mod draft_actor;
pub mod intake;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod picker;
pub mod screens;
