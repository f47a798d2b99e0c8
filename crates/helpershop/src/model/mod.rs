//! Pure data structures for the shop: products, drafts, orders, money.

pub mod draft;
pub mod money;
pub mod order;
pub mod product;

pub use draft::*;
pub use order::*;
pub use product::*;

/// Payment methods offered when composing an order. The draft stores the
/// chosen method as a plain string; an empty string means "not chosen yet"
/// and fails finalization.
pub const PAYMENT_METHODS: [&str; 4] =
    ["Cartão de Crédito", "Cartão de Débito", "Pix", "Dinheiro"];
