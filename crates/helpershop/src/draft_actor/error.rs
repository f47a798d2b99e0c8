//! Error types for the draft actor.
//!
//! Every variant except `ActorCommunication` is a user-facing message the
//! dialog shows verbatim; none of them mutate draft state.

use actor_store::FrameworkError;
use thiserror::Error;

/// Errors that can occur while composing an order.
#[derive(Debug, Error)]
pub enum DraftError {
    /// Product or quantity field left empty.
    #[error("Select a product and enter a quantity.")]
    MissingSelection,

    /// The quantity text does not parse to a positive whole number.
    #[error("Quantity must be a positive whole number, got {0:?}.")]
    InvalidQuantity(String),

    /// The selected product name matches nothing in the catalog.
    #[error("Product not found in stock: {0}")]
    ProductNotFound(String),

    /// Finalize attempted with a missing field or an empty item list. One
    /// combined message; the dialog does not say which check failed.
    #[error("Fill in every field and add at least one product to the order.")]
    IncompleteOrder,

    /// An operation arrived while no composition dialog was open.
    #[error("No order dialog is open.")]
    DialogClosed,

    /// The requested draft was not found.
    #[error("Draft not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl DraftError {
    /// Recovers the domain error carried inside a framework error so the
    /// dialog can show the original message.
    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => DraftError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<DraftError>() {
                Ok(err) => *err,
                Err(other) => DraftError::ActorCommunication(other.to_string()),
            },
            other => DraftError::ActorCommunication(other.to_string()),
        }
    }

    /// True for the failures that are shown to the user and terminated at
    /// the dialog, as opposed to plumbing errors.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, DraftError::ActorCommunication(_))
    }
}

impl From<String> for DraftError {
    fn from(msg: String) -> Self {
        DraftError::ActorCommunication(msg)
    }
}
