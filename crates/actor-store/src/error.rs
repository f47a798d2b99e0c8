//! Errors shared by every store, regardless of entity type.

/// Errors that can occur within the actor plumbing itself.
///
/// Entity-level failures travel inside [`FrameworkError::EntityError`] as a
/// boxed error; clients downcast it back to their domain error type.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
