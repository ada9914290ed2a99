use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::ProductId;
use crate::screen_flow::NavigationRefused;

/// Why an action left the session unchanged.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum IgnoredReason {
    #[error(transparent)]
    Navigation(#[from] NavigationRefused),
    #[error("Product not found: {0}")]
    UnknownProduct(ProductId),
}

/// Errors that can occur while talking to the session actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(#[from] FrameworkError),
}
