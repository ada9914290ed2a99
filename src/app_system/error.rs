use thiserror::Error;

use super::ConfigError;
use crate::session_actor::SessionError;

/// Errors surfaced at the binary boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}
