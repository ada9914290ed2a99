//! System orchestration, startup, and shutdown logic.

pub mod config;
pub mod error;
pub mod pos_system;
pub mod tracing;

pub use self::config::*;
pub use self::error::*;
pub use self::pos_system::*;
pub use self::tracing::setup_tracing;
