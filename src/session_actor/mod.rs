//! The session actor: navigation, selection and invoice state for one user.

mod actions;
pub mod entity;
pub mod error;
mod session;

pub use actions::*;
pub use error::*;
pub use session::*;
