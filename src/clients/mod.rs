#[macro_use]
mod macros;
mod session_client;

pub use session_client::*;
