//! Screen navigation and the per-screen state it hands between screens.

mod catalog_state;
mod navigator;

pub use catalog_state::*;
pub use navigator::*;
