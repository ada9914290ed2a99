pub mod invoice;
pub mod product;
pub mod selection;

pub use invoice::*;
pub use product::*;
pub use selection::*;
