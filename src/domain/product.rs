use std::fmt;

use rust_decimal::Decimal;

/// Catalog-unique product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Opaque handle to a bundled image asset. Never decoded here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageRef(&'static str);

impl ImageRef {
    pub const fn new(asset_id: &'static str) -> Self {
        Self(asset_id)
    }

    pub fn asset_id(&self) -> &'static str {
        self.0
    }
}

/// A piece of furniture offered in the catalog.
///
/// Products are created once when the catalog is built and are never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub image: ImageRef,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Identifier, unique within the catalog
    /// * `name` - Display label
    /// * `price` - Unit price, non-negative
    /// * `description` - Short marketing text
    /// * `image` - Bundled asset shown next to the row
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: Decimal,
        description: impl Into<String>,
        image: ImageRef,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            price: price.max(Decimal::ZERO),
            description: description.into(),
            image,
        }
    }
}
