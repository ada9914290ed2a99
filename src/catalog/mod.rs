//! The fixed furniture catalog.
//!
//! Built once at startup and shared by reference; there are no operations
//! that add, remove or change products.

use std::ops::Deref;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::{ImageRef, Product, ProductId};

/// Read-only, insertion-ordered list of products.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// Builds a catalog from `products`, keeping their order.
    ///
    /// Later entries whose id is already taken are dropped so ids stay unique.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        let mut unique: Vec<Product> = Vec::new();
        for product in products {
            if unique.iter().any(|p| p.id == product.id) {
                tracing::warn!(product_id = %product.id, "Duplicate product id dropped from catalog");
                continue;
            }
            unique.push(product);
        }
        Self {
            products: unique.into(),
        }
    }

    /// The showroom catalog compiled into the binary.
    pub fn furniture() -> Self {
        Self::new([
            Product::new(
                1,
                "Modular Sofa",
                Decimal::new(15030, 2),
                "Three-seat sofa with removable linen covers",
                ImageRef::new("sofa_modular"),
            ),
            Product::new(
                2,
                "Oak Side Table",
                Decimal::new(7999, 2),
                "Solid oak table with a lower shelf",
                ImageRef::new("side_table_oak"),
            ),
            Product::new(
                3,
                "Dining Chair",
                Decimal::new(4550, 2),
                "Upholstered chair with beech legs",
                ImageRef::new("dining_chair"),
            ),
            Product::new(
                4,
                "Queen Bed Frame",
                Decimal::new(32000, 2),
                "Walnut finish frame with slatted base",
                ImageRef::new("bed_queen"),
            ),
            Product::new(
                5,
                "Bookshelf",
                Decimal::new(11075, 2),
                "Five-tier open bookshelf in white ash",
                ImageRef::new("bookshelf"),
            ),
        ])
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

impl Deref for Catalog {
    type Target = [Product];

    fn deref(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_furniture_catalog_keeps_order() {
        let catalog = Catalog::furniture();
        let ids: Vec<u32> = catalog.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::furniture();
        assert_eq!(catalog.get(ProductId(2)).map(|p| p.name.as_str()), Some("Oak Side Table"));
        assert!(catalog.get(ProductId(99)).is_none());
    }

    #[test]
    fn test_duplicate_ids_are_dropped() {
        let a = Product::new(7, "A", Decimal::ONE, "", ImageRef::new("a"));
        let b = Product::new(7, "B", Decimal::TWO, "", ImageRef::new("b"));
        let catalog = Catalog::new([a, b]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].name, "A");
    }

    #[test]
    fn test_clones_share_the_same_table() {
        let catalog = Catalog::furniture();
        let shared = catalog.clone();
        assert!(std::ptr::eq(&catalog[..], &shared[..]));
    }
}
