use std::fmt;

use super::Product;

/// Number of units of a product. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u32);

impl Quantity {
    pub const ONE: Quantity = Quantity(1);

    /// Returns `None` for zero.
    #[cfg(test)]
    pub fn new(value: u32) -> Option<Self> {
        (value >= 1).then_some(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Clamped at one.
    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1).max(1))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The product and quantity the user intends to buy.
///
/// This is the payload carried from the catalog screen to the invoice
/// screen. It owns a copy of the product so the invoice never has to look
/// anything up.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub product: Product,
    pub quantity: Quantity,
}

impl Selection {
    pub fn new(product: Product, quantity: Quantity) -> Self {
        Self { product, quantity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_is_not_a_quantity() {
        assert_eq!(Quantity::new(0), None);
        assert_eq!(Quantity::new(3).map(Quantity::get), Some(3));
    }

    #[test]
    fn test_decrement_clamps_at_one() {
        assert_eq!(Quantity::ONE.decrement(), Quantity::ONE);
        assert_eq!(Quantity::ONE.increment().increment().decrement().get(), 2);
    }

    proptest! {
        #[test]
        fn quantity_never_drops_below_one(steps in prop::collection::vec(any::<bool>(), 0..200)) {
            let mut quantity = Quantity::ONE;
            for up in steps {
                quantity = if up { quantity.increment() } else { quantity.decrement() };
                prop_assert!(quantity.get() >= 1);
            }
        }
    }
}
