//! Invoice arithmetic using `rust_decimal` so that cents never drift.

use std::fmt;

use rust_decimal::prelude::*;

use super::{Quantity, Selection};

/// Monetary values are shown and stored with two fractional digits.
const DECIMAL_PLACES: u32 = 2;

/// Sales tax applied when no override is configured (12%).
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

/// Currency symbol used when no override is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Round to cents, half away from zero.
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Derived amounts for one invoice line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvoiceAmounts {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Computes subtotal, tax and total for `quantity` units at `price`.
///
/// Formula:
/// - subtotal = price * quantity
/// - tax = subtotal * tax_rate
/// - total = subtotal + tax
///
/// Subtotal and tax are rounded to cents before the total is summed, so the
/// printed lines always add up.
pub fn compute_invoice(price: Decimal, quantity: Quantity, tax_rate: Decimal) -> InvoiceAmounts {
    let subtotal = round_money(price.max(Decimal::ZERO) * Decimal::from(quantity.get()));
    let tax = round_money(subtotal * tax_rate);
    InvoiceAmounts {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

/// Tax rate and currency used to price and print invoices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceCalculator {
    tax_rate: Decimal,
    currency_symbol: String,
}

impl Default for InvoiceCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_TAX_RATE, DEFAULT_CURRENCY_SYMBOL)
    }
}

impl InvoiceCalculator {
    pub fn new(tax_rate: Decimal, currency_symbol: impl Into<String>) -> Self {
        Self {
            tax_rate,
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Tax rate as a whole-number percentage, e.g. `12` for 0.12.
    pub fn tax_percent(&self) -> Decimal {
        (self.tax_rate * Decimal::ONE_HUNDRED).normalize()
    }

    pub fn compute(&self, selection: &Selection) -> InvoiceAmounts {
        compute_invoice(selection.product.price, selection.quantity, self.tax_rate)
    }

    /// Formats an amount as `<symbol><amount>` with exactly two decimals.
    pub fn format(&self, amount: Decimal) -> String {
        format!("{}{}", self.currency_symbol, Money(amount))
    }
}

/// Display wrapper that always prints two fractional digits.
#[derive(Debug, Clone, Copy)]
pub struct Money(pub Decimal);

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", round_money(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn qty(n: u32) -> Quantity {
        Quantity::new(n).unwrap()
    }

    #[test]
    fn test_sofa_pair_amounts() {
        let amounts = compute_invoice(Decimal::new(15030, 2), qty(2), DEFAULT_TAX_RATE);
        assert_eq!(amounts.subtotal, Decimal::new(30060, 2));
        assert_eq!(amounts.tax, Decimal::new(3607, 2));
        assert_eq!(amounts.total, Decimal::new(33667, 2));
    }

    #[test]
    fn test_single_item_tax_rounds_up() {
        let amounts = compute_invoice(Decimal::new(7999, 2), qty(1), DEFAULT_TAX_RATE);
        assert_eq!(amounts.subtotal, Decimal::new(7999, 2));
        assert_eq!(amounts.tax, Decimal::new(960, 2));
        assert_eq!(amounts.total, Decimal::new(8959, 2));
    }

    #[test]
    fn test_money_always_shows_two_decimals() {
        assert_eq!(Money(Decimal::new(5, 0)).to_string(), "5.00");
        assert_eq!(Money(Decimal::new(96, 1)).to_string(), "9.60");
        assert_eq!(Money(Decimal::new(1005, 3)).to_string(), "1.01");
    }

    #[test]
    fn test_calculator_formats_with_symbol() {
        let calculator = InvoiceCalculator::new(DEFAULT_TAX_RATE, "€");
        assert_eq!(calculator.format(Decimal::new(33667, 2)), "€336.67");
        assert_eq!(calculator.tax_percent(), Decimal::new(12, 0));
    }

    proptest! {
        #[test]
        fn total_is_subtotal_plus_twelve_percent(cents in 0u64..10_000_000, n in 1u32..500) {
            let price = Decimal::new(cents as i64, 2);
            let amounts = compute_invoice(price, qty(n), DEFAULT_TAX_RATE);
            let expected = amounts.subtotal * Decimal::new(112, 2);
            prop_assert!((amounts.total - expected).abs() <= Decimal::new(5, 3));
            prop_assert_eq!(amounts.total, amounts.subtotal + amounts.tax);
        }
    }
}
