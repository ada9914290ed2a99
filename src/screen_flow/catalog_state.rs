use std::collections::HashMap;

use crate::domain::{Product, ProductId, Quantity, Selection};

/// What the catalog screen remembers while it is on the stack.
///
/// Every row owns an independent quantity counter. The counter of the
/// selected row is the quantity that travels to the invoice. A freshly
/// created screen starts with no selection and every counter at one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    counters: HashMap<ProductId, Quantity>,
    selected: Option<Product>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last tap wins. The product's counter is left as the user set it.
    pub fn select_product(&mut self, product: &Product) -> Selection {
        let quantity = *self.counters.entry(product.id).or_default();
        self.selected = Some(product.clone());
        Selection::new(product.clone(), quantity)
    }

    pub fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    pub fn quantity_of(&self, id: ProductId) -> Quantity {
        self.counters.get(&id).copied().unwrap_or_default()
    }

    pub fn increment_row(&mut self, id: ProductId) -> Quantity {
        let counter = self.counters.entry(id).or_default();
        *counter = counter.increment();
        *counter
    }

    pub fn decrement_row(&mut self, id: ProductId) -> Quantity {
        let counter = self.counters.entry(id).or_default();
        *counter = counter.decrement();
        *counter
    }

    /// Adjusts the selected row. `None` when nothing is selected.
    pub fn increment_quantity(&mut self) -> Option<Quantity> {
        let id = self.selected.as_ref()?.id;
        Some(self.increment_row(id))
    }

    pub fn decrement_quantity(&mut self) -> Option<Quantity> {
        let id = self.selected.as_ref()?.id;
        Some(self.decrement_row(id))
    }

    /// Drops the selection and resets every counter.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.counters.clear();
    }

    pub fn selection(&self) -> Option<Selection> {
        let product = self.selected.as_ref()?;
        Some(Selection::new(product.clone(), self.quantity_of(product.id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_new_state_has_no_selection() {
        let state = CatalogState::new();
        assert!(state.selection().is_none());
        assert_eq!(state.quantity_of(ProductId(1)), Quantity::ONE);
    }

    #[test]
    fn test_selection_carries_row_counter() {
        let catalog = Catalog::furniture();
        let mut state = CatalogState::new();
        state.increment_row(ProductId(1));
        state.increment_row(ProductId(1));
        state.select_product(&catalog[0]);

        let selection = state.selection().unwrap();
        assert_eq!(selection.product.id, ProductId(1));
        assert_eq!(selection.quantity.get(), 3);
    }

    #[test]
    fn test_last_selection_wins_and_counters_stay_independent() {
        let catalog = Catalog::furniture();
        let mut state = CatalogState::new();
        state.select_product(&catalog[0]);
        state.increment_quantity();
        state.select_product(&catalog[1]);

        let selection = state.selection().unwrap();
        assert_eq!(selection.product.id, ProductId(2));
        assert_eq!(selection.quantity, Quantity::ONE);
        assert_eq!(state.quantity_of(ProductId(1)).get(), 2);
    }

    #[test]
    fn test_adjusting_without_selection_is_a_no_op() {
        let mut state = CatalogState::new();
        assert_eq!(state.increment_quantity(), None);
        assert_eq!(state.decrement_quantity(), None);
    }

    #[test]
    fn test_decrement_clamps_and_clear_resets() {
        let catalog = Catalog::furniture();
        let mut state = CatalogState::new();
        state.select_product(&catalog[2]);
        assert_eq!(state.decrement_quantity(), Some(Quantity::ONE));
        state.increment_quantity();

        state.clear_selection();
        assert!(state.selected().is_none());
        assert_eq!(state.quantity_of(ProductId(3)), Quantity::ONE);
    }
}
