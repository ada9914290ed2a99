//! Read-only views of each screen, built from session state.
//!
//! Views carry already-formatted money so rendering is plain text layout.

mod render;

use crate::catalog::Catalog;
use crate::domain::{ImageRef, InvoiceAmounts, InvoiceCalculator, ProductId, Quantity, Selection};
use crate::screen_flow::{CatalogState, Navigator, ScreenEntry};

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView {
    Login,
    Catalog(CatalogView),
    Invoice(InvoiceView),
}

impl ScreenView {
    pub fn build(navigator: &Navigator, catalog: &Catalog, calculator: &InvoiceCalculator) -> Self {
        if let Some(state) = navigator.catalog_state() {
            return ScreenView::Catalog(CatalogView::build(catalog, state, calculator));
        }
        match navigator.top() {
            Some(ScreenEntry::Invoice(selection)) => {
                ScreenView::Invoice(InvoiceView::build(Some(selection), calculator))
            }
            _ => ScreenView::Login,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: ImageRef,
    pub quantity: Quantity,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    pub rows: Vec<CatalogRow>,
    /// Confirm is disabled until a row is selected.
    pub can_confirm: bool,
}

impl CatalogView {
    pub fn build(catalog: &Catalog, state: &CatalogState, calculator: &InvoiceCalculator) -> Self {
        let selected = state.selected().map(|p| p.id);
        let rows = catalog
            .iter()
            .map(|product| CatalogRow {
                id: product.id,
                name: product.name.clone(),
                description: product.description.clone(),
                price: calculator.format(product.price),
                image: product.image,
                quantity: state.quantity_of(product.id),
                selected: selected == Some(product.id),
            })
            .collect();
        Self {
            rows,
            can_confirm: selected.is_some(),
        }
    }

    pub fn selected_row(&self) -> Option<&CatalogRow> {
        self.rows.iter().find(|row| row.selected)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub product_name: String,
    pub description: String,
    pub unit_price: String,
    pub quantity: Quantity,
    pub subtotal: String,
    pub tax_label: String,
    pub tax: String,
    pub total: String,
    pub amounts: InvoiceAmounts,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InvoiceView {
    /// Shown instead of a receipt when there is nothing to bill.
    NoItemSelected,
    Receipt(Receipt),
}

impl InvoiceView {
    pub fn build(selection: Option<&Selection>, calculator: &InvoiceCalculator) -> Self {
        let Some(selection) = selection else {
            return InvoiceView::NoItemSelected;
        };
        let amounts = calculator.compute(selection);
        InvoiceView::Receipt(Receipt {
            product_name: selection.product.name.clone(),
            description: selection.product.description.clone(),
            unit_price: calculator.format(selection.product.price),
            quantity: selection.quantity,
            subtotal: calculator.format(amounts.subtotal),
            tax_label: format!("Tax ({}%)", calculator.tax_percent()),
            tax: calculator.format(amounts.tax),
            total: calculator.format(amounts.total),
            amounts,
        })
    }
}
