use std::fmt;

use super::{CatalogView, InvoiceView, ScreenView};

impl fmt::Display for ScreenView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenView::Login => {
                writeln!(f, "== Furniture POS: Login ==")?;
                writeln!(f, "Enter any user name and password.")?;
                write!(f, "  login <user> [password]")
            }
            ScreenView::Catalog(view) => view.fmt(f),
            ScreenView::Invoice(view) => view.fmt(f),
        }
    }
}

impl fmt::Display for CatalogView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Catalog ==")?;
        for row in &self.rows {
            let marker = if row.selected { '*' } else { ' ' };
            writeln!(
                f,
                "{} [{}] {:<18} {:>10}  qty {:>3}  ({})",
                marker,
                row.id,
                row.name,
                row.price,
                row.quantity,
                row.image.asset_id()
            )?;
            writeln!(f, "        {}", row.description)?;
        }
        if let Some(row) = self.selected_row() {
            writeln!(f, "Selected: {} x{}", row.name, row.quantity)?;
            write!(f, "select <id> | + <id> | - <id> | confirm")
        } else {
            write!(f, "select <id> | + <id> | - <id>  (confirm needs a selection)")
        }
    }
}

impl fmt::Display for InvoiceView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Invoice ==")?;
        match self {
            InvoiceView::NoItemSelected => writeln!(f, "No item selected")?,
            InvoiceView::Receipt(r) => {
                writeln!(f, "{}", r.product_name)?;
                writeln!(f, "  {}", r.description)?;
                writeln!(f, "{:<14}{:>12}", "Unit price", r.unit_price)?;
                writeln!(f, "{:<14}{:>12}", "Quantity", r.quantity)?;
                writeln!(f, "{:<14}{:>12}", "Subtotal", r.subtotal)?;
                writeln!(f, "{:<14}{:>12}", r.tax_label, r.tax)?;
                writeln!(f, "{:<14}{:>12}", "Total", r.total)?;
            }
        }
        write!(f, "back")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::domain::{InvoiceCalculator, Quantity, Selection};

    #[test]
    fn test_catalog_footer_names_selection() {
        use crate::screen_flow::CatalogState;

        let catalog = Catalog::furniture();
        let calculator = InvoiceCalculator::default();
        let mut state = CatalogState::new();
        assert!(!CatalogView::build(&catalog, &state, &calculator).to_string().contains("Selected:"));

        state.select_product(&catalog[4]);
        let text = CatalogView::build(&catalog, &state, &calculator).to_string();
        assert!(text.contains("Selected: Bookshelf x1"));
    }

    #[test]
    fn test_placeholder_rendering() {
        let text = InvoiceView::NoItemSelected.to_string();
        assert!(text.contains("No item selected"));
    }

    #[test]
    fn test_receipt_rendering_lists_amounts() {
        let catalog = Catalog::furniture();
        let selection = Selection::new(catalog[1].clone(), Quantity::ONE);
        let text = InvoiceView::build(Some(&selection), &InvoiceCalculator::default()).to_string();
        assert!(text.contains("Oak Side Table"));
        assert!(text.contains("$79.99"));
        assert!(text.contains("$9.60"));
        assert!(text.contains("$89.59"));
    }
}
