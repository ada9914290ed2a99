use tracing::{info, instrument, warn};

use crate::catalog::Catalog;
use crate::domain::{InvoiceCalculator, ProductId};
use crate::screen_flow::{NavigationRefused, Navigator, Screen};
use crate::screens::ScreenView;

use super::{ActionOutcome, Credentials, IgnoredReason};

/// The single user session: where the user is and what they picked.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    calculator: InvoiceCalculator,
    navigator: Navigator,
    operator: Option<String>,
}

/// Point-in-time view of a session for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub screen: Screen,
    pub view: ScreenView,
    pub routes: Vec<&'static str>,
    pub operator: Option<String>,
}

fn ignored(reason: impl Into<IgnoredReason>) -> ActionOutcome {
    let reason = reason.into();
    warn!(%reason, "Action ignored");
    ActionOutcome::Ignored(reason)
}

impl Session {
    pub fn new(catalog: Catalog, calculator: InvoiceCalculator) -> Self {
        Self {
            catalog,
            calculator,
            navigator: Navigator::new(),
            operator: None,
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.navigator.current()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            screen: self.navigator.current(),
            view: ScreenView::build(&self.navigator, &self.catalog, &self.calculator),
            routes: self.navigator.routes(),
            operator: self.operator.clone(),
        }
    }

    /// Any credentials, including empty ones, open the catalog.
    #[instrument(skip(self), fields(screen = %self.navigator.current()))]
    pub fn submit_login(&mut self, credentials: Credentials) -> ActionOutcome {
        match self.navigator.enter_catalog() {
            Ok(transition) => {
                let name = credentials.username.trim();
                self.operator = (!name.is_empty()).then(|| name.to_string());
                info!(operator = ?self.operator, "Login submitted");
                ActionOutcome::Navigated(transition)
            }
            Err(refused) => ignored(refused),
        }
    }

    #[instrument(skip(self), fields(screen = %self.navigator.current()))]
    pub fn select_product(&mut self, id: ProductId) -> ActionOutcome {
        let Some(product) = self.catalog.get(id) else {
            return ignored(IgnoredReason::UnknownProduct(id));
        };
        let state = match self.navigator.catalog_state_mut() {
            Ok(state) => state,
            Err(refused) => return ignored(refused),
        };
        let selection = state.select_product(product);
        info!(product_name = %selection.product.name, quantity = %selection.quantity, "Product selected");
        ActionOutcome::Selected(selection)
    }

    #[instrument(skip(self))]
    pub fn adjust_row(&mut self, id: ProductId, increment: bool) -> ActionOutcome {
        if self.catalog.get(id).is_none() {
            return ignored(IgnoredReason::UnknownProduct(id));
        }
        let state = match self.navigator.catalog_state_mut() {
            Ok(state) => state,
            Err(refused) => return ignored(refused),
        };
        let quantity = if increment {
            state.increment_row(id)
        } else {
            state.decrement_row(id)
        };
        ActionOutcome::QuantityChanged { product: id, quantity }
    }

    #[instrument(skip(self))]
    pub fn adjust_selected(&mut self, increment: bool) -> ActionOutcome {
        let state = match self.navigator.catalog_state_mut() {
            Ok(state) => state,
            Err(refused) => return ignored(refused),
        };
        let adjusted = if increment {
            state.increment_quantity()
        } else {
            state.decrement_quantity()
        };
        match (adjusted, state.selected()) {
            (Some(quantity), Some(product)) => ActionOutcome::QuantityChanged {
                product: product.id,
                quantity,
            },
            _ => ignored(NavigationRefused::NoSelection),
        }
    }

    pub fn clear_selection(&mut self) -> ActionOutcome {
        match self.navigator.catalog_state_mut() {
            Ok(state) => {
                state.clear_selection();
                ActionOutcome::SelectionCleared
            }
            Err(refused) => ignored(refused),
        }
    }

    /// Hands the current selection to the invoice screen.
    #[instrument(skip(self), fields(screen = %self.navigator.current()))]
    pub fn confirm(&mut self) -> ActionOutcome {
        let selection = match self.navigator.catalog_state_mut() {
            Ok(state) => state.selection(),
            Err(refused) => return ignored(refused),
        };
        let Some(selection) = selection else {
            return ignored(NavigationRefused::NoSelection);
        };
        let amounts = self.calculator.compute(&selection);
        match self.navigator.show_invoice(selection) {
            Ok(transition) => {
                info!(total = %amounts.total, "Invoice opened");
                ActionOutcome::Navigated(transition)
            }
            Err(refused) => ignored(refused),
        }
    }

    #[instrument(skip(self), fields(screen = %self.navigator.current()))]
    pub fn back(&mut self) -> ActionOutcome {
        match self.navigator.back() {
            Ok(transition) => {
                info!(to = %transition.destination(), "Navigated back");
                ActionOutcome::Navigated(transition)
            }
            Err(refused) => ignored(refused),
        }
    }
}
