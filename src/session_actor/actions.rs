use std::fmt;

use crate::domain::{ProductId, Quantity, Selection};
use crate::screen_flow::Transition;

use super::IgnoredReason;

/// Whatever was typed on the login screen. Never validated.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// User interactions a session understands.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// Login → Catalog, whatever the credentials.
    SubmitLogin(Credentials),
    /// Taps a catalog row, making it the selection.
    SelectProduct(ProductId),
    /// Row `+` button.
    IncrementRow(ProductId),
    /// Row `-` button, clamped at one.
    DecrementRow(ProductId),
    /// Adjusts the selected product.
    IncrementQuantity,
    DecrementQuantity,
    ClearSelection,
    /// Catalog → Invoice. Ignored until something is selected.
    Confirm,
    /// Invoice → Catalog.
    Back,
}

/// What an action did. Refusals are reported, never raised.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Navigated(Transition),
    Selected(Selection),
    QuantityChanged { product: ProductId, quantity: Quantity },
    SelectionCleared,
    Ignored(IgnoredReason),
}

impl ActionOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, ActionOutcome::Ignored(_))
    }
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionOutcome::Navigated(t) => write!(f, "-> {}", t.destination()),
            ActionOutcome::Selected(s) => write!(f, "selected {} x{}", s.product.name, s.quantity),
            ActionOutcome::QuantityChanged { product, quantity } => {
                write!(f, "product {} quantity {}", product, quantity)
            }
            ActionOutcome::SelectionCleared => f.write_str("selection cleared"),
            ActionOutcome::Ignored(reason) => write!(f, "ignored: {}", reason),
        }
    }
}
