use std::fmt;

use thiserror::Error;

use super::CatalogState;
use crate::domain::Selection;

/// The three screens a session can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Login,
    Catalog,
    Invoice,
}

impl Screen {
    pub fn route(self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Catalog => "furnitureList",
            Screen::Invoice => "invoice",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

/// One level of the navigation stack together with the state it owns.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenEntry {
    Login,
    Catalog(CatalogState),
    Invoice(Selection),
}

impl ScreenEntry {
    pub fn screen(&self) -> Screen {
        match self {
            ScreenEntry::Login => Screen::Login,
            ScreenEntry::Catalog(_) => Screen::Catalog,
            ScreenEntry::Invoice(_) => Screen::Invoice,
        }
    }
}

/// A transition that was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Pushed { from: Screen, to: Screen },
    Popped { from: Screen, to: Screen },
}

impl Transition {
    pub fn destination(self) -> Screen {
        match self {
            Transition::Pushed { to, .. } | Transition::Popped { to, .. } => to,
        }
    }
}

/// Why a transition did not happen. None of these are failures; the
/// stack is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationRefused {
    #[error("not available on the {current} screen (needs {expected})")]
    WrongScreen { expected: Screen, current: Screen },
    #[error("no product selected")]
    NoSelection,
}

/// Stack-based controller for the login → catalog → invoice flow.
///
/// The bottom entry is always `Login`, so the stack is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    stack: Vec<ScreenEntry>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![ScreenEntry::Login],
        }
    }

    pub fn current(&self) -> Screen {
        // Login is never popped.
        self.top().map_or(Screen::Login, ScreenEntry::screen)
    }

    pub fn top(&self) -> Option<&ScreenEntry> {
        self.stack.last()
    }

    pub fn routes(&self) -> Vec<&'static str> {
        self.stack.iter().map(|e| e.screen().route()).collect()
    }

    fn require(&self, expected: Screen) -> Result<(), NavigationRefused> {
        let current = self.current();
        if current == expected {
            Ok(())
        } else {
            Err(NavigationRefused::WrongScreen { expected, current })
        }
    }

    /// Login → Catalog with a fresh catalog state.
    pub fn enter_catalog(&mut self) -> Result<Transition, NavigationRefused> {
        self.require(Screen::Login)?;
        self.stack.push(ScreenEntry::Catalog(CatalogState::new()));
        Ok(Transition::Pushed {
            from: Screen::Login,
            to: Screen::Catalog,
        })
    }

    /// Catalog → Invoice, carrying `selection` as the invoice's payload.
    pub fn show_invoice(&mut self, selection: Selection) -> Result<Transition, NavigationRefused> {
        self.require(Screen::Catalog)?;
        self.stack.push(ScreenEntry::Invoice(selection));
        Ok(Transition::Pushed {
            from: Screen::Catalog,
            to: Screen::Invoice,
        })
    }

    /// Invoice → Catalog. The invoice's selection is dropped with its entry;
    /// the catalog below keeps its own selection and counters.
    pub fn back(&mut self) -> Result<Transition, NavigationRefused> {
        self.require(Screen::Invoice)?;
        self.stack.pop();
        Ok(Transition::Popped {
            from: Screen::Invoice,
            to: self.current(),
        })
    }

    /// The catalog state, only while the catalog screen is on top.
    pub fn catalog_state(&self) -> Option<&CatalogState> {
        match self.top() {
            Some(ScreenEntry::Catalog(state)) => Some(state),
            _ => None,
        }
    }

    pub fn catalog_state_mut(&mut self) -> Result<&mut CatalogState, NavigationRefused> {
        let current = self.current();
        match self.stack.last_mut() {
            Some(ScreenEntry::Catalog(state)) => Ok(state),
            _ => Err(NavigationRefused::WrongScreen {
                expected: Screen::Catalog,
                current,
            }),
        }
    }
}
