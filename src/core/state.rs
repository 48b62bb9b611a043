//! # Application State
//!
//! Core business state for Dish Decider. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── flow: ScreenFlow              // current screen + generation counter
//! ├── session: Session              // members, radius, filters
//! ├── deck: Deck                    // remaining cards + liked list
//! ├── gesture: GestureMapper        // in-progress drag
//! ├── catalog: Catalog              // reloaded into the deck on reset
//! ├── status_message: String        // status bar text
//! ├── alert: Option<String>         // informational modal (QR text)
//! ├── scanner_open: bool            // QR scanner overlay visible
//! ├── last_removal: Option<..>      // direction the last card left
//! ├── origin: (f64, f64)            // distances measured from here
//! └── url_schemes: Vec<String>      // schemes the URL opener accepts
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::catalog::Catalog;
use crate::core::config::{DEFAULT_ORIGIN, ResolvedConfig};
use crate::core::deck::Deck;
use crate::core::flow::{Screen, ScreenFlow};
use crate::core::gesture::{GestureMapper, RemovalTransition};
use crate::core::qr;
use crate::core::session::Session;

pub struct App {
    pub flow: ScreenFlow,
    pub session: Session,
    pub deck: Deck,
    pub gesture: GestureMapper,
    pub catalog: Catalog,
    pub status_message: String,
    /// Informational alert text; `Some` while the modal is shown.
    pub alert: Option<String>,
    pub scanner_open: bool,
    /// Set on every removal so the renderer can animate the card out.
    pub last_removal: Option<RemovalTransition>,
    /// (latitude, longitude) the results screen measures distance from.
    pub origin: (f64, f64),
    pub url_schemes: Vec<String>,
}

impl App {
    pub fn new(catalog: Catalog, session: Session) -> Self {
        Self {
            flow: ScreenFlow::new(),
            session,
            deck: Deck::new(&catalog.dishes),
            gesture: GestureMapper::new(),
            catalog,
            status_message: String::new(),
            alert: None,
            scanner_open: false,
            last_removal: None,
            origin: DEFAULT_ORIGIN,
            url_schemes: qr::default_schemes(),
        }
    }

    pub fn from_config(catalog: Catalog, config: &ResolvedConfig) -> Self {
        Self {
            origin: config.origin,
            url_schemes: config.url_schemes.clone(),
            ..Self::new(catalog, config.session.clone())
        }
    }

    pub fn screen(&self) -> Screen {
        self.flow.current()
    }

    /// Reload the catalog into the deck and clear the liked list.
    pub fn reload_deck(&mut self) {
        self.deck.reset(&self.catalog.dishes);
        self.gesture.reset();
        self.last_removal = None;
    }
}
