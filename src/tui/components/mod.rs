//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `Header`: Back chevron and screen title
//! - `Welcome`, `JoinGroup`, `Results`: one per screen
//! - `SwipeDeck`: The top dish card, shifted by the drag offset
//! - `AlertModal`: Informational popup for scanned text
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state in `TuiState` and emit events:
//! - `FiltersState`: Cursor over the radius slider and option checkboxes
//! - `ScannerState`: Text buffer standing in for the camera
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── header.rs        (Back chevron + title)
//! ├── welcome.rs       (Start group / solo)
//! ├── join_group.rs    (Member list)
//! ├── filters.rs       (Radius, dietary, vibe)
//! ├── swipe_deck.rs    (Dish card + buttons)
//! ├── results.rs       (Top matches)
//! ├── scanner.rs       (QR scanner overlay)
//! └── alert.rs         (Scanned code modal)
//! ```

pub mod alert;
pub mod filters;
pub mod header;
pub mod join_group;
pub mod results;
pub mod scanner;
pub mod swipe_deck;
pub mod welcome;

pub use alert::AlertModal;
pub use filters::{FilterEvent, Filters, FiltersState};
pub use header::Header;
pub use join_group::JoinGroup;
pub use results::Results;
pub use scanner::{ScanEvent, Scanner, ScannerState};
pub use swipe_deck::SwipeDeck;
pub use welcome::Welcome;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};

use crate::tui::theme;

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

/// `[key] label` rendered as a primary button.
pub fn primary_button(key: &str, label: &str) -> Line<'static> {
    Line::from(Span::styled(format!(" [{key}] {label} "), theme::primary_button()))
}

pub fn secondary_button(key: &str, label: &str) -> Line<'static> {
    Line::from(Span::styled(format!(" [{key}] {label} "), theme::secondary_button()))
}
